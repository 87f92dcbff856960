use crate::error::ScalarGradError;
use crate::graph::Graph;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their
/// gradients. Parameters live as persistent leaves in the graph, so every
/// method takes the graph they belong to.
pub trait Optimizer {
    /// Performs a single optimization step, reading each managed parameter's
    /// gradient from `graph` and writing the updated value back.
    fn step(&mut self, graph: &mut Graph) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all managed parameters.
    ///
    /// `Graph::backward` already resets reachable gradients at the start of
    /// every pass, so this is only needed by drivers that inspect gradients
    /// after `step` and want a clean slate in between.
    fn zero_grad(&mut self, graph: &mut Graph);
}
