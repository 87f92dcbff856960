use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::optim::optimizer_trait::Optimizer;

/// Plain stochastic gradient descent over a fixed parameter list:
/// `value -= lr * grad`.
#[derive(Debug, Clone)]
pub struct Sgd {
    params: Vec<NodeId>,
    lr: f64,
}

impl Sgd {
    /// Creates an optimizer over `params` (typically `Mlp::parameters()`)
    /// with the given learning rate.
    pub fn new(params: Vec<NodeId>, lr: f64) -> Self {
        Sgd { params, lr }
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }

    pub fn params(&self) -> &[NodeId] {
        &self.params
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, graph: &mut Graph) -> Result<(), ScalarGradError> {
        for &param in &self.params {
            let updated = graph.value(param) - self.lr * graph.grad(param);
            if !updated.is_finite() {
                // Numeric degeneracy propagates through the graph as NaN/inf
                // rather than erroring; surfacing it is the driver's call.
                log::warn!("SGD update produced a non-finite value for parameter {}", param);
            }
            graph.set_value(param, updated);
        }
        Ok(())
    }

    fn zero_grad(&mut self, graph: &mut Graph) {
        for &param in &self.params {
            graph.zero_grad(param);
        }
    }
}
