use crate::graph::{Graph, NodeId};
use approx::abs_diff_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical} != numerical grad {numerical}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNonFinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against central finite differences.
///
/// `build` receives a fresh graph plus one leaf per entry of `inputs` and
/// returns the root to differentiate. One analytical pass reads the leaf
/// gradients; then, per input, the closure is re-run twice with that input
/// perturbed by `±epsilon` and the symmetric difference quotient is compared
/// within `tolerance`.
pub fn check_grad<F>(
    build: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> NodeId,
{
    let analytical = {
        let mut graph = Graph::new();
        let leaves: Vec<NodeId> = inputs.iter().map(|&value| graph.leaf(value)).collect();
        let root = build(&mut graph, &leaves);
        graph.backward(root);
        leaves
            .iter()
            .map(|&leaf| graph.grad(leaf))
            .collect::<Vec<f64>>()
    };

    for (input_index, &x) in inputs.iter().enumerate() {
        if !analytical[input_index].is_finite() {
            return Err(GradCheckError::AnalyticalGradNonFinite {
                input_index,
                value: analytical[input_index],
            });
        }

        let loss_plus = eval_perturbed(&build, inputs, input_index, x + epsilon);
        let loss_minus = eval_perturbed(&build, inputs, input_index, x - epsilon);
        if !loss_plus.is_finite() || !loss_minus.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !abs_diff_eq!(analytical[input_index], numerical, epsilon = tolerance) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical: analytical[input_index],
                numerical,
                difference: (analytical[input_index] - numerical).abs(),
            });
        }
    }
    Ok(())
}

/// Forward value of the expression with one input replaced.
fn eval_perturbed<F>(build: &F, inputs: &[f64], index: usize, value: f64) -> f64
where
    F: Fn(&mut Graph, &[NodeId]) -> NodeId,
{
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs
        .iter()
        .enumerate()
        .map(|(i, &original)| graph.leaf(if i == index { value } else { original }))
        .collect();
    let root = build(&mut graph, &leaves);
    graph.value(root)
}
