use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};

/// Mean squared error: `sum((target_i - prediction_i)^2) / n`.
///
/// Predictions and targets must pair up exactly; nothing is truncated or
/// padded.
pub fn mse_loss(
    graph: &mut Graph,
    predictions: &[NodeId],
    targets: &[NodeId],
) -> Result<NodeId, ScalarGradError> {
    if predictions.len() != targets.len() {
        return Err(ScalarGradError::ShapeMismatch {
            expected: targets.len(),
            actual: predictions.len(),
            operation: "mse_loss".to_string(),
        });
    }
    if predictions.is_empty() {
        return Err(ScalarGradError::EmptyBatch {
            operation: "mse_loss".to_string(),
        });
    }

    let squared_errors: Vec<NodeId> = predictions
        .iter()
        .zip(targets)
        .map(|(&prediction, &target)| {
            let difference = graph.sub(target, prediction);
            graph.pow(difference, 2.0)
        })
        .collect();
    let total = graph.sum(&squared_errors);
    let inverse_count = graph.leaf(1.0 / predictions.len() as f64);
    Ok(graph.mul(total, inverse_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn perfect_predictions_have_zero_loss() {
        let mut graph = Graph::new();
        let predictions = [graph.leaf(1.0), graph.leaf(-2.0)];
        let targets = [graph.leaf(1.0), graph.leaf(-2.0)];
        let loss = mse_loss(&mut graph, &predictions, &targets).unwrap();
        assert_eq!(graph.value(loss), 0.0);
    }

    #[test]
    fn loss_averages_squared_differences() {
        let mut graph = Graph::new();
        let predictions = [graph.leaf(0.0), graph.leaf(1.0)];
        let targets = [graph.leaf(2.0), graph.leaf(-1.0)];
        let loss = mse_loss(&mut graph, &predictions, &targets).unwrap();
        // ((2 - 0)^2 + (-1 - 1)^2) / 2 = 4
        assert_abs_diff_eq!(graph.value(loss), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn gradient_flows_back_to_a_single_prediction() {
        let mut graph = Graph::new();
        let prediction = graph.leaf(0.5);
        let target = graph.leaf(2.0);
        let loss = mse_loss(&mut graph, &[prediction], &[target]).unwrap();

        graph.backward(loss);
        // d/dp (t - p)^2 = -2 (t - p) = -3
        assert_abs_diff_eq!(graph.grad(prediction), -3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(graph.grad(target), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let mut graph = Graph::new();
        let predictions = [graph.leaf(1.0)];
        let targets = [graph.leaf(1.0), graph.leaf(2.0)];
        let err = mse_loss(&mut graph, &predictions, &targets).unwrap_err();
        assert_eq!(
            err,
            ScalarGradError::ShapeMismatch {
                expected: 2,
                actual: 1,
                operation: "mse_loss".to_string(),
            }
        );
    }

    #[test]
    fn empty_batches_are_rejected() {
        let mut graph = Graph::new();
        let err = mse_loss(&mut graph, &[], &[]).unwrap_err();
        assert_eq!(
            err,
            ScalarGradError::EmptyBatch {
                operation: "mse_loss".to_string(),
            }
        );
    }
}
