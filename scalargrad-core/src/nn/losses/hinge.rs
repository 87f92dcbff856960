use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};

/// Strength of the L2 penalty folded into the hinge objective.
const L2_ALPHA: f64 = 1e-4;

/// Scalar loss node plus the non-differentiable accuracy side channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HingeLoss {
    pub total_loss: NodeId,
    pub accuracy: f64,
}

/// Margin loss for binary classification with targets in `{-1, +1}`.
///
/// Per example: `relu(1 - prediction_i * target_i)`, averaged over the
/// batch, plus `1e-4 * sum(p^2)` over the trainable `parameters`.
///
/// `accuracy` is the fraction of examples whose prediction sign matches the
/// target sign, with a strict `> 0` test on both sides (a prediction of
/// exactly zero counts as non-positive). It is a plain float, outside the
/// graph, and receives no gradient.
pub fn hinge_loss(
    graph: &mut Graph,
    predictions: &[NodeId],
    targets: &[NodeId],
    parameters: &[NodeId],
) -> Result<HingeLoss, ScalarGradError> {
    if predictions.len() != targets.len() {
        return Err(ScalarGradError::ShapeMismatch {
            expected: targets.len(),
            actual: predictions.len(),
            operation: "hinge_loss".to_string(),
        });
    }
    if predictions.is_empty() {
        return Err(ScalarGradError::EmptyBatch {
            operation: "hinge_loss".to_string(),
        });
    }

    let margins: Vec<NodeId> = predictions
        .iter()
        .zip(targets)
        .map(|(&prediction, &target)| {
            let agreement = graph.mul(prediction, target);
            let one = graph.leaf(1.0);
            let gap = graph.sub(one, agreement);
            graph.relu(gap)
        })
        .collect();
    let margin_total = graph.sum(&margins);
    let inverse_count = graph.leaf(1.0 / predictions.len() as f64);
    let data_loss = graph.mul(margin_total, inverse_count);

    // L2 regularization over the trainable parameters.
    let squared_params: Vec<NodeId> = parameters
        .iter()
        .map(|&param| graph.pow(param, 2.0))
        .collect();
    let reg_total = graph.sum(&squared_params);
    let alpha = graph.leaf(L2_ALPHA);
    let reg_loss = graph.mul(reg_total, alpha);

    let total_loss = graph.add(data_loss, reg_loss);

    let correct = predictions
        .iter()
        .zip(targets)
        .filter(|&(&prediction, &target)| {
            (graph.value(target) > 0.0) == (graph.value(prediction) > 0.0)
        })
        .count();
    let accuracy = correct as f64 / predictions.len() as f64;

    Ok(HingeLoss {
        total_loss,
        accuracy,
    })
}
