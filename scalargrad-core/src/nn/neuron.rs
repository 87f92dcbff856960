use rand::Rng;

use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::nn::init::Init;

/// A single weighted-sum-plus-bias unit.
///
/// The weights and the bias are persistent leaves in the graph (allocated
/// once, updated in place by the optimizer); everything else the neuron
/// produces is rebuilt on each forward pass.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
    activation: Option<NodeId>,
}

impl Neuron {
    /// Allocates `in_features` weights plus a bias in `graph`, sampling every
    /// value from `init`. `name` prefixes the debug labels of the parameter
    /// leaves (`<name>_w0`, ..., `<name>_b`).
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        in_features: usize,
        init: Init,
        rng: &mut R,
        name: &str,
    ) -> Self {
        let weights = (0..in_features)
            .map(|i| graph.labeled_leaf(init.sample(rng), format!("{}_w{}", name, i)))
            .collect();
        let bias = graph.labeled_leaf(init.sample(rng), format!("{}_b", name));
        Neuron {
            weights,
            bias,
            activation: None,
        }
    }

    /// Weighted sum of `inputs` plus bias, rectified unless this neuron sits
    /// in the output layer (raw scores feed margin and regression losses).
    ///
    /// The returned node is also retained as the neuron's last activation for
    /// introspection; no other computation reads it.
    pub fn forward(
        &mut self,
        graph: &mut Graph,
        inputs: &[NodeId],
        output_layer: bool,
    ) -> Result<NodeId, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron forward".to_string(),
            });
        }

        let mut terms: Vec<NodeId> = inputs
            .iter()
            .zip(&self.weights)
            .map(|(&input, &weight)| graph.mul(input, weight))
            .collect();
        terms.push(self.bias);
        let weighted_sum = graph.sum(&terms);

        let out = if output_layer {
            weighted_sum
        } else {
            graph.relu(weighted_sum)
        };
        self.activation = Some(out);
        Ok(out)
    }

    /// The bias first, then the weights in order.
    pub fn parameters(&self) -> Vec<NodeId> {
        let mut params = Vec::with_capacity(1 + self.weights.len());
        params.push(self.bias);
        params.extend_from_slice(&self.weights);
        params
    }

    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    /// Node produced by the most recent forward pass, if any. Becomes stale
    /// once the graph rolls back past it.
    pub fn activation(&self) -> Option<NodeId> {
        self.activation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_neuron(graph: &mut Graph, weights: &[f64], bias: f64) -> Neuron {
        let mut rng = StdRng::seed_from_u64(0);
        let neuron = Neuron::new(graph, weights.len(), Init::default(), &mut rng, "n");
        for (&id, &value) in neuron.weights.iter().zip(weights) {
            graph.set_value(id, value);
        }
        graph.set_value(neuron.bias, bias);
        neuron
    }

    #[test]
    fn forward_computes_weighted_sum_plus_bias() {
        let mut graph = Graph::new();
        let mut neuron = fixed_neuron(&mut graph, &[2.0, -1.0], 0.5);
        let inputs = [graph.leaf(3.0), graph.leaf(4.0)];

        let out = neuron.forward(&mut graph, &inputs, true).unwrap();
        // 2*3 + (-1)*4 + 0.5
        assert_eq!(graph.value(out), 2.5);
        assert_eq!(neuron.activation(), Some(out));
    }

    #[test]
    fn hidden_neuron_rectifies_its_sum() {
        let mut graph = Graph::new();
        let mut neuron = fixed_neuron(&mut graph, &[1.0], -10.0);
        let inputs = [graph.leaf(2.0)];

        let out = neuron.forward(&mut graph, &inputs, false).unwrap();
        assert_eq!(graph.value(out), 0.0);

        let raw = neuron.forward(&mut graph, &inputs, true).unwrap();
        assert_eq!(graph.value(raw), -8.0);
    }

    #[test]
    fn forward_rejects_mismatched_input_width() {
        let mut graph = Graph::new();
        let mut neuron = fixed_neuron(&mut graph, &[1.0, 1.0], 0.0);
        let inputs = [graph.leaf(1.0)];

        let err = neuron.forward(&mut graph, &inputs, false).unwrap_err();
        assert_eq!(
            err,
            ScalarGradError::ShapeMismatch {
                expected: 2,
                actual: 1,
                operation: "Neuron forward".to_string(),
            }
        );
    }

    #[test]
    fn parameters_are_bias_first() {
        let mut graph = Graph::new();
        let neuron = fixed_neuron(&mut graph, &[0.1, 0.2], 0.3);
        let params = neuron.parameters();
        assert_eq!(params.len(), 3);
        assert_eq!(params[0], neuron.bias);
        assert_eq!(&params[1..], neuron.weights.as_slice());
    }

    #[test]
    fn parameter_leaves_carry_labels() {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(3);
        let neuron = Neuron::new(&mut graph, 2, Init::default(), &mut rng, "l0_n1");
        assert_eq!(graph.label(neuron.weights[0]), Some("l0_n1_w0"));
        assert_eq!(graph.label(neuron.weights[1]), Some("l0_n1_w1"));
        assert_eq!(graph.label(neuron.bias), Some("l0_n1_b"));
    }
}
