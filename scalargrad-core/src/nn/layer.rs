use rand::Rng;

use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::nn::init::Init;
use crate::nn::neuron::Neuron;

/// Whether a layer rectifies its neuron sums or emits raw scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Hidden,
    Output,
}

/// A group of neurons sharing one input dimensionality.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    kind: LayerKind,
}

impl Layer {
    /// Builds `out_features` neurons of `in_features` inputs each.
    /// `layer_index` names the layer in parameter labels and errors.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        in_features: usize,
        out_features: usize,
        kind: LayerKind,
        init: Init,
        rng: &mut R,
        layer_index: usize,
    ) -> Result<Self, ScalarGradError> {
        if out_features == 0 {
            return Err(ScalarGradError::EmptyLayer { layer_index });
        }
        let neurons = (0..out_features)
            .map(|neuron_index| {
                Neuron::new(
                    graph,
                    in_features,
                    init,
                    rng,
                    &format!("l{}_n{}", layer_index, neuron_index),
                )
            })
            .collect();
        Ok(Layer { neurons, kind })
    }

    /// One output node per neuron, activation fixed by the layer kind.
    pub fn forward(
        &mut self,
        graph: &mut Graph,
        inputs: &[NodeId],
    ) -> Result<Vec<NodeId>, ScalarGradError> {
        let output_layer = self.kind == LayerKind::Output;
        self.neurons
            .iter_mut()
            .map(|neuron| neuron.forward(graph, inputs, output_layer))
            .collect()
    }

    pub fn parameters(&self) -> Vec<NodeId> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }
}
