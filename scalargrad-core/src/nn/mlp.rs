use rand::Rng;

use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::nn::init::Init;
use crate::nn::layer::{Layer, LayerKind};

/// A feed-forward stack of fully-connected scalar layers.
///
/// Hidden layers rectify; the final layer is tagged [`LayerKind::Output`]
/// and emits raw scores suitable for regression and margin losses.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
    n_inputs: usize,
    n_outputs: usize,
}

impl Mlp {
    /// Builds a model with the default uniform `[-1, 1)` initialization and
    /// a thread-local RNG. See [`Mlp::with_init`] for seeded construction.
    pub fn new(
        graph: &mut Graph,
        n_inputs: usize,
        hidden: &[usize],
        n_outputs: usize,
    ) -> Result<Self, ScalarGradError> {
        Self::with_init(
            graph,
            n_inputs,
            hidden,
            n_outputs,
            Init::default(),
            &mut rand::thread_rng(),
        )
    }

    /// Builds a model sampling every weight and bias from `init` via `rng`.
    ///
    /// Layer widths chain: hidden layer `i`'s neuron count is hidden layer
    /// `i + 1`'s input width, and the last hidden width feeds the output
    /// layer. An empty hidden list fails construction; so does any
    /// zero-width layer.
    pub fn with_init<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_inputs: usize,
        hidden: &[usize],
        n_outputs: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if hidden.is_empty() {
            return Err(ScalarGradError::NoHiddenLayers);
        }

        let mut layers = Vec::with_capacity(hidden.len() + 1);
        let mut in_features = n_inputs;
        for (layer_index, &width) in hidden.iter().enumerate() {
            layers.push(Layer::new(
                graph,
                in_features,
                width,
                LayerKind::Hidden,
                init,
                rng,
                layer_index,
            )?);
            in_features = width;
        }
        layers.push(Layer::new(
            graph,
            in_features,
            n_outputs,
            LayerKind::Output,
            init,
            rng,
            hidden.len(),
        )?);

        Ok(Mlp {
            layers,
            n_inputs,
            n_outputs,
        })
    }

    /// Runs `inputs` through every layer in order and returns the output
    /// layer's raw scores, one per declared output.
    pub fn predict(
        &mut self,
        graph: &mut Graph,
        inputs: &[NodeId],
    ) -> Result<Vec<NodeId>, ScalarGradError> {
        if inputs.len() != self.n_inputs {
            return Err(ScalarGradError::ShapeMismatch {
                expected: self.n_inputs,
                actual: inputs.len(),
                operation: "Mlp predict".to_string(),
            });
        }
        let mut outputs = inputs.to_vec();
        for layer in &mut self.layers {
            outputs = layer.forward(graph, &outputs)?;
        }
        Ok(outputs)
    }

    /// Every neuron's bias followed by its weights, across all layers in
    /// layer-then-neuron order.
    ///
    /// This ordering is the canonical one for optimizer updates and is
    /// stable for the lifetime of the model: the same persistent leaf ids
    /// come back in the same order on every call.
    pub fn parameters(&self) -> Vec<NodeId> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_outputs(&self) -> usize {
        self.n_outputs
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests; // Link to the test file
