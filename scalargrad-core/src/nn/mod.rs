//! Network composition: neurons, layers, and the multilayer perceptron.

pub mod init;
pub mod layer;
pub mod losses;
pub mod mlp;
pub mod neuron;

// Re-export key items for easier access
pub use init::Init;
pub use layer::{Layer, LayerKind};
pub use mlp::Mlp;
pub use neuron::Neuron;
