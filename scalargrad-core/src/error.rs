use thiserror::Error;

/// Custom error type for the scalargrad framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Cannot build a perceptron without hidden layers")]
    NoHiddenLayers,

    #[error("Layer {layer_index} was declared with zero neurons")]
    EmptyLayer { layer_index: usize },

    #[error("Cannot compute {operation} over an empty batch")]
    EmptyBatch { operation: String },
}
