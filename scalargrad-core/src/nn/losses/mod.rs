//! Loss functions reducing predictions and targets to a scalar graph node.

pub mod hinge;
pub mod mse;

pub use hinge::{hinge_loss, HingeLoss};
pub use mse::mse_loss;
