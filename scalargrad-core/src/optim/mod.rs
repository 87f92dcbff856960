//! Optimizers for training.
//!
//! This module provides the `Optimizer` trait, the plain gradient-descent
//! implementation, and learning-rate scheduling.

pub mod lr_scheduler;
pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use lr_scheduler::LinearDecay;
pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
