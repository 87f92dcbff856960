//! scalargrad-core: an educational scalar reverse-mode autodiff engine.
//!
//! Every computation is a DAG of `f64` nodes held in an append-only arena
//! ([`graph::Graph`]); operations record a tagged [`graph::Op`] instead of a
//! closure, and [`Graph::backward`](graph::Graph::backward) walks the reverse
//! post-order applying the matching derivative rule. On top sit the network
//! composition layer ([`nn`]), the loss functions, and gradient descent
//! ([`optim`]).

pub mod autograd;
pub mod graph;
pub mod nn;
pub mod ops;
pub mod optim;

// Re-export the arena types so callers can reach them directly.
pub use graph::{Checkpoint, Graph, NodeId, Op};

pub mod error;
pub use error::ScalarGradError;
