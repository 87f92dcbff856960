//! Differentiable operations over graph nodes.
//!
//! Every operation appends a new node to the arena; nothing is ever rewritten
//! in place. `sub`, `div`, and `neg` are sugar composed from the primitive
//! operations so their gradients follow from the chain rule with no dedicated
//! backward rule.

pub mod activation;
pub mod arithmetic;
