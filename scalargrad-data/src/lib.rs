//! Synthetic 2-D classification datasets for scalargrad.
//!
//! Generators produce labeled point clouds (moons, spirals, circles) with
//! targets in `{-1, +1}`, ready for margin-based training.

pub mod dataset;
pub mod datasets;

// Re-export main components
pub use dataset::Dataset2d;
pub use datasets::{circles, moons, spirals};
