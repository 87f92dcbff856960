//! Synthetic point-cloud generators.
//!
//! Each generator draws a classic two-class toy distribution. Sample counts
//! are split evenly between the classes; an odd `n_samples` leaves the spare
//! point to whichever class the generator fills last.

pub mod circles;
pub mod moons;
pub mod spirals;

pub use circles::circles;
pub use moons::moons;
pub use spirals::spirals;

use rand::Rng;

/// Uniform jitter in `[-noise/2, noise/2)`.
pub(crate) fn jitter<R: Rng + ?Sized>(noise: f64, rng: &mut R) -> f64 {
    (rng.gen::<f64>() - 0.5) * noise
}

/// Uniform sample in `[min, max)`.
pub(crate) fn uniform<R: Rng + ?Sized>(min: f64, max: f64, rng: &mut R) -> f64 {
    rng.gen::<f64>() * (max - min) + min
}
