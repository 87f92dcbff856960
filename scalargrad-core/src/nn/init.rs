use rand::Rng;
use rand_distr::StandardNormal;

/// Parameter initialization strategies.
///
/// The default is the uniform `[-1, 1)` draw the hand-rolled perceptron
/// literature tends to use for tiny networks; Gaussian initialization is
/// available for experiments that want it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std_dev: f64 },
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Draws a single sample from the strategy.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            Init::Uniform { low, high } => rng.gen_range(low..high),
            Init::Normal { mean, std_dev } => {
                let standard: f64 = rng.sample(StandardNormal);
                mean + std_dev * standard
            }
        }
    }
}
