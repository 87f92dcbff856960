use std::f64::consts::PI;

use rand::Rng;

use crate::dataset::Dataset2d;
use crate::datasets::uniform;

/// An annulus (label `-1`) around an inner disc (label `+1`). Radii split at
/// `0.3 * factor`; every coordinate picks up `noise`-scaled uniform jitter.
pub fn circles<R: Rng + ?Sized>(
    n_samples: usize,
    noise: f64,
    factor: f64,
    rng: &mut R,
) -> Dataset2d {
    let pairs = n_samples / 2;
    let split = 0.3 * factor;
    let mut set = Dataset2d::default();

    for _ in 0..pairs {
        let angle = uniform(0.0, 2.0 * PI, rng);

        let radius = uniform(split, 1.0, rng);
        set.push(
            [
                radius * angle.cos() + noise * uniform(-1.0, 1.0, rng),
                radius * angle.sin() + noise * uniform(-1.0, 1.0, rng),
            ],
            -1.0,
        );

        let radius = uniform(0.0, split, rng);
        set.push(
            [
                radius * angle.cos() + noise * uniform(-1.0, 1.0, rng),
                radius * angle.sin() + noise * uniform(-1.0, 1.0, rng),
            ],
            1.0,
        );
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn classes_alternate_and_balance() {
        let mut rng = StdRng::seed_from_u64(0);
        let set = circles(100, 0.05, 0.5, &mut rng);
        assert_eq!(set.len(), 100);
        let positives = set.labels.iter().filter(|&&label| label == 1.0).count();
        assert_eq!(positives, 50);
    }

    #[test]
    fn noiseless_classes_split_at_the_factor_radius() {
        let mut rng = StdRng::seed_from_u64(1);
        let factor = 0.5;
        let split = 0.3 * factor;
        let set = circles(200, 0.0, factor, &mut rng);

        for (point, label) in set.iter() {
            let radius = (point[0].powi(2) + point[1].powi(2)).sqrt();
            if label > 0.0 {
                assert!(radius < split + 1e-9);
            } else {
                assert!(radius >= split - 1e-9);
            }
        }
    }
}
