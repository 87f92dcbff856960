use std::f64::consts::PI;

use rand::Rng;

use crate::dataset::Dataset2d;
use crate::datasets::jitter;

/// Two interleaved half-moons: an outer arc labeled `-1` and an inner arc,
/// shifted by `+1` in x, labeled `+1`. Every coordinate (and each arc angle)
/// gets uniform jitter scaled by `noise`. The result is shuffled.
pub fn moons<R: Rng + ?Sized>(n_samples: usize, noise: f64, rng: &mut R) -> Dataset2d {
    let n_outer = n_samples / 2;
    let n_inner = n_samples - n_outer;
    let mut set = Dataset2d::default();

    for i in 0..n_outer {
        let angle = PI * i as f64 / n_outer as f64 + jitter(noise, rng);
        set.push(
            [
                angle.cos() + jitter(noise, rng),
                angle.sin() + jitter(noise, rng),
            ],
            -1.0,
        );
    }

    for i in 0..n_inner {
        let angle = PI * i as f64 / n_inner as f64 + PI + jitter(noise, rng);
        set.push(
            [
                1.0 + angle.cos() + jitter(noise, rng),
                angle.sin() + jitter(noise, rng),
            ],
            1.0,
        );
    }

    set.shuffle(rng);
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn produces_the_requested_sample_count() {
        let mut rng = StdRng::seed_from_u64(0);
        let set = moons(100, 0.05, &mut rng);
        assert_eq!(set.len(), 100);

        // Odd counts give the spare point to the inner moon.
        let set = moons(101, 0.05, &mut rng);
        assert_eq!(set.len(), 101);
    }

    #[test]
    fn classes_are_balanced_with_unit_labels() {
        let mut rng = StdRng::seed_from_u64(1);
        let set = moons(100, 0.05, &mut rng);
        let positives = set.labels.iter().filter(|&&label| label == 1.0).count();
        let negatives = set.labels.iter().filter(|&&label| label == -1.0).count();
        assert_eq!(positives, 50);
        assert_eq!(negatives, 50);
    }

    #[test]
    fn noiseless_moons_sit_on_their_arcs() {
        let mut rng = StdRng::seed_from_u64(2);
        let set = moons(40, 0.0, &mut rng);
        for (point, label) in set.iter() {
            let center_x = if label > 0.0 { 1.0 } else { 0.0 };
            let radius =
                ((point[0] - center_x).powi(2) + point[1].powi(2)).sqrt();
            assert!((radius - 1.0).abs() < 1e-9);
        }
    }
}
