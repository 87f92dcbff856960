use rand::Rng;

use crate::dataset::Dataset2d;
use crate::datasets::uniform;

/// Two point-symmetric spiral arms. Arm parameter `t` advances with the
/// sample index and picks up uniform noise in `[-noise, noise)`; the second
/// arm is the first mirrored through the origin and labeled `+1`.
pub fn spirals<R: Rng + ?Sized>(n_samples: usize, noise: f64, rng: &mut R) -> Dataset2d {
    let arm_samples = n_samples / 2;
    let mut set = Dataset2d::default();

    for i in 0..arm_samples {
        let t = 1.25 * i as f64 / n_samples as f64 + uniform(-noise, noise, rng);
        let x = (1.0 + t) * t.cos();
        let y = (1.0 + t) * t.sin();

        set.push([x, y], -1.0);
        set.push([-x, -y], 1.0);
    }

    set
}
