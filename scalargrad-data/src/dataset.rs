use rand::seq::SliceRandom;
use rand::Rng;

/// A labeled 2-D point cloud with targets in `{-1, +1}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset2d {
    pub points: Vec<[f64; 2]>,
    pub labels: Vec<f64>,
}

impl Dataset2d {
    pub fn new(points: Vec<[f64; 2]>, labels: Vec<f64>) -> Self {
        debug_assert_eq!(points.len(), labels.len());
        Dataset2d { points, labels }
    }

    /// Returns the total number of samples in the dataset.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the dataset contains no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: [f64; 2], label: f64) {
        self.points.push(point);
        self.labels.push(label);
    }

    /// Random permutation keeping each point paired with its label.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.shuffle(rng);
        self.points = order.iter().map(|&i| self.points[i]).collect();
        self.labels = order.iter().map(|&i| self.labels[i]).collect();
    }

    /// Iterates over `(point, label)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64; 2], f64)> {
        self.points.iter().zip(self.labels.iter().copied())
    }
}
