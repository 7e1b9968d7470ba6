// generator.rs - uniform random datasets
use super::types::{Dataset, Point};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DEFAULT_POINT_COUNT: usize = 100;

/// Sample `n` points, each coordinate drawn independently from `[0, 1)`.
pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Dataset {
    (0..n)
        .map(|_| Point::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect()
}

/// Owns the random source so successive datasets differ but stay reproducible
/// under a fixed seed.
pub struct DatasetGenerator {
    rng: ChaCha8Rng,
    point_count: usize,
}

impl DatasetGenerator {
    pub fn new(point_count: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng, point_count }
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn next_dataset(&mut self) -> Dataset {
        generate(self.point_count, &mut self.rng)
    }
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_POINT_COUNT, None)
    }
}
