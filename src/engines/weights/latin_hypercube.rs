use super::generator::WeightStrategy;
use super::simplex_point;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Space-filling design over the unit cube of a fixed dimension.
pub trait SpaceFillingDesign {
    fn dimension(&self) -> usize;
    fn points(&self, count: usize) -> Vec<Vec<f64>>;
}

/// Latin hypercube sampling: every coordinate hits each of the `count`
/// equal-width strata exactly once.
#[derive(Debug, Clone, Copy)]
pub struct LatinHypercube {
    dimension: usize,
    seed: Option<u64>,
}

impl LatinHypercube {
    pub fn new(dimension: usize, seed: Option<u64>) -> Self {
        Self { dimension, seed }
    }
}

impl SpaceFillingDesign for LatinHypercube {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn points(&self, count: usize) -> Vec<Vec<f64>> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut points = vec![Vec::with_capacity(self.dimension); count];
        let mut strata: Vec<usize> = (0..count).collect();
        for _ in 0..self.dimension {
            strata.shuffle(&mut rng);
            for (point, &stratum) in points.iter_mut().zip(&strata) {
                point.push((stratum as f64 + rng.gen::<f64>()) / count as f64);
            }
        }
        points
    }
}

/// Simplex weights from a latin hypercube design of dimension `dim - 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatinHypercubeWeights {
    seed: Option<u64>,
}

impl LatinHypercubeWeights {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl WeightStrategy for LatinHypercubeWeights {
    fn generate(&self, count: usize, dimension: usize) -> Result<Vec<Vec<f64>>> {
        let design = LatinHypercube::new(dimension.saturating_sub(1), self.seed);
        Ok(design
            .points(count)
            .iter()
            .map(|point| simplex_point(point))
            .collect())
    }
}
