use super::hammersley::Hammersley;
use super::latin_hypercube::LatinHypercubeWeights;
use crate::config::{WeightConfig, WeightStrategyKind};
use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Produces `count` simplex weight vectors of length `dimension`.
pub trait WeightStrategy: Send + Sync {
    fn generate(&self, count: usize, dimension: usize) -> Result<Vec<Vec<f64>>>;
}

/// Caches one weight set per objective count.
///
/// A cached set is reused whenever it holds at least the requested number
/// of vectors; a larger request regenerates and replaces it.
pub struct WeightVectorGenerator {
    strategy: Box<dyn WeightStrategy>,
    cache: Mutex<HashMap<usize, Arc<Vec<Vec<f64>>>>>,
}

impl WeightVectorGenerator {
    pub fn new(strategy: Box<dyn WeightStrategy>) -> Self {
        Self {
            strategy,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &WeightConfig) -> Self {
        let strategy: Box<dyn WeightStrategy> = match config.strategy {
            WeightStrategyKind::Hammersley => Box::new(Hammersley),
            WeightStrategyKind::LatinHypercube { seed } => Box::new(LatinHypercubeWeights::new(seed)),
        };
        Self::new(strategy)
    }

    pub fn get_weight_vectors(&self, count: usize, dimension: usize) -> Result<Arc<Vec<Vec<f64>>>> {
        if count == 0 || dimension == 0 {
            return Err(CoreError::InvalidArgument(format!(
                "weight vectors need a positive count and dimension, got {} x {}",
                count, dimension
            )));
        }

        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = cache.get(&dimension) {
            if cached.len() >= count {
                return Ok(Arc::clone(cached));
            }
        }

        log::debug!("Generating {} weight vectors of dimension {}", count, dimension);
        let weights = Arc::new(self.strategy.generate(count, dimension)?);
        cache.insert(dimension, Arc::clone(&weights));
        Ok(weights)
    }
}
