//! Algorithmic core of a multi-objective evolutionary optimizer.
//!
//! The crate covers the pieces an optimization run calls every generation:
//! structural alignment and difference of graph genomes, population
//! diversity, Pareto dominance and ranking, rank-based selection, adaptive
//! resampling of noisy evaluations, and simplex weight vectors for
//! decomposition-based fitness. The generation loop itself, phenotype
//! evaluation and persistence belong to the caller.

pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{fitness_dimension, Encoding, Genotype, InnovationId, Link};
