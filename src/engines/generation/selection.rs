//! Rank-based selection
//!
//! Distributions are indexed by rank position: index 0 is the best rank and
//! index `k - 1` the worst. The additive (cumulative) form is a suffix sum,
//! so `cumulative[i]` is the mass of ranks `i..k` and `cumulative[0]` is 1.

use crate::config::SelectionConfig;
use crate::error::{CoreError, Result};
use crate::types::Genotype;
use rand::Rng;

/// Slack allowed when a pointer overshoots the total mass through rounding.
const MASS_TOLERANCE: f64 = 1e-9;

/// Linear ranking: `p(i) = f1 + f2 * (n - (i + 1))`.
///
/// `pressure` must lie in `[1, 2]`: 1.0 gives a uniform distribution, 2.0
/// gives the worst rank zero probability.
pub fn linear_rank_distribution(steps: usize, pressure: f64, additive: bool) -> Result<Vec<f64>> {
    if !(1.0..=2.0).contains(&pressure) {
        return Err(CoreError::InvalidArgument(format!(
            "selection pressure {} outside [1, 2]",
            pressure
        )));
    }
    if steps == 0 {
        return Err(CoreError::InvalidArgument(
            "distribution needs at least one step".to_string(),
        ));
    }
    if steps == 1 {
        return Ok(vec![1.0]);
    }

    let n = steps as f64;
    let f1 = (2.0 - pressure) / n;
    let f2 = 2.0 * (pressure - 1.0) / (n * (n - 1.0));

    let mut distribution: Vec<f64> = (0..steps)
        .map(|i| f1 + f2 * (n - (i + 1) as f64))
        .collect();

    if additive {
        accumulate(&mut distribution);
    }
    Ok(distribution)
}

/// Uniform distribution over `steps` ranks.
pub fn equal_distribution(steps: usize, additive: bool) -> Result<Vec<f64>> {
    if steps == 0 {
        return Err(CoreError::InvalidArgument(
            "distribution needs at least one step".to_string(),
        ));
    }
    let mut distribution = vec![1.0 / steps as f64; steps];
    if additive {
        accumulate(&mut distribution);
    }
    Ok(distribution)
}

/// Suffix-sum from the worst rank to the best.
fn accumulate(distribution: &mut [f64]) {
    for i in (0..distribution.len().saturating_sub(1)).rev() {
        distribution[i] += distribution[i + 1];
    }
}

/// Roulette wheel over a non-cumulative distribution.
///
/// Subtracts probabilities from `draw`, starting at the worst rank, and
/// returns the index that first drives the remainder to zero or below.
/// `None` means the distribution holds less mass than `draw`.
pub fn roulette_index(distribution: &[f64], draw: f64) -> Option<usize> {
    let mut remaining = draw;
    for i in (0..distribution.len()).rev() {
        remaining -= distribution[i];
        if remaining <= 0.0 {
            return Some(i);
        }
    }
    None
}

/// Roulette wheel with a fresh uniform draw.
pub fn roulette_wheel<R: Rng>(distribution: &[f64], rng: &mut R) -> Result<usize> {
    let draw = rng.gen::<f64>();
    roulette_index(distribution, draw).ok_or_else(|| {
        CoreError::MalformedDistribution(format!(
            "mass {:.6} does not cover draw {:.6}",
            distribution.iter().sum::<f64>(),
            draw
        ))
    })
}

/// Stochastic universal sampling over an additive distribution.
///
/// Pointers start at `offset` (in `[0, 1/amount)`) and advance in steps of
/// `1/amount`. Each pointer selects the first index, scanning from the worst
/// rank towards the best, whose cumulative mass reaches it.
pub fn universal_sampling_indices(
    cumulative: &[f64],
    amount: usize,
    offset: f64,
) -> Result<Vec<usize>> {
    if amount == 0 {
        return Ok(Vec::new());
    }
    if cumulative.is_empty() {
        return Err(CoreError::MalformedDistribution(
            "cannot sample from an empty distribution".to_string(),
        ));
    }

    let step = 1.0 / amount as f64;
    let mut selected = Vec::with_capacity(amount);
    let mut index = cumulative.len() - 1;

    for n in 0..amount {
        let pointer = offset + n as f64 * step;
        while cumulative[index] < pointer {
            if index == 0 {
                break;
            }
            index -= 1;
        }

        if cumulative[index] < pointer {
            if pointer - cumulative[index] > MASS_TOLERANCE {
                return Err(CoreError::MalformedDistribution(format!(
                    "total mass {:.6} is below pointer {:.6}",
                    cumulative[index], pointer
                )));
            }
            log::warn!(
                "Universal sampling pointer {:.12} exceeds mass {:.12}, clamping to best rank",
                pointer,
                cumulative[index]
            );
        }
        selected.push(index);
    }

    Ok(selected)
}

/// Stochastic universal sampling with a random start offset.
pub fn universal_sampling<R: Rng>(
    cumulative: &[f64],
    amount: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    if amount == 0 {
        return Ok(Vec::new());
    }
    let offset = rng.gen::<f64>() / amount as f64;
    universal_sampling_indices(cumulative, amount, offset)
}

/// Linear-rank selection over a ranked population.
#[derive(Debug, Clone, Copy)]
pub struct SelectionEngine {
    selection_pressure: f64,
}

impl SelectionEngine {
    pub fn new(config: &SelectionConfig) -> Result<Self> {
        config.validate_pressure()?;
        Ok(Self {
            selection_pressure: config.selection_pressure,
        })
    }

    pub fn selection_pressure(&self) -> f64 {
        self.selection_pressure
    }

    pub fn distribution(&self, steps: usize, additive: bool) -> Result<Vec<f64>> {
        linear_rank_distribution(steps, self.selection_pressure, additive)
    }

    /// Draw `amount` population indices, repetition allowed.
    ///
    /// Genotypes must carry a rank; ties keep population order.
    pub fn select<R: Rng>(
        &self,
        population: &[Genotype],
        amount: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        let order = rank_order(population)?;
        let cumulative = self.distribution(order.len(), true)?;
        let positions = universal_sampling(&cumulative, amount, rng)?;
        Ok(positions.into_iter().map(|p| order[p]).collect())
    }

    /// Draw a single population index with the roulette wheel.
    pub fn select_one<R: Rng>(&self, population: &[Genotype], rng: &mut R) -> Result<usize> {
        let order = rank_order(population)?;
        let distribution = self.distribution(order.len(), false)?;
        Ok(order[roulette_wheel(&distribution, rng)?])
    }
}

/// Population indices sorted best rank first.
fn rank_order(population: &[Genotype]) -> Result<Vec<usize>> {
    let mut ranked = population
        .iter()
        .enumerate()
        .map(|(i, genotype)| {
            genotype.rank.map(|rank| (rank, i)).ok_or_else(|| {
                CoreError::InvalidArgument(format!("genotype {} has no rank", genotype.id()))
            })
        })
        .collect::<Result<Vec<_>>>()?;
    ranked.sort_by_key(|&(rank, _)| rank);
    Ok(ranked.into_iter().map(|(_, i)| i).collect())
}
