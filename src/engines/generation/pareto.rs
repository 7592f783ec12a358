//! Pareto dominance for minimized fitness vectors
//! Implements the dominance verdict plus NSGA-II style fast non-dominated
//! sorting and crowding distance on top of it

use crate::error::{CoreError, Result};
use crate::types::{fitness_dimension, Genotype};
use rayon::prelude::*;

/// Outcome of comparing two fitness vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    First,   // first vector dominates
    Second,  // second vector dominates
    Neither, // mutually non-dominated (or equal)
}

impl Dominance {
    /// Classic comparator encoding: -1, +1 or 0
    pub fn as_i8(self) -> i8 {
        match self {
            Dominance::First => -1,
            Dominance::Second => 1,
            Dominance::Neither => 0,
        }
    }
}

/// Compare two fitness vectors (lower is better)
/// A dominates B if A is no worse than B in all objectives and strictly better in at least one
pub fn compare(a: &[f64], b: &[f64]) -> Result<Dominance> {
    if a.len() != b.len() {
        return Err(CoreError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let mut a_better = false;
    let mut b_better = false;

    for (a_val, b_val) in a.iter().zip(b) {
        if a_val < b_val {
            a_better = true;
        } else if b_val < a_val {
            b_better = true;
        }

        if a_better && b_better {
            return Ok(Dominance::Neither);
        }
    }

    Ok(match (a_better, b_better) {
        (true, false) => Dominance::First,
        (false, true) => Dominance::Second,
        _ => Dominance::Neither,
    })
}

/// Compare two genotypes by their fitness; unset fitness is an error
pub fn compare_genotypes(a: &Genotype, b: &Genotype) -> Result<Dominance> {
    compare(a.require_fitness()?, b.require_fitness()?)
}

/// True if `a` dominates `b`
pub fn dominates(a: &[f64], b: &[f64]) -> Result<bool> {
    Ok(compare(a, b)? == Dominance::First)
}

/// Fast non-dominated sorting (NSGA-II algorithm)
/// Writes each genotype's front index into `rank` and returns the fronts
/// as index lists (0 = best, 1 = second best, etc.)
pub fn assign_ranks(population: &mut [Genotype]) -> Result<Vec<Vec<usize>>> {
    fitness_dimension(population)?;
    let n = population.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    // For each individual, track:
    // - domination_count: how many individuals dominate it
    // - dominated_solutions: indices of individuals it dominates
    let comparisons: Vec<(usize, Vec<usize>)> = {
        let shared: &[Genotype] = population;
        (0..n)
            .into_par_iter()
            .map(|i| -> Result<(usize, Vec<usize>)> {
                let mut count = 0;
                let mut dominated = Vec::new();
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    match compare_genotypes(&shared[i], &shared[j])? {
                        Dominance::First => dominated.push(j),
                        Dominance::Second => count += 1,
                        Dominance::Neither => {}
                    }
                }
                Ok((count, dominated))
            })
            .collect::<Result<_>>()?
    };

    let (mut domination_count, dominated_solutions): (Vec<usize>, Vec<Vec<usize>>) =
        comparisons.into_iter().unzip();

    let first_front: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();
    let mut fronts = vec![first_front];

    // Generate subsequent fronts
    let mut front_index = 0;
    while front_index < fronts.len() {
        let mut next_front = Vec::new();

        for &i in &fronts[front_index] {
            population[i].rank = Some(front_index);
            for &j in &dominated_solutions[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next_front.push(j);
                }
            }
        }

        if !next_front.is_empty() {
            fronts.push(next_front);
        }
        front_index += 1;
    }

    log::debug!("Ranked {} genotypes into {} fronts", n, fronts.len());
    Ok(fronts)
}

/// Crowding distance for the members of one front, in front order
/// Higher values indicate more isolated individuals
pub fn crowding_distances(population: &[Genotype], front: &[usize]) -> Result<Vec<f64>> {
    let objectives = front
        .iter()
        .map(|&idx| {
            population
                .get(idx)
                .ok_or_else(|| {
                    CoreError::InvalidArgument(format!(
                        "front index {} is outside a population of {}",
                        idx,
                        population.len()
                    ))
                })?
                .require_fitness()
        })
        .collect::<Result<Vec<_>>>()?;

    let num_objectives = objectives.first().map_or(0, |fitness| fitness.len());
    if let Some(fitness) = objectives.iter().find(|f| f.len() != num_objectives) {
        return Err(CoreError::DimensionMismatch {
            expected: num_objectives,
            actual: fitness.len(),
        });
    }

    let front_size = front.len();
    if front_size <= 2 {
        // Boundary solutions have infinite crowding distance
        return Ok(vec![f64::INFINITY; front_size]);
    }
    let mut distances = vec![0.0; front_size];

    for obj in 0..num_objectives {
        // Sort front positions by this objective
        let mut sorted: Vec<usize> = (0..front_size).collect();
        sorted.sort_by(|&a, &b| objectives[a][obj].total_cmp(&objectives[b][obj]));

        let first = sorted[0];
        let last = sorted[front_size - 1];
        distances[first] = f64::INFINITY;
        distances[last] = f64::INFINITY;

        let range = objectives[last][obj] - objectives[first][obj];
        if range.abs() < 1e-10 {
            // All values are the same for this objective
            continue;
        }

        for window in sorted.windows(3) {
            let (prev, idx, next) = (window[0], window[1], window[2]);
            distances[idx] += (objectives[next][obj] - objectives[prev][obj]) / range;
        }
    }

    Ok(distances)
}
