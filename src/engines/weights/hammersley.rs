use super::generator::WeightStrategy;
use super::simplex_point;
use crate::error::Result;

/// Hammersley low-discrepancy weights.
///
/// Design point `i` (1-based) has first coordinate `(2i - 1) / (2 * count)`
/// and radical inverses of `i` in the first `dim - 2` prime bases for the
/// remaining coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hammersley;

impl Hammersley {
    pub fn design(count: usize, dimension: usize) -> Vec<Vec<f64>> {
        let coordinates = dimension.saturating_sub(1);
        let primes = first_primes(coordinates.saturating_sub(1));

        (1..=count)
            .map(|i| {
                let mut point = Vec::with_capacity(coordinates);
                if coordinates > 0 {
                    point.push((2 * i - 1) as f64 / (2 * count) as f64);
                }
                point.extend(primes.iter().map(|&base| radical_inverse(i, base)));
                point
            })
            .collect()
    }
}

impl WeightStrategy for Hammersley {
    fn generate(&self, count: usize, dimension: usize) -> Result<Vec<Vec<f64>>> {
        Ok(Self::design(count, dimension)
            .iter()
            .map(|point| simplex_point(point))
            .collect())
    }
}

/// Van der Corput radical inverse of `index` in `base`.
pub fn radical_inverse(mut index: usize, base: usize) -> f64 {
    let inverse_base = 1.0 / base as f64;
    let mut scale = inverse_base;
    let mut value = 0.0;
    while index > 0 {
        value += (index % base) as f64 * scale;
        index /= base;
        scale *= inverse_base;
    }
    value
}

/// The first `n` primes.
pub fn first_primes(n: usize) -> Vec<usize> {
    let mut primes: Vec<usize> = Vec::with_capacity(n);
    let mut candidate = 2;
    while primes.len() < n {
        if primes
            .iter()
            .take_while(|&&p| p * p <= candidate)
            .all(|&p| candidate % p != 0)
        {
            primes.push(candidate);
        }
        candidate += 1;
    }
    primes
}
