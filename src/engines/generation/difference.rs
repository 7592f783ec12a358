use crate::config::DifferenceConfig;
use crate::engines::generation::genome::align;
use crate::error::{CoreError, Result};
use crate::types::{Encoding, Genotype};

/// Pairwise difference between two genotypes.
pub trait DifferenceMetric: Send + Sync {
    fn difference(&self, a: &Genotype, b: &Genotype) -> Result<f64>;
}

/// Structural distance between graph genomes built from their alignment.
///
/// `(c1 * excess + c2 * disjoint) / longest` is averaged with the mean
/// weight delta over common genes, which is capped at `c1`.
#[derive(Debug, Clone, Copy)]
pub struct GeneticDistance {
    excess_weight: f64,
    disjoint_weight: f64,
    weight_delta_weight: f64,
}

impl GeneticDistance {
    pub fn new(excess_weight: f64, disjoint_weight: f64, weight_delta_weight: f64) -> Self {
        Self {
            excess_weight,
            disjoint_weight,
            weight_delta_weight,
        }
    }

    pub fn from_config(config: &DifferenceConfig) -> Self {
        Self::new(
            config.excess_weight,
            config.disjoint_weight,
            config.weight_delta_weight,
        )
    }
}

impl DifferenceMetric for GeneticDistance {
    fn difference(&self, a: &Genotype, b: &Genotype) -> Result<f64> {
        let (Some(left), Some(right)) = (a.links(), b.links()) else {
            return Err(CoreError::EncodingMismatch(format!(
                "genetic distance needs graph genomes, got {} and {}",
                a.encoding().kind(),
                b.encoding().kind()
            )));
        };

        let alignment = align(left, right);

        let structural = if alignment.longest_genome == 0 {
            0.0
        } else {
            (self.excess_weight * alignment.num_excess as f64
                + self.disjoint_weight * alignment.num_disjoint as f64)
                / alignment.longest_genome as f64
        };

        // The weight term never exceeds the excess coefficient.
        let weights = if alignment.num_common == 0 {
            0.0
        } else {
            (self.weight_delta_weight * alignment.weight_difference
                / alignment.num_common as f64)
                .min(self.excess_weight)
        };

        Ok((structural + weights) / 2.0)
    }
}

/// Euclidean distance between parameter vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterDistance;

impl DifferenceMetric for ParameterDistance {
    fn difference(&self, a: &Genotype, b: &Genotype) -> Result<f64> {
        match (a.encoding(), b.encoding()) {
            (Encoding::Parametric(left), Encoding::Parametric(right)) => euclidean(left, right),
            (left, right) => Err(CoreError::EncodingMismatch(format!(
                "parameter distance needs parametric genomes, got {} and {}",
                left.kind(),
                right.kind()
            ))),
        }
    }
}

/// Euclidean distance between fitness vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectiveDistance;

impl DifferenceMetric for ObjectiveDistance {
    fn difference(&self, a: &Genotype, b: &Genotype) -> Result<f64> {
        euclidean(a.require_fitness()?, b.require_fitness()?)
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(CoreError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Link;

    fn graph(id: u64, pairs: &[(u64, f64)]) -> Genotype {
        let links = pairs.iter().map(|&(i, w)| Link::new(i, w)).collect();
        Genotype::graph(id, links).unwrap()
    }

    #[test]
    fn test_genetic_distance_formula() {
        let a = graph(0, &[(1, 0.5), (2, 0.3), (4, 0.1)]);
        let b = graph(1, &[(1, 0.4), (2, 0.3), (3, 0.9)]);
        let metric = GeneticDistance::new(1.0, 1.0, 0.4);

        // structural = (1 + 1) / 3, weights = 0.4 * 0.1 / 2
        let expected = (2.0 / 3.0 + 0.02) / 2.0;
        assert!((metric.difference(&a, &b).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_weight_term_capped_by_excess_weight() {
        let a = graph(0, &[(1, 10.0)]);
        let b = graph(1, &[(1, -10.0)]);
        let metric = GeneticDistance::new(0.5, 1.0, 1.0);
        // Only common genes: structural 0, weights min(20, 0.5)
        assert!((metric.difference(&a, &b).unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_no_common_genes() {
        let a = graph(0, &[(1, 1.0)]);
        let b = graph(1, &[(2, 1.0), (3, 1.0)]);
        let metric = GeneticDistance::new(1.0, 1.0, 1.0);
        // disjoint 1, excess 2 over longest 2
        assert!((metric.difference(&a, &b).unwrap() - 0.75).abs() < 1e-12);

        let empty = graph(2, &[]);
        assert_eq!(metric.difference(&empty, &empty).unwrap(), 0.0);
    }

    #[test]
    fn test_encoding_mismatch() {
        let a = graph(0, &[(1, 1.0)]);
        let b = Genotype::parametric(1, vec![1.0]);
        assert!(GeneticDistance::new(1.0, 1.0, 1.0).difference(&a, &b).is_err());
        assert!(ParameterDistance.difference(&a, &b).is_err());
    }

    #[test]
    fn test_parameter_and_objective_distance() {
        let a = Genotype::parametric(0, vec![0.0, 0.0]).with_fitness(vec![1.0]);
        let b = Genotype::parametric(1, vec![3.0, 4.0]).with_fitness(vec![3.0]);
        assert_eq!(ParameterDistance.difference(&a, &b).unwrap(), 5.0);
        assert_eq!(ObjectiveDistance.difference(&a, &b).unwrap(), 2.0);
    }
}
