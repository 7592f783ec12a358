//! Population diversity as a moment of inertia
//!
//! A population is projected into a set of dimensions, each holding a list
//! of observed values. The raw diversity is the summed squared deviation of
//! every value from its dimension's centroid, divided by the number of
//! dimensions. The first non-empty evaluation fixes the baseline; later
//! results are reported relative to it so a run starts at 1.0.

use crate::config::{DiversityConfig, DiversitySpace};
use crate::error::{CoreError, Result};
use crate::types::{fitness_dimension, Encoding, Genotype, InnovationId};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Projects a population into per-dimension value lists.
pub trait Projection: Send + Sync {
    fn project(&self, population: &[Genotype]) -> Result<Vec<Vec<f64>>>;
}

/// Decision-space projection.
///
/// Graph genomes group weights by innovation id; parametric genomes use one
/// dimension per coordinate. Every dimension is min-max normalized. The
/// population must share one encoding kind.
#[derive(Debug, Clone, Copy)]
pub struct DecisionSpace {
    neutral_element: f64,
}

impl DecisionSpace {
    pub fn new(neutral_element: f64) -> Self {
        Self { neutral_element }
    }
}

impl Projection for DecisionSpace {
    fn project(&self, population: &[Genotype]) -> Result<Vec<Vec<f64>>> {
        let kind = population.first().map(|genotype| genotype.encoding().kind());
        let mut groups: BTreeMap<InnovationId, Vec<f64>> = BTreeMap::new();
        for genotype in population {
            if Some(genotype.encoding().kind()) != kind {
                return Err(CoreError::EncodingMismatch(format!(
                    "genotype {} is {}, population is {}",
                    genotype.id(),
                    genotype.encoding().kind(),
                    kind.unwrap_or_default()
                )));
            }
            match genotype.encoding() {
                Encoding::Graph(links) => {
                    for link in links {
                        groups.entry(link.innovation()).or_default().push(link.weight());
                    }
                }
                Encoding::Parametric(values) => {
                    for (index, value) in values.iter().enumerate() {
                        groups.entry(index as InnovationId).or_default().push(*value);
                    }
                }
            }
        }

        let dimensions = groups
            .into_values()
            .map(|mut values| {
                // A singleton innovation still contributes spread.
                if values.len() == 1 {
                    values.push(self.neutral_element);
                }
                normalize(&mut values);
                values
            })
            .collect();
        Ok(dimensions)
    }
}

/// Objective-space projection: one dimension per fitness component.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectiveSpace;

impl Projection for ObjectiveSpace {
    fn project(&self, population: &[Genotype]) -> Result<Vec<Vec<f64>>> {
        let dimension = fitness_dimension(population)?;
        let mut dimensions = vec![Vec::with_capacity(population.len()); dimension];
        for genotype in population {
            for (column, value) in dimensions.iter_mut().zip(genotype.require_fitness()?) {
                column.push(*value);
            }
        }
        Ok(dimensions)
    }
}

/// Min-max normalize in place; constant lists are left untouched.
fn normalize(values: &mut [f64]) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range == 0.0 || !range.is_finite() {
        return;
    }
    for value in values.iter_mut() {
        *value = (*value - min) / range;
    }
}

/// Baseline-normalized moment-of-inertia diversity.
pub struct DiversityMetric {
    id: u32,
    neutral_element: f64,
    projection: Box<dyn Projection>,
    baseline: OnceLock<f64>,
}

impl DiversityMetric {
    pub fn new(id: u32, neutral_element: f64, projection: Box<dyn Projection>) -> Self {
        Self {
            id,
            neutral_element,
            projection,
            baseline: OnceLock::new(),
        }
    }

    pub fn from_config(config: &DiversityConfig) -> Self {
        let projection: Box<dyn Projection> = match config.space {
            DiversitySpace::Decision => Box::new(DecisionSpace::new(config.neutral_element)),
            DiversitySpace::Objective => Box::new(ObjectiveSpace),
        };
        Self::new(config.id, config.neutral_element, projection)
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Baseline captured by the first non-empty evaluation.
    pub fn baseline(&self) -> Option<f64> {
        self.baseline.get().copied()
    }

    /// Diversity of `population` relative to the run's baseline.
    pub fn diversity(&self, population: &[Genotype]) -> Result<f64> {
        if population.is_empty() {
            return Ok(0.0);
        }

        let raw = self.moment_of_inertia(&self.projection.project(population)?);
        let mut captured = false;
        let baseline = *self.baseline.get_or_init(|| {
            captured = true;
            raw
        });

        if captured {
            log::debug!("Diversity metric {} baseline set to {:.6}", self.id, raw);
            return Ok(1.0);
        }
        if baseline == 0.0 {
            log::warn!(
                "Diversity metric {} has a zero baseline, reporting raw value",
                self.id
            );
            return Ok(raw);
        }
        Ok(raw / baseline)
    }

    /// Raw, unnormalized diversity of projected dimensions.
    pub fn moment_of_inertia(&self, dimensions: &[Vec<f64>]) -> f64 {
        if dimensions.is_empty() {
            return 0.0;
        }

        let total: f64 = dimensions
            .par_iter()
            .map(|values| {
                let centroid = match values.len() {
                    0 => return 0.0,
                    1 => self.neutral_element,
                    n => values.iter().sum::<f64>() / n as f64,
                };
                values.iter().map(|v| (v - centroid).powi(2)).sum::<f64>()
            })
            .sum();

        total / dimensions.len() as f64
    }
}

impl PartialEq for DiversityMetric {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DiversityMetric {}

impl std::fmt::Debug for DiversityMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiversityMetric")
            .field("id", &self.id)
            .field("neutral_element", &self.neutral_element)
            .field("baseline", &self.baseline())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Link;

    fn evaluated(id: u64, fitness: Vec<f64>) -> Genotype {
        Genotype::parametric(id, vec![0.0]).with_fitness(fitness)
    }

    #[test]
    fn test_decision_space_groups_by_innovation() {
        let population = vec![
            Genotype::graph(0, vec![Link::new(1, 0.0), Link::new(2, 4.0)]).unwrap(),
            Genotype::graph(1, vec![Link::new(1, 2.0)]).unwrap(),
            Genotype::graph(2, vec![Link::new(1, 1.0), Link::new(3, 5.0), Link::new(3, 5.0)]).unwrap(),
        ];

        let dimensions = DecisionSpace::new(0.0).project(&population).unwrap();
        assert_eq!(dimensions.len(), 3);
        assert_eq!(dimensions[0], vec![0.0, 1.0, 0.5]);
        // Singleton innovation 2 gains the neutral element, then normalizes.
        assert_eq!(dimensions[1], vec![1.0, 0.0]);
        // Constant list is left as is.
        assert_eq!(dimensions[2], vec![5.0, 5.0]);
    }

    #[test]
    fn test_decision_space_rejects_mixed_encodings() {
        let population = vec![
            Genotype::graph(0, vec![Link::new(0, 0.5)]).unwrap(),
            Genotype::parametric(1, vec![0.9]),
        ];
        assert!(matches!(
            DecisionSpace::new(0.0).project(&population),
            Err(CoreError::EncodingMismatch(_))
        ));

        let metric = DiversityMetric::new(2, 0.0, Box::new(DecisionSpace::new(0.0)));
        assert!(metric.diversity(&population).is_err());
        assert_eq!(metric.baseline(), None);
    }

    #[test]
    fn test_objective_space_columns() {
        let population = vec![evaluated(0, vec![1.0, 10.0]), evaluated(1, vec![3.0, 20.0])];
        let dimensions = ObjectiveSpace.project(&population).unwrap();
        assert_eq!(dimensions, vec![vec![1.0, 3.0], vec![10.0, 20.0]]);
    }

    #[test]
    fn test_singleton_centroid_is_neutral_element() {
        let metric = DiversityMetric::new(1, 2.0, Box::new(ObjectiveSpace));
        assert_eq!(metric.moment_of_inertia(&[vec![5.0]]), 9.0);
        assert_eq!(metric.moment_of_inertia(&[vec![1.0, 3.0], vec![]]), 1.0);
    }

    #[test]
    fn test_baseline_normalization() {
        let metric = DiversityMetric::new(3, 0.0, Box::new(ObjectiveSpace));
        assert_eq!(metric.diversity(&[]).unwrap(), 0.0);
        assert_eq!(metric.baseline(), None);

        let first = vec![evaluated(0, vec![0.0]), evaluated(1, vec![2.0])];
        assert_eq!(metric.diversity(&first).unwrap(), 1.0);
        assert_eq!(metric.baseline(), Some(2.0));

        let wider = vec![evaluated(0, vec![0.0]), evaluated(1, vec![4.0])];
        assert_eq!(metric.diversity(&wider).unwrap(), 4.0);
        assert_eq!(metric.diversity(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_equality_by_id() {
        let a = DiversityMetric::new(7, 0.0, Box::new(ObjectiveSpace));
        let b = DiversityMetric::new(7, 1.0, Box::new(DecisionSpace::new(1.0)));
        let c = DiversityMetric::new(8, 0.0, Box::new(ObjectiveSpace));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
