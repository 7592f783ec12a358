use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Innovation identifier naming a structural feature of a graph genome.
pub type InnovationId = u64;

/// A single connection gene of a graph genome.
///
/// Links are immutable once created; mutation operators build new links
/// instead of editing existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    innovation: InnovationId,
    weight: f64,
}

impl Link {
    pub fn new(innovation: InnovationId, weight: f64) -> Self {
        Self { innovation, weight }
    }

    pub fn innovation(&self) -> InnovationId {
        self.innovation
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Genotype payload: either a graph of link genes or a fixed-length
/// parameter vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Encoding {
    Graph(Vec<Link>),
    Parametric(Vec<f64>),
}

impl Encoding {
    pub fn kind(&self) -> &'static str {
        match self {
            Encoding::Graph(_) => "graph",
            Encoding::Parametric(_) => "parametric",
        }
    }
}

/// An evolvable candidate solution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genotype {
    id: u64,
    encoding: Encoding,
    fitness: Option<Vec<f64>>,
    pub rank: Option<usize>,      // Pareto front index (0 = best)
    pub quality: f64,             // Derived scalar quality value
    pub age: u32,
    pub generation: u32,
    pub attributes: HashMap<String, f64>,
}

impl Genotype {
    /// Create a graph genome. Links must already be in non-decreasing
    /// innovation order.
    pub fn graph(id: u64, links: Vec<Link>) -> Result<Self> {
        if links
            .windows(2)
            .any(|pair| pair[0].innovation > pair[1].innovation)
        {
            return Err(CoreError::UnsortedLinks { id });
        }
        Ok(Self::with_encoding(id, Encoding::Graph(links)))
    }

    pub fn parametric(id: u64, values: Vec<f64>) -> Self {
        Self::with_encoding(id, Encoding::Parametric(values))
    }

    fn with_encoding(id: u64, encoding: Encoding) -> Self {
        Self {
            id,
            encoding,
            fitness: None,
            rank: None,
            quality: 0.0,
            age: 0,
            generation: 0,
            attributes: HashMap::new(),
        }
    }

    /// Builder-style helper used when fitness is known up front.
    pub fn with_fitness(mut self, fitness: Vec<f64>) -> Self {
        self.fitness = Some(fitness);
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    /// Links of a graph genome, `None` for parametric genomes.
    pub fn links(&self) -> Option<&[Link]> {
        match &self.encoding {
            Encoding::Graph(links) => Some(links),
            Encoding::Parametric(_) => None,
        }
    }

    pub fn fitness(&self) -> Option<&[f64]> {
        self.fitness.as_deref()
    }

    /// Fitness vector, or a `MissingFitness` error when evaluation has not
    /// completed yet.
    pub fn require_fitness(&self) -> Result<&[f64]> {
        self.fitness().ok_or(CoreError::MissingFitness(self.id))
    }

    pub fn set_fitness(&mut self, fitness: Vec<f64>) {
        self.fitness = Some(fitness);
    }

    pub fn clear_fitness(&mut self) {
        self.fitness = None;
    }
}

/// Verify that every genotype carries a fitness vector of the same length
/// and return that length. An empty population has dimension 0.
pub fn fitness_dimension(population: &[Genotype]) -> Result<usize> {
    let mut dimension = None;
    for genotype in population {
        let fitness = genotype.require_fitness()?;
        match dimension {
            None => dimension = Some(fitness.len()),
            Some(expected) if expected != fitness.len() => {
                return Err(CoreError::DimensionMismatch {
                    expected,
                    actual: fitness.len(),
                });
            }
            Some(_) => {}
        }
    }
    Ok(dimension.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_rejects_unsorted_links() {
        let links = vec![Link::new(2, 0.1), Link::new(1, 0.2)];
        assert!(matches!(
            Genotype::graph(7, links),
            Err(CoreError::UnsortedLinks { id: 7 })
        ));
    }

    #[test]
    fn test_graph_accepts_repeated_innovation() {
        let links = vec![Link::new(1, 0.1), Link::new(1, 0.2), Link::new(3, 0.0)];
        assert!(Genotype::graph(1, links).is_ok());
    }

    #[test]
    fn test_fitness_dimension() {
        let population = vec![
            Genotype::parametric(0, vec![0.0]).with_fitness(vec![1.0, 2.0]),
            Genotype::parametric(1, vec![0.0]).with_fitness(vec![3.0, 4.0]),
        ];
        assert_eq!(fitness_dimension(&population).unwrap(), 2);
        assert_eq!(fitness_dimension(&[]).unwrap(), 0);

        let mixed = vec![
            Genotype::parametric(0, vec![0.0]).with_fitness(vec![1.0, 2.0]),
            Genotype::parametric(1, vec![0.0]).with_fitness(vec![3.0]),
        ];
        assert!(matches!(
            fitness_dimension(&mixed),
            Err(CoreError::DimensionMismatch { expected: 2, actual: 1 })
        ));

        let unevaluated = vec![Genotype::parametric(5, vec![0.0])];
        assert!(matches!(
            fitness_dimension(&unevaluated),
            Err(CoreError::MissingFitness(5))
        ));
    }
}
