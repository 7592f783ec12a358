pub mod genome;
pub mod difference;
pub mod diversity;
pub mod pareto;
pub mod selection;

pub use genome::{align, Alignment};
pub use difference::{DifferenceMetric, GeneticDistance, ObjectiveDistance, ParameterDistance};
pub use diversity::{DecisionSpace, DiversityMetric, ObjectiveSpace, Projection};
pub use pareto::{assign_ranks, compare, compare_genotypes, crowding_distances, dominates, Dominance};
pub use selection::{
    equal_distribution, linear_rank_distribution, roulette_index, roulette_wheel,
    universal_sampling, universal_sampling_indices, SelectionEngine,
};
