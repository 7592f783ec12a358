pub mod hammersley;
pub mod latin_hypercube;
pub mod generator;

pub use generator::{WeightStrategy, WeightVectorGenerator};
pub use hammersley::Hammersley;
pub use latin_hypercube::{LatinHypercube, LatinHypercubeWeights, SpaceFillingDesign};

/// Map a point of the unit cube `[0, 1]^(dim - 1)` onto the probability
/// simplex of dimension `dim`.
///
/// Component `k` is `(1 - u_k^(1/(dim-1-k))) * prod_{j<k} u_j^(1/(dim-1-j))`;
/// the last component keeps only the product, so the sum telescopes to 1.
pub fn simplex_point(design: &[f64]) -> Vec<f64> {
    let dimension = design.len() + 1;
    let mut weights = Vec::with_capacity(dimension);
    let mut product = 1.0;
    for (k, &u) in design.iter().enumerate() {
        let root = u.powf(1.0 / (dimension - 1 - k) as f64);
        weights.push((1.0 - root) * product);
        product *= root;
    }
    weights.push(product);
    weights
}
