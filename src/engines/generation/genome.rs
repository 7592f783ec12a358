//! Structural alignment of graph genomes
//!
//! Two genomes are compared gene by gene using innovation identifiers. Both
//! link sequences must be in non-decreasing innovation order (enforced by
//! `Genotype::graph`), which lets a single merge-style walk classify every
//! gene in O(m + n):
//! - **common**: the innovation appears in both genomes
//! - **disjoint**: the innovation appears in one genome only, inside the
//!   range still covered by the other genome
//! - **excess**: trailing innovations past the end of the other genome

use crate::types::Link;

/// Result of aligning two graph genomes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Alignment {
    pub num_common: usize,
    pub num_disjoint: usize,
    pub num_excess: usize,
    /// Sum of |weight_a - weight_b| over common genes
    pub weight_difference: f64,
    pub longest_genome: usize,
}

/// Align two innovation-ordered link sequences.
pub fn align(a: &[Link], b: &[Link]) -> Alignment {
    let mut alignment = Alignment {
        longest_genome: a.len().max(b.len()),
        ..Alignment::default()
    };

    // Cursors advance independently; each one is ahead of the common count
    // by the number of disjoint genes seen on its side.
    let mut i = 0;
    let mut j = 0;
    while i < a.len() && j < b.len() {
        let (left, right) = (&a[i], &b[j]);
        if left.innovation() == right.innovation() {
            alignment.weight_difference += (left.weight() - right.weight()).abs();
            alignment.num_common += 1;
            i += 1;
            j += 1;
        } else {
            alignment.num_disjoint += 1;
            if left.innovation() < right.innovation() {
                i += 1;
            } else {
                j += 1;
            }
        }
    }

    alignment.num_excess = (a.len() - i) + (b.len() - j);
    alignment
}
