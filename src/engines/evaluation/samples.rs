use crate::error::{CoreError, Result};
use std::collections::HashMap;

/// Identifier of an evaluation reference (opponent, scenario, seed...).
pub type ReferenceId = u64;

/// Running per-objective statistics (Welford accumulators).
#[derive(Debug, Clone, Default)]
struct RunningStats {
    count: usize,
    mean: Vec<f64>,
    m2: Vec<f64>,
    max: Vec<f64>,
}

impl RunningStats {
    fn push(&mut self, sample: &[f64]) {
        if self.count == 0 {
            self.mean = vec![0.0; sample.len()];
            self.m2 = vec![0.0; sample.len()];
            self.max = vec![f64::NEG_INFINITY; sample.len()];
        }
        self.count += 1;
        let n = self.count as f64;
        for (k, &value) in sample.iter().enumerate() {
            let delta = value - self.mean[k];
            self.mean[k] += delta / n;
            self.m2[k] += delta * (value - self.mean[k]);
            self.max[k] = self.max[k].max(value);
        }
    }
}

#[derive(Debug, Clone, Default)]
struct ReferenceSamples {
    samples: Vec<Vec<f64>>,
    stats: RunningStats,
}

/// Noisy fitness samples of one genotype, grouped by evaluation reference.
///
/// Samples are append-only. Every sample must have the same number of
/// objectives.
#[derive(Debug, Clone, Default)]
pub struct SampleData {
    references: HashMap<ReferenceId, ReferenceSamples>,
    dimension: Option<usize>,
}

impl SampleData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sample(&mut self, reference: ReferenceId, sample: Vec<f64>) -> Result<()> {
        match self.dimension {
            Some(expected) if expected != sample.len() => {
                return Err(CoreError::DimensionMismatch {
                    expected,
                    actual: sample.len(),
                });
            }
            None => self.dimension = Some(sample.len()),
            Some(_) => {}
        }

        let entry = self.references.entry(reference).or_default();
        entry.stats.push(&sample);
        entry.samples.push(sample);
        Ok(())
    }

    /// Number of samples collected for `reference`.
    pub fn size(&self, reference: ReferenceId) -> usize {
        self.references
            .get(&reference)
            .map_or(0, |entry| entry.samples.len())
    }

    /// Total number of samples across all references.
    pub fn total_size(&self) -> usize {
        self.references.values().map(|entry| entry.samples.len()).sum()
    }

    pub fn samples(&self, reference: ReferenceId) -> &[Vec<f64>] {
        self.references
            .get(&reference)
            .map(|entry| entry.samples.as_slice())
            .unwrap_or_default()
    }

    pub fn mean(&self, reference: ReferenceId) -> Option<Vec<f64>> {
        self.stats(reference).map(|stats| stats.mean.clone())
    }

    pub fn max(&self, reference: ReferenceId) -> Option<Vec<f64>> {
        self.stats(reference).map(|stats| stats.max.clone())
    }

    /// Per-objective percentile, `p` in `[0, 100]`, interpolating linearly
    /// between closest ranks.
    pub fn percentile(&self, reference: ReferenceId, p: f64) -> Option<Vec<f64>> {
        let entry = self.references.get(&reference)?;
        let n = entry.samples.len();
        if n == 0 || !(0.0..=100.0).contains(&p) {
            return None;
        }

        let position = p / 100.0 * (n - 1) as f64;
        let lower = position.floor() as usize;
        let upper = position.ceil() as usize;
        let fraction = position - lower as f64;

        let dimension = entry.stats.mean.len();
        let result = (0..dimension)
            .map(|k| {
                let mut column: Vec<f64> = entry.samples.iter().map(|s| s[k]).collect();
                column.sort_by(f64::total_cmp);
                column[lower] + fraction * (column[upper] - column[lower])
            })
            .collect();
        Some(result)
    }

    /// Per-objective standard error of the mean. Undefined below two samples.
    pub fn standard_error(&self, reference: ReferenceId) -> Option<Vec<f64>> {
        let stats = self.stats(reference)?;
        if stats.count < 2 {
            return None;
        }
        let n = stats.count as f64;
        Some(
            stats
                .m2
                .iter()
                .map(|m2| (m2 / (n - 1.0)).sqrt() / n.sqrt())
                .collect(),
        )
    }

    fn stats(&self, reference: ReferenceId) -> Option<&RunningStats> {
        self.references
            .get(&reference)
            .map(|entry| &entry.stats)
            .filter(|stats| stats.count > 0)
    }
}
