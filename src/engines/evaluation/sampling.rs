//! Adaptive resampling policies for noisy evaluation
//!
//! A strategy answers one question per (genotype, reference) pair: does the
//! estimate need another sample? Strategies are shared between evaluation
//! workers, so the only mutable state (the standard error threshold) lives
//! in an atomic.

use crate::config::{SamplingConfig, SamplingStrategyKind};
use crate::engines::evaluation::samples::{ReferenceId, SampleData};
use crate::engines::evaluation::progress::{ProgressListener, ProgressPublisher};
use crate::error::{CoreError, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub trait SamplingStrategy: Send + Sync {
    fn can_sample(&self, data: &SampleData, reference: ReferenceId) -> bool;
}

/// Deterministic evaluation: a single sample per reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl SamplingStrategy for NoNoise {
    fn can_sample(&self, data: &SampleData, reference: ReferenceId) -> bool {
        data.size(reference) == 0
    }
}

/// A fixed number of samples per reference.
#[derive(Debug, Clone, Copy)]
pub struct FixedSampling {
    samples: usize,
}

impl FixedSampling {
    pub fn new(samples: usize) -> Self {
        Self { samples }
    }
}

impl SamplingStrategy for FixedSampling {
    fn can_sample(&self, data: &SampleData, reference: ReferenceId) -> bool {
        data.size(reference) < self.samples
    }
}

/// Standard error dynamic resampling.
///
/// Between `min_samples` and `max_samples` another sample is taken while the
/// standard error of any objective exceeds
/// `(1 - progress)^alpha * (seth_max - seth_min) + seth_min`.
#[derive(Debug)]
pub struct StandardErrorSampling {
    min_samples: usize,
    max_samples: usize,
    alpha: f64,
    seth_min: f64,
    seth_max: f64,
    max_std_err: AtomicU64, // f64 bits
}

impl StandardErrorSampling {
    pub fn new(
        min_samples: usize,
        max_samples: usize,
        alpha: f64,
        seth_min: f64,
        seth_max: f64,
    ) -> Result<Self> {
        if min_samples == 0 || min_samples > max_samples {
            return Err(CoreError::InvalidArgument(format!(
                "sample bounds must satisfy 1 <= min ({}) <= max ({})",
                min_samples, max_samples
            )));
        }
        let strategy = Self {
            min_samples,
            max_samples,
            alpha,
            seth_min,
            seth_max,
            max_std_err: AtomicU64::new(0),
        };
        strategy.on_progress(0.0);
        Ok(strategy)
    }

    /// Create the strategy and subscribe it to run progress.
    pub fn subscribed(
        min_samples: usize,
        max_samples: usize,
        alpha: f64,
        seth_min: f64,
        seth_max: f64,
        publisher: &mut ProgressPublisher,
    ) -> Result<Arc<Self>> {
        let strategy = Arc::new(Self::new(min_samples, max_samples, alpha, seth_min, seth_max)?);
        strategy.on_progress(publisher.progress());
        publisher.subscribe(strategy.clone());
        Ok(strategy)
    }

    pub fn threshold_at(&self, progress: f64) -> f64 {
        (1.0 - progress).powf(self.alpha) * (self.seth_max - self.seth_min) + self.seth_min
    }

    /// Current standard error threshold.
    pub fn max_std_err(&self) -> f64 {
        f64::from_bits(self.max_std_err.load(Ordering::Acquire))
    }
}

impl ProgressListener for StandardErrorSampling {
    fn on_progress(&self, progress: f64) {
        let threshold = self.threshold_at(progress.clamp(0.0, 1.0));
        self.max_std_err.store(threshold.to_bits(), Ordering::Release);
    }
}

impl SamplingStrategy for StandardErrorSampling {
    fn can_sample(&self, data: &SampleData, reference: ReferenceId) -> bool {
        let size = data.size(reference);
        if size < self.min_samples {
            return true;
        }
        if size >= self.max_samples {
            return false;
        }

        let threshold = self.max_std_err();
        let decision = match data.standard_error(reference) {
            // A single sample says nothing about the noise yet
            None => true,
            Some(errors) => errors.iter().any(|&error| error > threshold),
        };
        log::trace!(
            "Reference {} with {} samples: threshold {:.6}, sample again = {}",
            reference,
            size,
            threshold,
            decision
        );
        decision
    }
}

/// Build the configured strategy, subscribing it to `publisher` when it
/// depends on run progress.
pub fn build_strategy(
    config: &SamplingConfig,
    publisher: &mut ProgressPublisher,
) -> Result<Arc<dyn SamplingStrategy>> {
    let strategy: Arc<dyn SamplingStrategy> = match config.strategy {
        SamplingStrategyKind::NoNoise => Arc::new(NoNoise),
        SamplingStrategyKind::Fixed { samples } => Arc::new(FixedSampling::new(samples)),
        SamplingStrategyKind::StandardError {
            min_samples,
            max_samples,
            alpha,
            seth_min,
            seth_max,
        } => StandardErrorSampling::subscribed(
            min_samples,
            max_samples,
            alpha,
            seth_min,
            seth_max,
            publisher,
        )?,
    };
    Ok(strategy)
}
