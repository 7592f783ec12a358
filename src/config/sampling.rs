use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SamplingStrategyKind {
    /// One sample per reference
    NoNoise,
    /// A fixed number of samples per reference
    Fixed { samples: usize },
    /// Standard error dynamic resampling
    StandardError {
        min_samples: usize,
        max_samples: usize,
        alpha: f64,
        seth_min: f64,
        seth_max: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub strategy: SamplingStrategyKind,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            strategy: SamplingStrategyKind::NoNoise,
        }
    }
}

impl SamplingConfig {
    /// Standard error resampling with the usual constants
    pub fn standard_error(min_samples: usize, max_samples: usize) -> Self {
        Self {
            strategy: SamplingStrategyKind::StandardError {
                min_samples,
                max_samples,
                alpha: 2.0,
                seth_min: 0.0,
                seth_max: 1.0 / 30.0,
            },
        }
    }
}

impl ConfigSection for SamplingConfig {
    fn section_name() -> &'static str {
        "sampling"
    }

    fn validate(&self) -> Result<(), CoreError> {
        match self.strategy {
            SamplingStrategyKind::NoNoise => Ok(()),
            SamplingStrategyKind::Fixed { samples } => {
                if samples == 0 {
                    return Err(CoreError::Configuration(
                        "Fixed sampling needs at least one sample".to_string()
                    ));
                }
                Ok(())
            }
            SamplingStrategyKind::StandardError { min_samples, max_samples, alpha, seth_min, seth_max } => {
                if min_samples == 0 || min_samples > max_samples {
                    return Err(CoreError::Configuration(format!(
                        "Sample bounds must satisfy 1 <= min ({}) <= max ({})",
                        min_samples, max_samples
                    )));
                }
                if !alpha.is_finite() || alpha < 0.0 {
                    return Err(CoreError::Configuration(
                        "Alpha must be a non-negative number".to_string()
                    ));
                }
                if !(seth_min.is_finite() && seth_max.is_finite()) || seth_min < 0.0 || seth_min > seth_max {
                    return Err(CoreError::Configuration(format!(
                        "Standard error thresholds must satisfy 0 <= {} <= {}",
                        seth_min, seth_max
                    )));
                }
                Ok(())
            }
        }
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Sampling".to_string(),
            fields: vec![
                FieldManifest::choice("kind", "no_noise", "no_noise, fixed or standard_error"),
                FieldManifest::integer("samples", 1, Some(1.0), None, "Samples per reference (fixed)"),
                FieldManifest::integer("min_samples", 1, Some(1.0), None, "Samples always taken (standard_error)"),
                FieldManifest::integer("max_samples", 10, Some(1.0), None, "Hard sample limit (standard_error)"),
                FieldManifest::number("alpha", 2.0, Some(0.0), None, "Threshold decay exponent"),
                FieldManifest::number("seth_min", 0.0, Some(0.0), None, "Threshold at the end of the run"),
                FieldManifest::number("seth_max", 1.0 / 30.0, Some(0.0), None, "Threshold at the start of the run"),
            ],
        }
    }
}
