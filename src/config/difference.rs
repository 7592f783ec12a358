use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Coefficients of the genetic distance between graph genomes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifferenceConfig {
    pub excess_weight: f64,
    pub disjoint_weight: f64,
    pub weight_delta_weight: f64,
}

impl Default for DifferenceConfig {
    fn default() -> Self {
        Self {
            excess_weight: 1.0,
            disjoint_weight: 1.0,
            weight_delta_weight: 0.4,
        }
    }
}

impl ConfigSection for DifferenceConfig {
    fn section_name() -> &'static str {
        "difference"
    }

    fn validate(&self) -> Result<(), CoreError> {
        let coefficients = [
            ("excess_weight", self.excess_weight),
            ("disjoint_weight", self.disjoint_weight),
            ("weight_delta_weight", self.weight_delta_weight),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Configuration(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Difference".to_string(),
            fields: vec![
                FieldManifest::number("excess_weight", 1.0, Some(0.0), None, "Weight of excess genes; also caps the weight term"),
                FieldManifest::number("disjoint_weight", 1.0, Some(0.0), None, "Weight of disjoint genes"),
                FieldManifest::number("weight_delta_weight", 0.4, Some(0.0), None, "Weight of the mean weight delta of common genes"),
            ],
        }
    }
}
