use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiversitySpace {
    Decision,  // Genome weights grouped by innovation
    Objective, // Fitness vector components
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiversityConfig {
    pub id: u32,
    pub space: DiversitySpace,
    pub neutral_element: f64,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        Self {
            id: 0,
            space: DiversitySpace::Decision,
            neutral_element: 0.0,
        }
    }
}

impl ConfigSection for DiversityConfig {
    fn section_name() -> &'static str {
        "diversity"
    }

    fn validate(&self) -> Result<(), CoreError> {
        if !self.neutral_element.is_finite() {
            return Err(CoreError::Configuration(
                "Neutral element must be finite".to_string()
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Diversity".to_string(),
            fields: vec![
                FieldManifest::integer("id", 0, Some(0.0), None, "Identifier used to deduplicate metrics"),
                FieldManifest::choice("space", "decision", "decision or objective"),
                FieldManifest::number("neutral_element", 0.0, None, None, "Value standing in for missing spread"),
            ],
        }
    }
}
