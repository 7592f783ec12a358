use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeightStrategyKind {
    Hammersley,
    LatinHypercube { seed: Option<u64> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    pub strategy: WeightStrategyKind,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            strategy: WeightStrategyKind::Hammersley,
        }
    }
}

impl ConfigSection for WeightConfig {
    fn section_name() -> &'static str {
        "weights"
    }

    fn validate(&self) -> Result<(), CoreError> {
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Weights".to_string(),
            fields: vec![
                FieldManifest::choice("kind", "hammersley", "hammersley or latin_hypercube"),
                FieldManifest::integer("seed", 0, Some(0.0), None, "Seed of the latin hypercube design"),
            ],
        }
    }
}
