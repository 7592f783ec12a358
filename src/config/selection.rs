use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub selection_pressure: f64,
    pub min_pressure: f64,
    pub max_pressure: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            selection_pressure: 1.5,
            min_pressure: 1.0,
            max_pressure: 2.0,
        }
    }
}

impl SelectionConfig {
    /// Check the pressure against its configured bounds
    pub fn validate_pressure(&self) -> Result<(), CoreError> {
        if self.min_pressure < 1.0 || self.max_pressure > 2.0 || self.min_pressure > self.max_pressure {
            return Err(CoreError::Configuration(format!(
                "Pressure bounds [{}, {}] must lie within [1, 2]",
                self.min_pressure, self.max_pressure
            )));
        }
        if !(self.min_pressure..=self.max_pressure).contains(&self.selection_pressure) {
            return Err(CoreError::Configuration(format!(
                "Selection pressure {} outside [{}, {}]",
                self.selection_pressure, self.min_pressure, self.max_pressure
            )));
        }
        Ok(())
    }
}

impl ConfigSection for SelectionConfig {
    fn section_name() -> &'static str {
        "selection"
    }

    fn validate(&self) -> Result<(), CoreError> {
        self.validate_pressure()
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Selection".to_string(),
            fields: vec![
                FieldManifest::number("selection_pressure", 1.5, Some(self.min_pressure), Some(self.max_pressure), "Linear ranking pressure"),
                FieldManifest::number("min_pressure", 1.0, Some(1.0), Some(2.0), "Lower pressure bound"),
                FieldManifest::number("max_pressure", 2.0, Some(1.0), Some(2.0), "Upper pressure bound"),
            ],
        }
    }
}
