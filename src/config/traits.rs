use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), CoreError>;
    fn to_manifest(&self) -> ConfigManifest;
}

/// Configuration manifest describing the tunable fields of a section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigManifest {
    pub section: String,
    pub fields: Vec<FieldManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldManifest {
    pub name: String,
    pub field_type: String,
    pub default: serde_json::Value,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub description: String,
}

impl FieldManifest {
    pub fn number(name: &str, default: f64, min: Option<f64>, max: Option<f64>, description: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: "float".to_string(),
            default: serde_json::json!(default),
            min,
            max,
            description: description.to_string(),
        }
    }

    pub fn integer(name: &str, default: i64, min: Option<f64>, max: Option<f64>, description: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: "integer".to_string(),
            default: serde_json::json!(default),
            min,
            max,
            description: description.to_string(),
        }
    }

    pub fn choice(name: &str, default: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: "enum".to_string(),
            default: serde_json::json!(default),
            min: None,
            max: None,
            description: description.to_string(),
        }
    }
}
