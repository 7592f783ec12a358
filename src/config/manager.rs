use super::{
    difference::DifferenceConfig,
    diversity::DiversityConfig,
    sampling::SamplingConfig,
    selection::SelectionConfig,
    traits::{ConfigManifest, ConfigSection},
    weights::WeightConfig,
};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Environment variables with this prefix override file values,
/// e.g. `MOEA_SELECTION__SELECTION_PRESSURE=1.8`.
const ENV_PREFIX: &str = "MOEA";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub difference: DifferenceConfig,
    pub diversity: DiversityConfig,
    pub selection: SelectionConfig,
    pub sampling: SamplingConfig,
    pub weights: WeightConfig,
}

impl CoreConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        self.difference.validate()?;
        self.diversity.validate()?;
        self.selection.validate()?;
        self.sampling.validate()?;
        self.weights.validate()?;
        Ok(())
    }

    pub fn manifests(&self) -> Vec<ConfigManifest> {
        vec![
            self.difference.to_manifest(),
            self.diversity.to_manifest(),
            self.selection.to_manifest(),
            self.sampling.to_manifest(),
            self.weights.to_manifest(),
        ]
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<CoreConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(CoreConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CoreError> {
        let path = path.as_ref();
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: CoreConfig = settings.try_deserialize()?;
        config.validate()?;

        log::debug!("Loaded configuration from {}", path.display());
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CoreError> {
        let toml_str = toml::to_string_pretty(&self.get())?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> CoreConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply `f` to a copy of the configuration; the copy replaces the
    /// current one only if it validates.
    pub fn update<F>(&self, f: F) -> Result<(), CoreError>
    where
        F: FnOnce(&mut CoreConfig),
    {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut updated = config.clone();
        f(&mut updated);
        updated.validate()?;
        *config = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SamplingStrategyKind;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CoreConfig::default().validate().is_ok());
        assert_eq!(CoreConfig::default().manifests().len(), 5);
    }

    #[test]
    fn test_update_rejects_invalid_pressure() {
        let manager = ConfigManager::new();
        let result = manager.update(|config| config.selection.selection_pressure = 2.5);
        assert!(result.is_err());
        assert_eq!(manager.get().selection.selection_pressure, 1.5);

        manager
            .update(|config| config.sampling = SamplingConfig::standard_error(2, 8))
            .unwrap();
        assert!(matches!(
            manager.get().sampling.strategy,
            SamplingStrategyKind::StandardError { min_samples: 2, max_samples: 8, .. }
        ));
    }
}
