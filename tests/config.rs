use moea_core::config::{ConfigManager, CoreConfig, DiversitySpace, SamplingConfig, SamplingStrategyKind};
use std::io::Write;

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("core.toml");

    let manager = ConfigManager::new();
    manager
        .update(|config| {
            config.selection.selection_pressure = 1.8;
            config.diversity.space = DiversitySpace::Objective;
            config.sampling = SamplingConfig::standard_error(3, 12);
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let loaded = ConfigManager::new();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.get(), manager.get());
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[difference]\nexcess_weight = 2.0\n\n[sampling.strategy]\nkind = \"fixed\"\nsamples = 4").unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();
    let config = manager.get();
    assert_eq!(config.difference.excess_weight, 2.0);
    assert_eq!(config.difference.disjoint_weight, 1.0);
    assert_eq!(config.sampling.strategy, SamplingStrategyKind::Fixed { samples: 4 });
    assert_eq!(config.selection, CoreConfig::default().selection);
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invalid.toml");
    std::fs::write(&path, "[selection]\nselection_pressure = 3.0\n").unwrap();

    let manager = ConfigManager::new();
    assert!(manager.load_from_file(&path).is_err());
    assert_eq!(manager.get(), CoreConfig::default());
}
