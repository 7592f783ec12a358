//! Environment overrides mutate process state, so they live in their own
//! test binary.

use moea_core::config::ConfigManager;

#[test]
fn test_environment_overrides_file_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("core.toml");
    std::fs::write(
        &path,
        "[selection]\nselection_pressure = 1.5\n\n[difference]\nexcess_weight = 2.0\n",
    )
    .unwrap();

    std::env::set_var("MOEA_SELECTION__SELECTION_PRESSURE", "1.8");
    let manager = ConfigManager::new();
    let result = manager.load_from_file(&path);
    std::env::remove_var("MOEA_SELECTION__SELECTION_PRESSURE");

    result.unwrap();
    let config = manager.get();
    assert_eq!(config.selection.selection_pressure, 1.8);
    assert_eq!(config.difference.excess_weight, 2.0);
}
