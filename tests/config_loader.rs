use pawbook::config::{Config, ConfigError, ConfigStore};
use tempfile::tempdir;

#[test]
fn defaults_are_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.snackbar_ticks, 12);
    assert!(config
        .storage
        .resolved_data_file()
        .ends_with("pawbook/pets.json"));
}

#[test]
fn load_from_parses_partial_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[storage]\ndata_file = \"/tmp/pets.json\"\n\n[ui]\ntick_rate_ms = 100\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.storage.resolved_data_file(),
        std::path::PathBuf::from("/tmp/pets.json")
    );
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.ui.snackbar_ticks, 12, "unset field keeps default");
}

#[test]
fn load_from_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let result = Config::load_from(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui\ntick_rate_ms = ").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn zero_tick_rate_fails_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn store_reload_keeps_old_config_on_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_rate_ms = 100\n").unwrap();

    let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone());
    std::fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();

    assert!(store.reload().is_err());
    assert_eq!(store.get().ui.tick_rate_ms, 100);
}

#[test]
fn store_reload_applies_new_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_rate_ms = 100\n").unwrap();

    let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone());
    std::fs::write(&path, "[ui]\ntick_rate_ms = 200\n").unwrap();

    store.reload().unwrap();
    assert_eq!(store.get().ui.tick_rate_ms, 200);
}
