use expense_report::config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("absent.json"));
    let config = manager.load().expect("load defaults");
    assert_eq!(config, Config::default());
    assert_eq!(config.currency_suffix, "eur");
    assert!(!config.log_to_screen);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    assert!(manager.path().ends_with("config/config.json"));

    let config = Config {
        currency_suffix: "chf".into(),
        log_to_screen: true,
        log_directive: "expense_report=debug".into(),
    };
    manager.save(&config).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, config);
    assert!(!manager.path().with_extension("json.tmp").exists());
}

#[test]
fn default_location_is_a_json_file() {
    let manager = ConfigManager::default_location();
    assert_eq!(
        manager.path().file_name().and_then(|name| name.to_str()),
        Some("config.json")
    );
}
