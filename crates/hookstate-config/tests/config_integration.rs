use hookstate_config::AppConfig;

#[test]
fn test_load_creates_default_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hookstate.json");
    assert!(!path.exists());

    let config = AppConfig::load_or_create(&path);
    assert!(path.exists());
    assert_eq!(config, AppConfig::default());

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["history"]["capacity"], 10);
}

#[test]
fn test_load_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("hookstate.json");

    AppConfig::load_or_create(&path);
    assert!(path.exists());
}

#[test]
fn test_load_existing_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hookstate.json");
    let json = r#"{
        "history": { "capacity": 3 },
        "log_filter": "debug",
        "show_previous": true
    }"#;
    std::fs::write(&path, json).unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config.history.capacity, 3);
    assert_eq!(config.log_filter, "debug");
    assert!(config.show_previous);
}

#[test]
fn test_broken_json_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hookstate.json");
    std::fs::write(&path, "{ this is not valid json }}}").unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config, AppConfig::default());

    // Broken file is not overwritten
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "{ this is not valid json }}}");
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hookstate.json");
    std::fs::write(&path, r#"{"show_previous": true}"#).unwrap();

    let config = AppConfig::load_or_create(&path);
    assert!(config.show_previous);
    assert_eq!(config.history.capacity, 10);
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn test_zero_capacity_sanitized_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hookstate.json");
    std::fs::write(&path, r#"{"history": {"capacity": 0}}"#).unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config.history.capacity, 1);
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hookstate.json");

    let mut config = AppConfig::default();
    config.history.capacity = 25;
    config.log_filter = "hookstate=trace".to_string();
    config.save(&path).unwrap();

    assert_eq!(AppConfig::load_or_create(&path), config);
}
