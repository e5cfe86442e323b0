//! Integration tests for ruleform-config

use ruleform_config::*;
use std::io::Write;

#[test]
fn test_load_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"locale": "en", "labels": {{"app::Phone": "Phone"}}}}"#).unwrap();

    let mut manager = ConfigManager::new();
    manager.load_file(file.path()).unwrap();

    let locale: String = manager.get("locale").unwrap();
    assert_eq!(locale, "en");
    let labels: std::collections::BTreeMap<String, String> = manager.get("labels").unwrap();
    assert_eq!(labels.get("app::Phone").map(String::as_str), Some("Phone"));
}

#[test]
fn test_later_file_overrides_earlier() {
    let mut first = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(first, "locale = \"ru\"\ndescription_separator = \"\"").unwrap();
    let mut second = tempfile::Builder::new().suffix(".env").tempfile().unwrap();
    writeln!(second, "DESCRIPTION_SEPARATOR=\"; \"").unwrap();

    let mut manager = ConfigManager::new();
    manager.load_file(first.path()).unwrap();
    manager.load_file(second.path()).unwrap();

    assert_eq!(manager.get::<String>("locale").unwrap(), "ru");
    assert_eq!(manager.get::<String>("description_separator").unwrap(), "; ");
}

#[test]
fn test_missing_file_is_io_error() {
    let mut manager = ConfigManager::new();
    let result = manager.load_file("/nonexistent/ruleform.json");
    assert!(matches!(result, Err(ConfigError::IoError(_))));
}

#[test]
fn test_unknown_extension_is_load_error() {
    let mut manager = ConfigManager::new();
    let result = manager.load_file("/tmp/ruleform.yaml");
    assert!(matches!(result, Err(ConfigError::LoadError(_))));
}

#[test]
fn test_prefixed_vars_over_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"locale": "ru", "description_separator": ""}}"#).unwrap();

    let mut manager = ConfigManager::with_prefix("RULEFORM");
    manager.load_file(file.path()).unwrap();
    manager.load_vars(vec![
        ("RULEFORM_LOCALE".to_string(), "en".to_string()),
        ("OTHER_LOCALE".to_string(), "de".to_string()),
    ]);

    assert_eq!(manager.get::<String>("locale").unwrap(), "en");
    assert_eq!(manager.get::<String>("description_separator").unwrap(), "");
}
