//! Configuration loading, override and validation tests.

use ai_visibility::config::{
    discover_config_file, generate_example_config, generate_json_schema, load_config_file,
    load_or_default, ApiOverrides, AppConfig, ConfigFileError, ConfigPreset, Validatable,
};
use ai_visibility::reports::ReportFormat;
use ai_visibility::ResultSchema;
use std::time::Duration;

#[test]
fn partial_yaml_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ai-visibility.yaml");
    std::fs::write(
        &path,
        "api:\n  base_url: https://api.example.com\n  schema: url-analysis\noutput:\n  format: markdown\ntui:\n  theme: light\n",
    )
    .unwrap();

    let config = load_config_file(&path).unwrap();
    assert_eq!(config.api.base_url, "https://api.example.com");
    assert_eq!(config.api.schema, ResultSchema::UrlAnalysis);
    assert_eq!(config.api.endpoint(), "https://api.example.com/analyze");
    assert_eq!(config.api.timeout(), Duration::from_secs(30));
    assert!(config.api.unwrap_envelope);
    assert_eq!(config.output.format, ReportFormat::Markdown);
    assert_eq!(config.tui.theme, "light");
    assert!(config.is_valid());
}

#[test]
fn explicit_path_wins_discovery() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.yaml");
    std::fs::write(&path, "api:\n  timeout_secs: 5\n").unwrap();

    assert_eq!(discover_config_file(Some(&path)), Some(path.clone()));
    let (config, loaded_from) = load_or_default(Some(&path));
    assert_eq!(loaded_from, Some(path));
    assert_eq!(config.api.timeout_secs, 5);
}

#[test]
fn unparsable_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "api: [not, a, map").unwrap();

    assert!(matches!(
        load_config_file(&path),
        Err(ConfigFileError::Parse(_))
    ));
    let (config, loaded_from) = load_or_default(Some(&path));
    assert!(loaded_from.is_none());
    assert_eq!(config, AppConfig::default());
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_config_file(&dir.path().join("absent.yaml")),
        Err(ConfigFileError::NotFound(_))
    ));
}

#[test]
fn preset_then_field_overrides() {
    let mut config = AppConfig::default();
    config.apply_overrides(&ApiOverrides {
        preset: Some(ConfigPreset::Dashboard),
        timeout_secs: Some(10),
        ..ApiOverrides::default()
    });

    assert_eq!(config.api.path, "/api/analyze-url");
    assert_eq!(config.api.query_field, "company_name");
    assert_eq!(config.api.schema, ResultSchema::Grid);
    assert_eq!(config.api.timeout_secs, 10);
}

#[test]
fn validation_reports_each_bad_field() {
    let mut config = AppConfig::default();
    config.api.base_url = "ftp://example.com".to_string();
    config.api.timeout_secs = 0;
    config.tui.theme = "neon".to_string();

    let errors = config.validate();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.contains(&"api.base_url"));
    assert!(fields.contains(&"api.timeout_secs"));
    assert!(fields.contains(&"tui.theme"));
    assert!(!config.is_valid());
}

#[test]
fn example_config_parses_back() {
    let example = generate_example_config();
    let config: AppConfig = serde_yaml::from_str(&example).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn json_schema_describes_sections() {
    let schema = generate_json_schema().unwrap();
    let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
    let text = value.to_string();
    for section in ["api", "output", "tui"] {
        assert!(text.contains(section), "schema should mention {section}");
    }
}
