use std::fs;

use ace_tracker::config::{Config, ConfigError, SettingsConfig};
use ace_tracker::store::settings::{Language, Settings};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.settings, SettingsConfig::default());
    assert_eq!(config.settings.to_settings(), Settings::default());
    assert_eq!(config.display.related_news_limit, 2);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("ace-tracker/config.toml"));
}

#[test]
fn test_missing_file_gives_default() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"
[settings]
language = "en"
dark_mode = true
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.settings.language, Some(Language::En));
    assert_eq!(config.settings.dark_mode, Some(true));
    assert_eq!(config.settings.use_system_theme, None);
    assert_eq!(config.display.related_news_limit, 2);
}

#[test]
fn test_configured_dark_mode_takes_effect() {
    let (_dir, path) = write_config("[settings]\ndark_mode = true\n");
    let settings = Config::load_from(&path).unwrap().settings.to_settings();
    assert!(settings.is_dark_mode());
    assert!(!settings.use_system_theme());
    assert!(settings.effective_dark_mode(false));
}

#[test]
fn test_configured_light_mode_stops_following_system() {
    let (_dir, path) = write_config("[settings]\ndark_mode = false\n");
    let settings = Config::load_from(&path).unwrap().settings.to_settings();
    assert!(!settings.use_system_theme());
    assert!(!settings.effective_dark_mode(true));
}

#[test]
fn test_explicit_system_theme_wins_over_dark_mode() {
    let (_dir, path) = write_config(
        r#"
[settings]
dark_mode = true
use_system_theme = true
"#,
    );
    let settings = Config::load_from(&path).unwrap().settings.to_settings();
    assert!(settings.is_dark_mode());
    assert!(settings.use_system_theme());
    assert!(!settings.effective_dark_mode(false));
}

#[test]
fn test_settings_section_absent_keeps_defaults() {
    let (_dir, path) = write_config("[display]\nrelated_news_limit = 3\n");
    let settings = Config::load_from(&path).unwrap().settings.to_settings();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_unknown_language_is_parse_error() {
    let (_dir, path) = write_config("[settings]\nlanguage = \"fr\"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_zero_related_limit_fails_validation() {
    let (_dir, path) = write_config("[display]\nrelated_news_limit = 0\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { section, message }) => {
            assert_eq!(section, "display");
            assert!(message.contains("related_news_limit"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_bad_log_level_fails_validation() {
    let mut config = Config::default();
    config.logging.level = "ace_tracker=loudest".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { section: "logging", .. })
    ));
}

#[test]
fn test_error_messages_name_the_app_and_section() {
    let (_dir, path) = write_config("[display]\nrelated_news_limit = 0\n");
    let message = Config::load_from(&path).unwrap_err().to_string();
    assert!(message.starts_with("Invalid [display] config"), "{}", message);

    let (_dir, path) = write_config("[display\n");
    let message = Config::load_from(&path).unwrap_err().to_string();
    assert!(message.starts_with("Malformed ace-tracker config"), "{}", message);
}

#[test]
fn test_round_trip_through_toml() {
    let mut config = Config::default();
    config.settings.dark_mode = Some(true);
    config.display.related_news_limit = 5;
    let text = toml::to_string(&config).unwrap();
    let (_dir, path) = write_config(&text);
    assert_eq!(Config::load_from(&path).unwrap(), config);
}
