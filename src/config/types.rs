use serde::{Deserialize, Serialize};

use crate::store::settings::{Language, Settings};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Startup overrides for the settings slice. Absent keys keep the slice
/// defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SettingsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,

    /// Setting this stops following the system theme unless
    /// `use_system_theme` is also given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_system_theme: Option<bool>,
}

impl SettingsConfig {
    /// Build the initial slice through its setters, so `dark_mode = true`
    /// takes effect even though the default follows the system theme.
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();
        if let Some(language) = self.language {
            settings.set_language(language);
        }
        if let Some(dark_mode) = self.dark_mode {
            settings.set_dark_mode(dark_mode);
        }
        if let Some(use_system_theme) = self.use_system_theme {
            settings.set_use_system_theme(use_system_theme);
        }
        settings
    }
}

/// Presentation tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Related articles listed under a news item (default: 2).
    #[serde(default = "default_related_news_limit")]
    pub related_news_limit: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_related_news_limit() -> usize {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            related_news_limit: default_related_news_limit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
