//! TOML configuration: initial settings, display tuning and log level.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DisplayConfig, LoggingConfig, SettingsConfig};
