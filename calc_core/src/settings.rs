//! # Settings
//!
//! User preferences shared by the CLI and GUI, stored as a small TOML file.
//! Every section and key is optional; anything missing falls back to its
//! default.
//!
//! ```toml
//! version = "0.1.0"
//!
//! [appearance]
//! dark_mode = true
//!
//! [output]
//! json = false
//!
//! [logging]
//! filter = "info"
//! ```
//!
//! See [`crate::file_io`] for loading and atomic saving.

use serde::{Deserialize, Serialize};

/// Current schema version for settings files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Default settings file name, looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "concrete.toml";

/// Root settings container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// GUI appearance
    pub appearance: AppearanceSettings,

    /// CLI output
    pub output: OutputSettings,

    /// Log filtering
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: SCHEMA_VERSION.to_string(),
            appearance: AppearanceSettings::default(),
            output: OutputSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// GUI appearance settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    /// Start in dark mode
    pub dark_mode: bool,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        AppearanceSettings { dark_mode: true }
    }
}

/// CLI output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Print results as JSON after the text banner
    pub json: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive used when RUST_LOG is unset
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.version, SCHEMA_VERSION);
        assert!(settings.appearance.dark_mode);
        assert!(!settings.output.json);
        assert_eq!(settings.logging.filter, "info");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("[output]\njson = true\n").unwrap();
        assert!(settings.output.json);
        assert!(settings.appearance.dark_mode);
        assert_eq!(settings.version, SCHEMA_VERSION);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut settings = Settings::default();
        settings.appearance.dark_mode = false;
        settings.logging.filter = "calc_core=debug".to_string();

        let text = toml::to_string_pretty(&settings).unwrap();
        assert!(text.contains("[appearance]"));

        let roundtrip: Settings = toml::from_str(&text).unwrap();
        assert_eq!(roundtrip, settings);
    }
}
