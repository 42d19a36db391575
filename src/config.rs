//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::clock::{ClockFormat, FooterLink};
use crate::recipes::MealDbConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub clock: ClockConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Recipe API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn client_config(&self) -> MealDbConfig {
        MealDbConfig {
            base_url: self.base_url.clone(),
            request_timeout_secs: self.request_timeout_secs,
        }
    }
}

/// Saved state configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("mealplan").to_string_lossy().to_string())
        .unwrap_or_else(|| "./mealplan_data".to_string())
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// `data_dir` with a leading `~/` expanded to the home directory
    pub fn data_path(&self) -> PathBuf {
        match (self.data_dir.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(&self.data_dir),
        }
    }
}

/// Clock display configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    /// Minutes east of UTC
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// Appended after the time when non-empty
    #[serde(default)]
    pub zone_label: String,

    #[serde(default = "default_clock_interval")]
    pub interval_ms: u64,

    #[serde(default = "default_footer_link")]
    pub footer_link: String,

    #[serde(default = "default_footer_label")]
    pub footer_label: String,
}

fn default_clock_interval() -> u64 {
    1000
}

fn default_footer_link() -> String {
    "about.html".to_string()
}

fn default_footer_label() -> String {
    "About".to_string()
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            zone_label: String::new(),
            interval_ms: default_clock_interval(),
            footer_link: default_footer_link(),
            footer_label: default_footer_label(),
        }
    }
}

impl ClockConfig {
    pub fn format(&self) -> Result<ClockFormat, ConfigError> {
        ClockFormat::from_minutes(self.utc_offset_minutes, self.zone_label.clone())
            .ok_or(ConfigError::InvalidOffset(self.utc_offset_minutes))
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }

    pub fn link(&self) -> FooterLink {
        FooterLink {
            label: self.footer_label.clone(),
            target: self.footer_link.clone(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("mealplan").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        Self::load_first(config_paths.iter().flatten())
    }

    /// Load the first existing file among `candidates`. A file that exists
    /// but cannot be read or parsed is an error, not a fallthrough.
    fn load_first<'a>(
        candidates: impl IntoIterator<Item = &'a PathBuf>,
    ) -> Result<Self, ConfigError> {
        for path in candidates {
            if path.exists() {
                let config = Self::load_with_env(path)?;
                tracing::info!("Loaded config from {:?}", path);
                return Ok(config);
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = var("MEALPLAN_API_URL") {
            self.api.base_url = url;
        }

        if let Some(data_dir) = var("MEALPLAN_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }

        if let Some(offset) = var("MEALPLAN_UTC_OFFSET_MINUTES") {
            let minutes = offset.parse::<i32>().map_err(|e| ConfigError::Env {
                var: "MEALPLAN_UTC_OFFSET_MINUTES",
                error: format!("{:?}: {}", offset, e),
            })?;
            self.clock.utc_offset_minutes = minutes;
        }

        if let Some(level) = var("MEALPLAN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("MEALPLAN_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {var}: {error}")]
    Env { var: &'static str, error: String },

    #[error("UTC offset of {0} minutes is out of range")]
    InvalidOffset(i32),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Mealplan Configuration
#
# Environment variables override these settings:
# - MEALPLAN_API_URL
# - MEALPLAN_DATA_DIR
# - MEALPLAN_UTC_OFFSET_MINUTES
# - MEALPLAN_LOG_LEVEL
# - MEALPLAN_LOG_FORMAT

[api]
# Recipe API base URL
base_url = "https://www.themealdb.com/api/json/v1/1"

# Request timeout in seconds
request_timeout_secs = 30

[storage]
# Directory holding the saved meal plan and shopping items
data_dir = "~/.local/share/mealplan"

[clock]
# Fixed time zone, in minutes east of UTC (e.g. -300 for UTC-5)
utc_offset_minutes = 0

# Shown after the time, e.g. "EST"
zone_label = ""

# Refresh interval (ms)
interval_ms = 1000

# Footer clock button
footer_label = "About"
footer_link = "about.html"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://www.themealdb.com/api/json/v1/1");
        assert_eq!(config.clock.interval(), Duration::from_secs(1));
        assert_eq!(config.clock.link().target, "about.html");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.storage.data_dir, "~/.local/share/mealplan");
        assert_eq!(config.clock.footer_label, "About");
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let content = "[clock]\nutc_offset_minutes = -300\nzone_label = \"EST\"\n";
        std::fs::write(&path, content).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.clock.utc_offset_minutes, -300);
        assert_eq!(config.clock.interval_ms, 1000);
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.clock.format().unwrap().offset().local_minus_utc(), -300 * 60);
    }

    #[test]
    fn test_missing_and_invalid_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[api\nbase_url = 1").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("MEALPLAN_API_URL", "http://127.0.0.1:9000/api"),
            ("MEALPLAN_DATA_DIR", "/tmp/mealplan"),
            ("MEALPLAN_UTC_OFFSET_MINUTES", "60"),
            ("MEALPLAN_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.api.base_url, "http://127.0.0.1:9000/api");
        assert_eq!(config.storage.data_dir, "/tmp/mealplan");
        assert_eq!(config.clock.utc_offset_minutes, 60);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_bad_offset_override_rejected() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(|key| {
                (key == "MEALPLAN_UTC_OFFSET_MINUTES").then(|| "east".to_string())
            })
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Env {
                var: "MEALPLAN_UTC_OFFSET_MINUTES",
                ..
            }
        ));
        assert!(err.to_string().contains("\"east\""));
        assert_eq!(config.clock.utc_offset_minutes, 0);
    }

    #[test]
    fn test_load_first_uses_first_existing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let found = dir.path().join("config.toml");
        std::fs::write(&found, "[clock]\nutc_offset_minutes = -300\n").unwrap();

        let config = Config::load_first([&missing, &found]).unwrap();
        assert_eq!(config.clock.utc_offset_minutes, -300);
    }

    #[test]
    fn test_load_first_reports_malformed_file() {
        let dir = tempdir().unwrap();
        let malformed = dir.path().join("config.toml");
        let fallback = dir.path().join("fallback.toml");
        std::fs::write(&malformed, "[clock\nutc_offset_minutes = -300\n").unwrap();
        std::fs::write(&fallback, "[clock]\nutc_offset_minutes = 60\n").unwrap();

        let err = Config::load_first([&malformed, &fallback]).unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => assert_eq!(path, malformed),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_data_path() {
        let storage = StorageConfig {
            data_dir: "/var/lib/mealplan".to_string(),
        };
        assert_eq!(storage.data_path(), PathBuf::from("/var/lib/mealplan"));

        if let Some(home) = dirs::home_dir() {
            let storage = StorageConfig {
                data_dir: "~/.local/share/mealplan".to_string(),
            };
            assert_eq!(storage.data_path(), home.join(".local/share/mealplan"));
        }
    }

    #[test]
    fn test_invalid_offset() {
        let clock = ClockConfig {
            utc_offset_minutes: 25 * 60,
            ..Default::default()
        };
        assert!(matches!(clock.format(), Err(ConfigError::InvalidOffset(1500))));
    }
}
