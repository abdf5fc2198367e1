//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/fitlog/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/fitlog/` (~/.config/fitlog/)
//! - Data: `$XDG_DATA_HOME/fitlog/` (~/.local/share/fitlog/)
//! - State/Logs: `$XDG_STATE_HOME/fitlog/` (~/.local/state/fitlog/)

use crate::error::{Error, Result};
use crate::health::Sex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_DATA_HOME or ~/.local/share
fn xdg_data_home() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/share"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Statistics windows
    #[serde(default)]
    pub stats: StatsConfig,

    /// Body measurements for BMI/BMR (optional)
    #[serde(default)]
    pub profile: Option<ProfileConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default windows for activity charts
#[derive(Debug, Deserialize, Clone)]
pub struct StatsConfig {
    /// Days shown by the daily activity view
    #[serde(default = "default_activity_days")]
    pub activity_days: u32,

    /// Weeks shown by the weekly progress view
    #[serde(default = "default_weekly_weeks")]
    pub weekly_weeks: u32,

    /// Days covered by the weight trend
    #[serde(default = "default_weight_days")]
    pub weight_days: u32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            activity_days: default_activity_days(),
            weekly_weeks: default_weekly_weeks(),
            weight_days: default_weight_days(),
        }
    }
}

impl StatsConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.activity_days == 0 || self.activity_days > 366 {
            return Err(Error::Config(
                "stats.activity_days must be between 1 and 366".to_string(),
            ));
        }
        if self.weekly_weeks == 0 || self.weekly_weeks > 104 {
            return Err(Error::Config(
                "stats.weekly_weeks must be between 1 and 104".to_string(),
            ));
        }
        if self.weight_days == 0 {
            return Err(Error::Config(
                "stats.weight_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_activity_days() -> u32 {
    7
}

fn default_weekly_weeks() -> u32 {
    4
}

fn default_weight_days() -> u32 {
    30
}

/// Body measurements
#[derive(Debug, Deserialize, Clone)]
pub struct ProfileConfig {
    pub height_cm: f64,
    pub age: Option<u32>,
    pub sex: Option<Sex>,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.stats.validate()?;
        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/fitlog/config.toml` (~/.config/fitlog/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("fitlog").join("config.toml")
    }

    /// Returns the data directory path (for SQLite database)
    ///
    /// `$XDG_DATA_HOME/fitlog/` (~/.local/share/fitlog/)
    pub fn data_dir() -> PathBuf {
        xdg_data_home().join("fitlog")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/fitlog/` (~/.local/state/fitlog/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("fitlog")
    }

    /// Returns the database file path
    ///
    /// `$XDG_DATA_HOME/fitlog/data.db` (~/.local/share/fitlog/data.db)
    pub fn database_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }

    /// Ensure XDG base directory environment variables are set.
    ///
    /// This is mainly for CLI binaries that want explicit, stable path behavior
    /// before invoking other components that read these env vars.
    pub fn ensure_xdg_env() {
        let home = home_dir();

        if std::env::var("XDG_DATA_HOME").is_err() {
            std::env::set_var("XDG_DATA_HOME", home.join(".local/share"));
        }

        if std::env::var("XDG_STATE_HOME").is_err() {
            std::env::set_var("XDG_STATE_HOME", home.join(".local/state"));
        }

        if std::env::var("XDG_CONFIG_HOME").is_err() {
            std::env::set_var("XDG_CONFIG_HOME", home.join(".config"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.profile.is_none());
        assert_eq!(config.stats.activity_days, 7);
        assert_eq!(config.stats.weekly_weeks, 4);
        assert_eq!(config.logging.level, "info");
        assert!(config.stats.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[stats]
activity_days = 14
weekly_weeks = 8

[profile]
height_cm = 178.0
age = 34
sex = "female"

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.stats.activity_days, 14);
        assert_eq!(config.stats.weekly_weeks, 8);
        assert_eq!(config.stats.weight_days, 30);
        let profile = config.profile.unwrap();
        assert_eq!(profile.height_cm, 178.0);
        assert_eq!(profile.sex, Some(Sex::Female));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_stats_config_validation() {
        let config = StatsConfig {
            activity_days: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = StatsConfig {
            weekly_weeks: 500,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_rejects_invalid_windows() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[stats]\nweekly_weeks = 0\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
