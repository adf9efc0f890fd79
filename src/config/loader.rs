//! Configuration file loading with precedence handling.
//!
//! Precedence (lowest to highest): built-in defaults, TOML config file,
//! environment variables, CLI flags.

use crate::editor::DATE_FORMAT;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("failed to read config file at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("invalid TOML in {path}: {reason}")]
    Parse {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A date setting did not parse in `dd.MM.yyyy` format.
    #[error("invalid date in {setting}: {value:?} (expected dd.MM.yyyy)")]
    InvalidDate {
        /// Which setting held the bad value.
        setting: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A numeric setting did not parse.
    #[error("invalid number in {setting}: {value:?}")]
    InvalidNumber {
        /// Which setting held the bad value.
        setting: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unspecified fields fall back to defaults.
/// Corresponds to `~/.config/ganttview/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Pixels per calendar day on the chart.
    #[serde(default)]
    pub day_width: Option<f64>,

    /// Row height in px.
    #[serde(default)]
    pub row_height: Option<f64>,

    /// Bar height in px.
    #[serde(default)]
    pub bar_height: Option<f64>,

    /// Axis window length in years.
    #[serde(default)]
    pub window_years: Option<i32>,

    /// Axis origin as a `dd.MM.yyyy` string. Absent means the chart
    /// derives its origin from the earliest event start.
    #[serde(default)]
    pub base_date: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Pixels per calendar day.
    pub day_width: f64,
    /// Row height in px.
    pub row_height: f64,
    /// Bar height in px.
    pub bar_height: f64,
    /// Axis window in years.
    pub window_years: i32,
    /// Explicit axis origin; `None` derives from the data.
    pub base_date: Option<NaiveDate>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            day_width: 4.0,
            row_height: 60.0,
            bar_height: 20.0,
            window_years: 2,
            base_date: None,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// `~/.local/state/ganttview/ganttview.log` on Unix-like systems, the
/// platform equivalent elsewhere, current directory as a last resort.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("ganttview").join("ganttview.log")
    } else {
        PathBuf::from("ganttview.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist; missing config is not
/// an error, defaults apply.
///
/// # Errors
///
/// Returns an error only if the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path (`~/.config/ganttview/config.toml`).
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ganttview").join("config.toml"))
}

/// Load configuration with path precedence.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `GANTTVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/ganttview/config.toml`
///
/// # Errors
///
/// Returns an error only if a config file exists but cannot be read or
/// parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("GANTTVIEW_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a loaded config file into defaults.
///
/// # Errors
///
/// Returns an error when `base_date` is present but malformed.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let base_date = match config.base_date {
        Some(raw) => Some(parse_base_date(&raw, "base_date")?),
        None => defaults.base_date,
    };

    Ok(ResolvedConfig {
        day_width: config.day_width.unwrap_or(defaults.day_width),
        row_height: config.row_height.unwrap_or(defaults.row_height),
        bar_height: config.bar_height.unwrap_or(defaults.bar_height),
        window_years: config.window_years.unwrap_or(defaults.window_years),
        base_date,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides.
///
/// Checks `GANTTVIEW_DAY_WIDTH` (f64).
///
/// # Errors
///
/// Returns an error when a set variable holds an unparseable value; a
/// silently ignored typo would be worse than failing startup.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var("GANTTVIEW_DAY_WIDTH") {
        let parsed: f64 = raw.parse().map_err(|_| ConfigError::InvalidNumber {
            setting: "GANTTVIEW_DAY_WIDTH",
            value: raw,
        })?;
        config.day_width = parsed;
    }
    Ok(config)
}

/// Apply CLI argument overrides (highest precedence).
///
/// Only flags the user actually passed arrive here as `Some`.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    day_width: Option<f64>,
    window_years: Option<i32>,
    base_date: Option<NaiveDate>,
) -> ResolvedConfig {
    if let Some(value) = day_width {
        config.day_width = value;
    }
    if let Some(value) = window_years {
        config.window_years = value;
    }
    if let Some(value) = base_date {
        config.base_date = Some(value);
    }
    config
}

fn parse_base_date(raw: &str, setting: &'static str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| ConfigError::InvalidDate {
        setting,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_reference_chart_dimensions() {
        let config = ResolvedConfig::default();
        assert_eq!(config.day_width, 4.0);
        assert_eq!(config.row_height, 60.0);
        assert_eq!(config.bar_height, 20.0);
        assert_eq!(config.window_years, 2);
        assert_eq!(config.base_date, None);
    }

    #[test]
    fn missing_file_resolves_to_defaults() {
        assert_eq!(
            load_config_file("/definitely/not/here.toml").unwrap(),
            None
        );
        assert_eq!(merge_config(None).unwrap(), ResolvedConfig::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "day_width = 8.0\nwindow_years = 1\nbase_date = \"01.06.2024\"\n"
        )
        .unwrap();

        let loaded = load_config_file(file.path()).unwrap().unwrap();
        let resolved = merge_config(Some(loaded)).unwrap();
        assert_eq!(resolved.day_width, 8.0);
        assert_eq!(resolved.window_years, 1);
        assert_eq!(
            resolved.base_date,
            Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        );
        // Untouched fields keep defaults
        assert_eq!(resolved.row_height, 60.0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "day_widht = 8.0\n").unwrap();
        assert!(matches!(
            load_config_file(file.path()).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }

    #[test]
    fn malformed_base_date_is_a_config_error() {
        let config = ConfigFile {
            base_date: Some("2024-06-01".to_string()),
            ..ConfigFile::default()
        };
        assert!(matches!(
            merge_config(Some(config)).unwrap_err(),
            ConfigError::InvalidDate { setting: "base_date", .. }
        ));
    }

    #[test]
    fn cli_overrides_beat_file_values() {
        let config = ConfigFile {
            day_width: Some(8.0),
            ..ConfigFile::default()
        };
        let resolved = merge_config(Some(config)).unwrap();
        let base = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let overridden = apply_cli_overrides(resolved, Some(2.0), Some(3), Some(base));
        assert_eq!(overridden.day_width, 2.0);
        assert_eq!(overridden.window_years, 3);
        assert_eq!(overridden.base_date, Some(base));
    }

    #[test]
    fn absent_cli_flags_change_nothing() {
        let resolved = ResolvedConfig::default();
        let overridden = apply_cli_overrides(resolved.clone(), None, None, None);
        assert_eq!(overridden, resolved);
    }

    #[test]
    fn default_log_path_names_the_app() {
        let path = default_log_path();
        assert!(path.to_string_lossy().contains("ganttview"));
    }
}
