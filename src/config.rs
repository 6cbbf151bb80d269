//! Display configuration.
//!
//! Provides two loading methods:
//! - `default_config()` - Loads the config compiled into the binary
//! - `load_config(toml)` - Parses an alternative config document
//!
//! Keys missing from a document fall back to the built-in defaults.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::stats::NOT_AVAILABLE;
use crate::table::ExpandPolicy;

/// Default config embedded in the binary at compile time.
/// Loaded from `config/dashboard.toml`.
const DEFAULT_CONFIG: &str = include_str!("../config/dashboard.toml");

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub logging: LoggingConfig,
    pub table: TableConfig,
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "jobstats=debug"
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Text shown instead of an average for years without jobs
    pub salary_placeholder: String,
    pub expand_policy: ExpandPolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            salary_placeholder: NOT_AVAILABLE.to_string(),
            expand_policy: ExpandPolicy::Toggle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    /// Line and dot color
    pub stroke: String,
    /// SVG `stroke-dasharray` for grid lines
    pub grid_dash: String,
    pub active_dot_radius: f64,
    pub dot_radius: f64,
    pub y_tick_count: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 300,
            stroke: "#8884d8".to_string(),
            grid_dash: "3 3".to_string(),
            active_dot_radius: 8.0,
            dot_radius: 3.0,
            y_tick_count: 5,
        }
    }
}

pub fn load_config(content: &str) -> Result<DashboardConfig, ConfigError> {
    let config: DashboardConfig = toml::from_str(content)?;
    Ok(config)
}

/// Get the config embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (a build-time bug).
pub fn default_config() -> DashboardConfig {
    load_config(DEFAULT_CONFIG).expect("embedded dashboard.toml must be valid TOML")
}
