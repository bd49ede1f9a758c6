//! Runtime configuration: optional YAML file plus environment overrides.
//!
//! ```yaml
//! bind_addr: 127.0.0.1:3000
//! min_points: 21
//! workers: 4
//! log_filter: fairway=debug
//! ```
//!
//! `FAIRWAY_CONFIG` names the file. `FAIRWAY_BIND`, `FAIRWAY_MIN_POINTS`,
//! `FAIRWAY_WORKERS` and `FAIRWAY_LOG` override individual fields.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::optimizer::{DEFAULT_MIN_POINTS, MAX_POINTS};

pub const CONFIG_PATH_ENV: &str = "FAIRWAY_CONFIG";
pub const BIND_ENV: &str = "FAIRWAY_BIND";
pub const MIN_POINTS_ENV: &str = "FAIRWAY_MIN_POINTS";
pub const WORKERS_ENV: &str = "FAIRWAY_WORKERS";
pub const LOG_ENV: &str = "FAIRWAY_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid {key} '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Minimum tier points for snapshots that do not set their own.
    pub min_points: u32,
    /// Batch worker threads; 0 uses every core.
    pub workers: usize,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            min_points: DEFAULT_MIN_POINTS,
            workers: 0,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, then the file named by `FAIRWAY_CONFIG`, then env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = env::vars().collect();
        Self::load_from(&vars)
    }

    /// Same as [AppConfig::load] with an explicit variable set.
    pub fn load_from(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let config = match vars.get(CONFIG_PATH_ENV) {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.with_overrides(vars)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(raw)?;
        config.validated()
    }

    fn with_overrides(mut self, vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        if let Some(bind) = vars.get(BIND_ENV) {
            self.bind_addr = bind.clone();
        }
        if let Some(raw) = vars.get(MIN_POINTS_ENV) {
            self.min_points = parse_var(MIN_POINTS_ENV, raw)?;
        }
        if let Some(raw) = vars.get(WORKERS_ENV) {
            self.workers = parse_var(WORKERS_ENV, raw)?;
        }
        if let Some(filter) = vars.get(LOG_ENV) {
            self.log_filter = filter.clone();
        }
        self.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.bind_addr.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "bind_addr",
                value: self.bind_addr,
                reason: "must not be empty",
            });
        }
        if self.min_points > MAX_POINTS {
            return Err(ConfigError::Invalid {
                key: "min_points",
                value: self.min_points.to_string(),
                reason: "no roster can reach more than 36 points",
            });
        }
        Ok(self)
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: "not a non-negative integer",
    })
}
