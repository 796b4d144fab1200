//! Configuration system for the anytime search framework.
//!
//! Load search-pipeline configuration from TOML files to control time
//! budgets, stage time fractions, seeding and diagnostics without code
//! changes. The configuration covers the search layer only; it knows
//! nothing about any concrete game.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use std::time::Duration;
//! use anytime_config::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 42
//!     time_limit_ms = 95
//!     log_best_count = 3
//!
//!     [[stages]]
//!     solver = "greedy"
//!     time_fraction = 0.1
//!
//!     [[stages]]
//!     solver = "hill_climbing"
//!     time_fraction = 0.9
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_millis(95)));
//! assert_eq!(config.stages.len(), 2);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use anytime_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main search pipeline configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Random seed for reproducible tie-breaking and sampling.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Per-turn wall-clock budget in milliseconds.
    #[serde(default)]
    pub time_limit_ms: Option<u64>,

    /// How many of the best solutions the logging decorator emits.
    #[serde(default = "default_log_best_count")]
    pub log_best_count: usize,

    /// Fraction of the budget a hill-climbing stage spends on its seeding
    /// base solver.
    #[serde(default = "default_base_solver_time_fraction")]
    pub base_solver_time_fraction: f64,

    /// Pipeline stages, run in declared order.
    #[serde(default)]
    pub stages: Vec<StageConfig>,
}

/// One stage of a composite pipeline.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StageConfig {
    /// Name resolved by the caller to a concrete solver.
    pub solver: String,

    /// Share of the remaining budget for this stage. Fractions need not
    /// sum to 1; they are renormalized at pipeline construction.
    pub time_fraction: f64,
}

fn default_log_best_count() -> usize {
    3
}

fn default_base_solver_time_fraction() -> f64 {
    0.1
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            time_limit_ms: None,
            log_best_count: default_log_best_count(),
            base_solver_time_fraction: default_base_solver_time_fraction(),
            stages: Vec::new(),
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, contains invalid TOML,
    /// or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// The per-turn time budget, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    /// Rejects configurations that would fail at pipeline construction.
    ///
    /// These are programmer errors, caught at load time rather than on the
    /// first turn: a non-positive base solver fraction (zero sub-budget),
    /// negative or non-finite stage fractions, and stage fractions that
    /// sum to zero (which would make renormalization divide by zero).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_solver_time_fraction.is_finite() || self.base_solver_time_fraction <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "base_solver_time_fraction must be positive, got {}",
                self.base_solver_time_fraction
            )));
        }
        for stage in &self.stages {
            if !stage.time_fraction.is_finite() || stage.time_fraction < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "stage '{}' has invalid time_fraction {}",
                    stage.solver, stage.time_fraction
                )));
            }
        }
        if !self.stages.is_empty() {
            let total: f64 = self.stages.iter().map(|s| s.time_fraction).sum();
            if total <= 0.0 {
                return Err(ConfigError::Invalid(
                    "stage time fractions sum to zero".to_string(),
                ));
            }
        }
        Ok(())
    }
}
