//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Every section is optional; a missing file section falls back to defaults.
//!
//! # Example
//!
//! ```no_run
//! use outlay::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::pricing::PricingConfig;
use crate::application::allocation::config::{SolverBackend, SolverConfig};
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Price projection settings.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Allocation solver settings.
    #[serde(default)]
    pub solver: SolverConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise use defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Initialize tracing from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Validate configuration values.
    ///
    /// Checks that all values are within acceptable ranges.
    pub fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected \"pretty\" or \"json\", got \"{}\"", self.logging.format),
            }
            .into());
        }

        if self.pricing.growth_rate <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "growth_rate",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        let solver = &self.solver;
        if !(0.0..1.0).contains(&solver.relative_gap_tolerance) {
            return Err(ConfigError::InvalidValue {
                field: "relative_gap_tolerance",
                reason: "must be in [0, 1)".to_string(),
            }
            .into());
        }
        if !solver.time_limit_seconds.is_finite() || solver.time_limit_seconds <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "time_limit_seconds",
                reason: "must be a positive number of seconds".to_string(),
            }
            .into());
        }
        if solver.dp_capacity_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dp_capacity_limit",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if solver.backend == SolverBackend::Highs && !cfg!(feature = "highs") {
            return Err(ConfigError::InvalidValue {
                field: "backend",
                reason: "the highs backend requires building with --features highs".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
