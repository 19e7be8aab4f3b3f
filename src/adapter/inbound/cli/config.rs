//! Handler for the `config` command group, plus config loading for the
//! other commands.

use std::fs;
use std::path::Path;

use super::diagnostic::{self, ParseError};
use super::output;
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Load the configuration at `path`.
///
/// A missing file falls back to defaults unless the path was given
/// explicitly. TOML syntax errors are reported with their source span.
pub fn load(path: &Path, explicit: bool) -> Result<Config> {
    if !explicit && !path.exists() {
        return Ok(Config::default());
    }

    let src = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
    match Config::parse_toml(&src) {
        Err(Error::Config(ConfigError::Parse(err))) => {
            diagnostic::report(
                ParseError::from_toml(path, &src, &err)
                    .with_help("run `outlay config init` to write a documented template"),
            );
            Err(ConfigError::Parse(err).into())
        }
        other => other,
    }
}

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::hint(&format!(
        "run {} to check your edits",
        output::highlight(format!("outlay -c {} config validate", path.display()))
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(config: &Config, path: &Path) -> Result<()> {
    if output::is_json() {
        output::json_output(&serde_json::to_value(config)?);
        return Ok(());
    }

    output::section("Effective Configuration");
    if path.exists() {
        output::field("Path", path.display());
    } else {
        output::field("Path", format!("{} (not found, using defaults)", path.display()));
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Pricing");
    output::field("Growth rate", config.pricing.growth_rate);

    let solver = &config.solver;
    output::section("Solver");
    output::field("Backend", solver.backend);
    output::field(
        "Gap",
        format!("{:.2}%", solver.relative_gap_tolerance * 100.0),
    );
    output::field("Time limit", format!("{}s", solver.time_limit_seconds));
    output::field(
        "Solver log",
        if solver.verbose_solver_log {
            "verbose"
        } else {
            "quiet"
        },
    );
    output::field("DP limit", solver.dp_capacity_limit);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    load(path, true)?;
    output::success("Config file is valid");
    Ok(())
}
