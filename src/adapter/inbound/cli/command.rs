//! Command-line interface definitions.
//!
//! Defines the CLI structure for outlay using `clap`: `solve` allocates a
//! budget across a catalog, `project` prints a price schedule and `config`
//! manages the configuration file.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::paths;
use crate::domain::Item;

/// Spend a fixed budget on compounding-price items with minimal leftover
#[derive(Parser, Debug)]
#[command(name = "outlay")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file (defaults to ~/.outlay/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration path in effect and whether it was given explicitly.
    #[must_use]
    pub fn config_path(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (paths::default_config(), false),
        }
    }
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Allocate a budget across a catalog of items
    Solve(SolveArgs),

    /// Print the projected price of one item over a range of periods
    Project(ProjectArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `outlay config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a documented configuration file.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration file.
    Validate,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `solve`.
///
/// Flags take precedence over values read from `--input`.
#[derive(Parser, Debug)]
pub struct SolveArgs {
    /// Catalog file (TOML or JSON) with `budget`, `period` and `items`.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Catalog entry as NAME=PRICE (repeatable; replaces the file's items).
    #[arg(long = "item", value_name = "NAME=PRICE", value_parser = parse_item)]
    pub items: Vec<Item>,

    /// Budget to spend.
    #[arg(short, long)]
    pub budget: Option<Decimal>,

    /// Period the prices are projected to (1-100).
    #[arg(short, long)]
    pub period: Option<u32>,

    /// Override the configured per-period growth rate.
    #[arg(long)]
    pub growth_rate: Option<Decimal>,

    /// Prompt for budget, items and period.
    #[arg(long, conflicts_with_all = ["input", "items"])]
    pub interactive: bool,
}

/// Arguments for `project`.
#[derive(Parser, Debug)]
pub struct ProjectArgs {
    /// Base price at period 1.
    #[arg(long)]
    pub price: Decimal,

    /// First period of the schedule.
    #[arg(long, default_value_t = 1)]
    pub from: u32,

    /// Last period of the schedule.
    #[arg(long, default_value_t = 100)]
    pub to: u32,

    /// Override the configured per-period growth rate.
    #[arg(long)]
    pub growth_rate: Option<Decimal>,
}

/// Parse `NAME=PRICE`. The last `=` separates the price, so names may
/// contain `=`.
fn parse_item(raw: &str) -> Result<Item, String> {
    let (name, price) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=PRICE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("item name is empty in '{raw}'"));
    }
    let price: Decimal = price
        .trim()
        .parse()
        .map_err(|err| format!("invalid price in '{raw}': {err}"))?;
    Ok(Item::new(name, price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_solve_with_items() {
        let cli = Cli::try_parse_from([
            "outlay", "solve", "--budget", "5000", "--item", "a=1000", "--item", "b=1500",
        ])
        .unwrap();

        let Commands::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.budget, Some(dec!(5000)));
        assert_eq!(
            args.items,
            vec![Item::new("a", dec!(1000)), Item::new("b", dec!(1500))]
        );
        assert_eq!(args.period, None);
    }

    #[test]
    fn item_names_may_contain_equals() {
        assert_eq!(
            parse_item("x=y=2.5").unwrap(),
            Item::new("x=y", dec!(2.5))
        );
        assert!(parse_item("nameless").is_err());
        assert!(parse_item("=4").is_err());
        assert!(parse_item("a=cheap").is_err());
    }

    #[test]
    fn interactive_conflicts_with_items() {
        let result = Cli::try_parse_from(["outlay", "solve", "--interactive", "--item", "a=1"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["outlay", "project", "--price", "10", "--json", "-vv"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);

        let Commands::Project(args) = cli.command else {
            panic!("expected project");
        };
        assert_eq!(args.from, 1);
        assert_eq!(args.to, 100);
    }

    #[test]
    fn explicit_config_path_is_reported() {
        let cli = Cli::try_parse_from(["outlay", "-c", "custom.toml", "config", "show"]).unwrap();
        let (path, explicit) = cli.config_path();
        assert_eq!(path, PathBuf::from("custom.toml"));
        assert!(explicit);
    }
}
