//! Catalog input for `outlay solve`.
//!
//! A request is assembled from an optional catalog file, then command-line
//! flags, or entirely from interactive prompts.

use std::fs;
use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Input};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use super::command::SolveArgs;
use super::diagnostic::{self, ParseError};
use crate::application::plan::PlanRequest;
use crate::domain::{Item, Period};
use crate::error::{Error, Result};

const DEFAULT_BUDGET: Decimal = dec!(50000);
const DEFAULT_ITEM_COUNT: usize = 5;
const DEFAULT_ITEM_PRICE: Decimal = dec!(1000);

/// Catalog file contents. Every field is optional so flags can fill gaps.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    pub budget: Option<Decimal>,
    pub period: Option<u32>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl CatalogFile {
    /// Read a catalog, choosing the format by extension (`.json` or TOML).
    ///
    /// Parse failures are reported as diagnostics before the error returns.
    pub fn load(path: &Path) -> Result<Self> {
        let src = fs::read_to_string(path).map_err(|err| {
            Error::Input(format!("cannot read catalog {}: {err}", path.display()))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            serde_json::from_str(&src).map_err(|err| ParseError::from_json(path, &src, &err))
        } else {
            toml::from_str(&src).map_err(|err| ParseError::from_toml(path, &src, &err))
        };

        parsed.map_err(|diag| {
            let message = format!("invalid catalog {}: {}", path.display(), diag.message);
            diagnostic::report(
                diag.with_help("expected `budget`, `period` and a list of `items` with `name` and `base_price`"),
            );
            Error::Input(message)
        })
    }
}

/// Build a request from a catalog file and flags. Flags win.
pub fn from_args(args: &SolveArgs) -> Result<PlanRequest> {
    let file = match &args.input {
        Some(path) => CatalogFile::load(path)?,
        None => CatalogFile::default(),
    };
    merge(file, args)
}

fn merge(file: CatalogFile, args: &SolveArgs) -> Result<PlanRequest> {
    let items = if args.items.is_empty() {
        file.items
    } else {
        args.items.clone()
    };
    let budget = args.budget.or(file.budget).ok_or_else(|| {
        Error::Input("no budget given: pass --budget or set `budget` in the catalog".into())
    })?;
    let period = Period::try_new(args.period.or(file.period).unwrap_or(1))?;

    Ok(PlanRequest {
        items,
        budget,
        period,
    })
}

/// Prompt for budget, items and period.
pub fn prompt() -> Result<PlanRequest> {
    let theme = ColorfulTheme::default();

    let budget: Decimal = Input::with_theme(&theme)
        .with_prompt("Budget")
        .default(DEFAULT_BUDGET)
        .validate_with(|value: &Decimal| non_negative(*value))
        .interact_text()?;

    let count: usize = Input::with_theme(&theme)
        .with_prompt("Number of items")
        .default(DEFAULT_ITEM_COUNT)
        .validate_with(|value: &usize| {
            if *value >= 1 {
                Ok(())
            } else {
                Err("at least one item is required")
            }
        })
        .interact_text()?;

    let mut items = Vec::with_capacity(count);
    for n in 1..=count {
        let name: String = Input::with_theme(&theme)
            .with_prompt(format!("Item {n} name"))
            .default(format!("Item {n}"))
            .interact_text()?;
        let base_price: Decimal = Input::with_theme(&theme)
            .with_prompt(format!("Item {n} base price"))
            .default(DEFAULT_ITEM_PRICE)
            .validate_with(|value: &Decimal| non_negative(*value))
            .interact_text()?;
        items.push(Item::new(name, base_price));
    }

    let period: u32 = Input::with_theme(&theme)
        .with_prompt(format!("Period (1-{})", Period::MAX))
        .default(1)
        .validate_with(|value: &u32| {
            Period::try_new(*value)
                .map(|_| ())
                .map_err(|err| err.to_string())
        })
        .interact_text()?;

    Ok(PlanRequest {
        items,
        budget,
        period: Period::try_new(period)?,
    })
}

fn non_negative(value: Decimal) -> std::result::Result<(), &'static str> {
    if value.is_sign_negative() && !value.is_zero() {
        Err("must not be negative")
    } else {
        Ok(())
    }
}
