//! Handler for `outlay project`.

use serde_json::json;
use tabled::Tabled;

use super::command::ProjectArgs;
use super::output;
use crate::domain::money::round_currency;
use crate::domain::{schedule, Period};
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Period")]
    period: u32,
    #[tabled(rename = "Price")]
    price: String,
}

/// Execute `project`.
pub fn execute(args: &ProjectArgs, config: &Config) -> Result<()> {
    if args.from > args.to {
        return Err(Error::Input(format!(
            "--from {} is after --to {}",
            args.from, args.to
        )));
    }
    let periods = (args.from..=args.to)
        .map(Period::try_new)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let rate = args.growth_rate.unwrap_or(config.pricing.growth_rate);
    let prices = schedule(args.price, periods, rate)?;

    if output::is_json() {
        let rows: Vec<_> = prices
            .iter()
            .map(|(period, price)| json!({ "period": period, "price": price }))
            .collect();
        output::json_output(&json!({
            "base_price": args.price,
            "growth_rate": rate,
            "schedule": rows,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Base price", args.price);
    output::field("Growth rate", rate);
    output::section("Schedule");
    output::table(prices.iter().map(|(period, price)| ScheduleRow {
        period: period.get(),
        price: format!("{:.2}", round_currency(*price)),
    }));

    Ok(())
}
