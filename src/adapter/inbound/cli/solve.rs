//! Handler for `outlay solve`.

use rust_decimal::Decimal;
use tabled::Tabled;

use super::command::SolveArgs;
use super::{input, output};
use crate::application::plan::{Plan, PlanRequest};
use crate::domain::money::round_currency;
use crate::domain::{AllocationResult, AllocationStatus};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::solver::build_planner;

#[derive(Tabled)]
struct PriceRow {
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Base price")]
    base_price: String,
    #[tabled(rename = "Adjusted price")]
    adjusted_price: String,
}

#[derive(Tabled)]
struct AllocationRow {
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Quantity")]
    quantity: u64,
    #[tabled(rename = "Subtotal")]
    subtotal: String,
}

/// Execute `solve`.
pub fn execute(args: &SolveArgs, config: &Config) -> Result<()> {
    let request = if args.interactive {
        if output::is_json() {
            return Err(ConfigError::InvalidValue {
                field: "json",
                reason: "`--interactive` prompts on the terminal; pass --input or --item instead"
                    .to_string(),
            }
            .into());
        }
        input::prompt()?
    } else {
        input::from_args(args)?
    };

    let mut config = config.clone();
    if let Some(rate) = args.growth_rate {
        config.pricing.growth_rate = rate;
    }
    let planner = build_planner(&config)?;

    let pb = output::spinner("Allocating budget");
    let plan = match planner.plan(&request) {
        Ok(plan) => {
            output::spinner_success(&pb, "Allocation finished");
            plan
        }
        Err(err) => {
            output::spinner_fail(&pb, "Allocation failed");
            return Err(err);
        }
    };

    if output::is_json() {
        output::json_output(&serde_json::to_value(&plan)?);
        return Ok(());
    }

    render(&request, &plan);
    Ok(())
}

fn render(request: &PlanRequest, plan: &Plan) {
    let allocation = &plan.allocation;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Period", plan.period);
    output::field("Growth rate", plan.growth_rate);

    output::section(&format!("Prices at period {}", plan.period));
    output::table(request.items.iter().zip(&allocation.items).map(|(item, priced)| PriceRow {
        name: item.name.clone(),
        base_price: money(item.base_price),
        adjusted_price: money(priced.adjusted_price),
    }));

    output::section("Allocation");
    output::field("Status", output::highlight(allocation.status));
    if allocation.status == AllocationStatus::Unbounded {
        output::warning("a zero-price item can be bought without limit; no allocation made");
        return;
    }

    output::table(allocation.lines().map(|line| AllocationRow {
        name: line.name.to_string(),
        price: money(line.adjusted_price),
        quantity: line.quantity,
        subtotal: money(line.subtotal),
    }));

    output::field("Budget", money(allocation.budget));
    output::field("Total spend", money(allocation.total_spend));
    output::field("Leftover", money(allocation.leftover));
    output::field("Solver", output::muted(&allocation.solver));

    summarize(allocation);
}

fn summarize(allocation: &AllocationResult) {
    match allocation.status {
        AllocationStatus::NotSolved => output::warning(&format!(
            "time limit reached; best spend is within {} of the bound {}",
            percent(allocation.gap),
            money(allocation.best_bound)
        )),
        AllocationStatus::Infeasible => output::warning("no feasible allocation exists"),
        AllocationStatus::Optimal | AllocationStatus::Unbounded => {}
    }

    if let (true, Some(min_price)) = (allocation.exhausted, allocation.min_price) {
        output::note(&format!(
            "leftover {} is below the cheapest price {}",
            money(allocation.leftover),
            money(min_price)
        ));
    }
}

/// Two fraction digits, the currency scale.
fn money(value: Decimal) -> String {
    format!("{:.2}", round_currency(value))
}

fn percent(ratio: Decimal) -> String {
    format!("{:.2}%", round_currency(ratio * Decimal::ONE_HUNDRED))
}
