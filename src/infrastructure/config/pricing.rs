//! Price projection settings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_GROWTH_RATE;

/// How prices evolve between periods.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingConfig {
    /// Per-period growth factor (1.035 = +3.5% per period).
    #[serde(default = "default_growth_rate")]
    pub growth_rate: Decimal,
}

fn default_growth_rate() -> Decimal {
    DEFAULT_GROWTH_RATE
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            growth_rate: default_growth_rate(),
        }
    }
}
