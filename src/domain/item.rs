//! Catalog items before and after price projection.

use serde::{Deserialize, Serialize};

use super::money::Price;

/// A purchasable good as supplied by the caller.
///
/// `base_price` is the price at period 1. Names are opaque and need not be
/// unique, although duplicate names make rendered tables ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub base_price: Price,
}

impl Item {
    /// Create a new item.
    #[must_use]
    pub fn new(name: impl Into<String>, base_price: Price) -> Self {
        Self {
            name: name.into(),
            base_price,
        }
    }

    /// Attach the price projected for a specific period.
    #[must_use]
    pub fn priced(&self, adjusted_price: Price) -> PricedItem {
        PricedItem::new(self.name.clone(), adjusted_price)
    }
}

/// An item carrying the price for one period.
///
/// The adjusted price is only valid for the period it was projected to; a
/// new period means a new set of `PricedItem`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedItem {
    pub name: String,
    pub adjusted_price: Price,
}

impl PricedItem {
    /// Create a priced item directly.
    #[must_use]
    pub fn new(name: impl Into<String>, adjusted_price: Price) -> Self {
        Self {
            name: name.into(),
            adjusted_price,
        }
    }
}
