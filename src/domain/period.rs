//! Discrete time steps at which prices are evaluated.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A validated period in `[Period::FIRST, Period::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Period(u32);

impl Period {
    /// First period; prices equal their base price.
    pub const FIRST: Self = Self(1);

    /// Largest selectable period.
    pub const MAX: u32 = 100;

    /// Validate a raw period number.
    pub fn try_new(value: u32) -> Result<Self, DomainError> {
        if (1..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidPeriod {
                period: value,
                max: Self::MAX,
            })
        }
    }

    /// The period number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Number of compounding steps since period 1.
    #[must_use]
    pub const fn elapsed(self) -> u32 {
        self.0 - 1
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u32> for Period {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Period> for u32 {
    fn from(period: Period) -> Self {
        period.0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
