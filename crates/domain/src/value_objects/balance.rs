use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount of some asset together with its USD valuation.
///
/// Addition is component-wise and exact, so summing balances across
/// accounts never accumulates floating point drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub amount: Decimal,
    pub usd_value: Decimal,
}

impl Balance {
    pub const ZERO: Self = Self {
        amount: Decimal::ZERO,
        usd_value: Decimal::ZERO,
    };

    pub fn new(amount: Decimal, usd_value: Decimal) -> Self {
        Self { amount, usd_value }
    }

    /// Component-wise sum, or `None` if either component overflows.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self {
            amount: self.amount.checked_add(rhs.amount)?,
            usd_value: self.usd_value.checked_add(rhs.usd_value)?,
        })
    }
}
