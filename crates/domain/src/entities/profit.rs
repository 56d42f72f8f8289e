use crate::entities::event::PoolEvent;
use crate::error::{Result, XswapError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Profit/loss of every considered account in one pool.
///
/// Structurally a `PoolEvent` without the account and the event history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolProfit {
    pub pool_address: String,
    pub token0: String,
    pub token1: String,
    pub profit_loss0: Decimal,
    pub profit_loss1: Decimal,
    pub usd_profit_loss: Decimal,
}

impl PoolProfit {
    /// Adds the event's profit/loss figures. Identifying fields are kept.
    ///
    /// # Errors
    /// Returns `Overflow` if a sum leaves the decimal range; nothing is
    /// updated in that case.
    pub fn accumulate(&mut self, event: &PoolEvent) -> Result<()> {
        let sums = (
            self.profit_loss0.checked_add(event.profit_loss0),
            self.profit_loss1.checked_add(event.profit_loss1),
            self.usd_profit_loss.checked_add(event.usd_profit_loss),
        );
        let (Some(pl0), Some(pl1), Some(usd)) = sums else {
            return Err(XswapError::overflow(format!(
                "pool {} of account {}",
                self.pool_address, event.address
            )));
        };

        self.profit_loss0 = pl0;
        self.profit_loss1 = pl1;
        self.usd_profit_loss = usd;
        Ok(())
    }
}

impl From<&PoolEvent> for PoolProfit {
    fn from(event: &PoolEvent) -> Self {
        Self {
            pool_address: event.pool_address.clone(),
            token0: event.token0.clone(),
            token1: event.token1.clone(),
            profit_loss0: event.profit_loss0,
            profit_loss1: event.profit_loss1,
            usd_profit_loss: event.usd_profit_loss,
        }
    }
}
