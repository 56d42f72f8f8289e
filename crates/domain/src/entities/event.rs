//! Pool liquidity event history.

use crate::enums::LiquidityEventType;
use crate::error::{Result, XswapError};
use crate::value_objects::Balance;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single mint or burn of pool liquidity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityEvent {
    /// Transaction hash.
    pub tx_hash: String,
    /// Log index within the transaction.
    pub log_index: u32,
    /// Unix timestamp in seconds.
    pub timestamp: u64,
    /// Whether liquidity was added or removed.
    pub event_type: LiquidityEventType,
    /// LP tokens minted or burned.
    pub lp_amount: Decimal,
    /// Amount of `token0` moved.
    pub amount0: Decimal,
    /// Amount of `token1` moved.
    pub amount1: Decimal,
    /// USD price of the LP token at event time.
    pub usd_price: Decimal,
    /// LP value at event time, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Balance>,
}

/// Event details of one account in one pool, with realized profit/loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolEvent {
    /// Account the events belong to.
    pub address: String,
    /// Pool address.
    pub pool_address: String,
    /// First pool asset.
    pub token0: String,
    /// Second pool asset.
    pub token1: String,
    /// Profit/loss in `token0` units.
    pub profit_loss0: Decimal,
    /// Profit/loss in `token1` units.
    pub profit_loss1: Decimal,
    /// Profit/loss in USD.
    pub usd_profit_loss: Decimal,
    /// Mint and burn history behind the figures above.
    #[serde(default)]
    pub events: Vec<LiquidityEvent>,
}

impl PoolEvent {
    pub fn assets(&self) -> Vec<String> {
        vec![self.token0.clone(), self.token1.clone()]
    }

    /// Checks that the identifiers aggregation keys on are present.
    ///
    /// # Errors
    /// Returns `MalformedInput` for a blank pool address or token.
    pub fn validate(&self, account: &str) -> Result<()> {
        if self.pool_address.trim().is_empty() {
            return Err(XswapError::malformed(
                format!("events of account {account}"),
                "pool address is empty",
            ));
        }
        if self.token0.trim().is_empty() || self.token1.trim().is_empty() {
            return Err(XswapError::malformed(
                format!("pool {} of account {account}", self.pool_address),
                "token0 and token1 must both be set",
            ));
        }
        Ok(())
    }
}
