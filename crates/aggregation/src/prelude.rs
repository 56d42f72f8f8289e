//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use xswap_aggregation::prelude::*;
//! ```

// Views
pub use crate::balances::{get_account_balances, get_balances, get_grouped_balances};
pub use crate::pools::get_pools;
pub use crate::profit::get_pool_profit;

// Filtering and validation
pub use crate::filter::AccountFilter;
pub use crate::validation::{validate_balances, validate_events};

// Totals
pub use crate::summary::PortfolioSummary;

// Domain records
pub use xswap_domain::{
    AssetBalance, Balance, Pool, PoolBalance, PoolEvent, PoolProfit, XswapBalances, XswapError,
    XswapEvents,
};
