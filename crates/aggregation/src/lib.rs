//! Aggregated views over per-account liquidity pool data.
//!
//! This crate derives the views a portfolio page renders:
//! - The deduplicated list of pools an account set is exposed to
//! - Profit/loss per pool summed across accounts
//! - Pool balances, merged per pool or flattened per account
//!
//! Every function is pure. Inputs are borrowed and never mutated, and the
//! same input always yields the same output, so views can be recomputed on
//! every render without synchronization.

/// Prelude module for convenient imports.
pub mod prelude;

/// Pool balance aggregation.
pub mod balances;
/// Account filtering.
pub mod filter;
/// Pool derivation.
pub mod pools;
/// Profit/loss aggregation.
pub mod profit;
/// Portfolio totals.
pub mod summary;
/// Input validation.
pub mod validation;

pub use balances::{get_account_balances, get_balances, get_grouped_balances};
pub use filter::AccountFilter;
pub use pools::get_pools;
pub use profit::get_pool_profit;
pub use summary::PortfolioSummary;

#[cfg(test)]
pub(crate) mod test_utils;
