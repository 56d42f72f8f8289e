//! Fail-fast checks run before any aggregation.

use xswap_domain::{Result, XswapBalances, XswapEvents};

/// Validates every balance record of every account.
///
/// # Errors
/// Returns the first `MalformedInput` found, in account order.
pub fn validate_balances(balances: &XswapBalances) -> Result<()> {
    balances
        .iter()
        .try_for_each(|(account, records)| records.iter().try_for_each(|r| r.validate(account)))
}

/// Validates every event record of every account.
///
/// # Errors
/// Returns the first `MalformedInput` found, in account order.
pub fn validate_events(events: &XswapEvents) -> Result<()> {
    events
        .iter()
        .try_for_each(|(account, records)| records.iter().try_for_each(|r| r.validate(account)))
}
