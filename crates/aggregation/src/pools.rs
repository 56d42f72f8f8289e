//! Derivation of the known pool list.

use crate::validation::{validate_balances, validate_events};
use std::collections::HashSet;
use tracing::debug;
use xswap_domain::{Pool, Result, XswapBalances, XswapEvents};

/// Builds the list of pools referenced by balances and events.
///
/// Each pool address appears once, in discovery order: balances first
/// (accounts in map order, records in list order), then events. A pool
/// already known from balances keeps the balance-derived asset list even if
/// an event names different tokens.
///
/// # Errors
/// Returns `MalformedInput` if any record lacks a pool address or asset.
pub fn get_pools(balances: &XswapBalances, events: &XswapEvents) -> Result<Vec<Pool>> {
    validate_balances(balances)?;
    validate_events(events)?;

    let mut known: HashSet<&str> = HashSet::new();
    let mut pools = Vec::new();

    for record in balances.values().flatten() {
        if known.insert(record.address.as_str()) {
            pools.push(Pool::new(record.address.clone(), record.asset_ids()));
        }
    }

    let from_balances = pools.len();

    for event in events.values().flatten() {
        if known.insert(event.pool_address.as_str()) {
            pools.push(Pool::new(event.pool_address.clone(), event.assets()));
        }
    }

    debug!(
        from_balances,
        from_events = pools.len() - from_balances,
        "Derived known pools"
    );

    Ok(pools)
}
