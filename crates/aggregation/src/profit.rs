//! Profit/loss aggregation per pool.

use crate::filter::AccountFilter;
use crate::validation::validate_events;
use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, info};
use xswap_domain::{PoolProfit, Result, XswapEvents};

/// Sums profit/loss per pool across the selected accounts.
///
/// An empty `addresses` slice selects every account. The first event seen
/// for a pool fixes its tokens; later events only add to `profit_loss0`,
/// `profit_loss1` and `usd_profit_loss`. Output follows the order in which
/// pools are first seen.
///
/// # Errors
/// Returns `MalformedInput` if any event lacks a pool address or token, and
/// `Overflow` if a pool's sum leaves the decimal range.
pub fn get_pool_profit(events: &XswapEvents, addresses: &[String]) -> Result<Vec<PoolProfit>> {
    validate_events(events)?;

    let filter = AccountFilter::new(addresses);
    let mut per_pool: IndexMap<&str, PoolProfit> = IndexMap::new();

    for (account, details) in events {
        if !filter.accepts(account) {
            debug!(account = %account, "Skipping events of unselected account");
            continue;
        }

        for event in details {
            match per_pool.entry(event.pool_address.as_str()) {
                Entry::Occupied(mut entry) => entry.get_mut().accumulate(event)?,
                Entry::Vacant(entry) => {
                    entry.insert(PoolProfit::from(event));
                }
            }
        }
    }

    info!(pools = per_pool.len(), "Aggregated pool profit");

    Ok(per_pool.into_values().collect())
}
