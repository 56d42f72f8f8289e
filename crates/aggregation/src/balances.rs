//! Pool balance views, merged per pool or flattened per account.

use crate::filter::AccountFilter;
use crate::validation::validate_balances;
use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, info};
use xswap_domain::{PoolBalance, Result, XswapBalances};

/// Returns the balances of the selected accounts.
///
/// With `group` set, positions in the same pool are merged into one record
/// (see [`get_grouped_balances`]); otherwise every record is returned as is
/// (see [`get_account_balances`]). An empty `addresses` slice selects every
/// account.
///
/// # Errors
/// Returns `MalformedInput` if any record lacks a pool address or asset.
pub fn get_balances(
    balances: &XswapBalances,
    addresses: &[String],
    group: bool,
) -> Result<Vec<PoolBalance>> {
    if group {
        get_grouped_balances(balances, addresses)
    } else {
        get_account_balances(balances, addresses)
    }
}

/// Returns every record of the selected accounts, unmerged.
///
/// Records keep account order, then per-account record order.
///
/// # Errors
/// Returns `MalformedInput` if any record lacks a pool address or asset.
pub fn get_account_balances(
    balances: &XswapBalances,
    addresses: &[String],
) -> Result<Vec<PoolBalance>> {
    validate_balances(balances)?;

    let filter = AccountFilter::new(addresses);
    let flat: Vec<PoolBalance> = balances
        .iter()
        .filter(|(account, _)| filter.accepts(account))
        .flat_map(|(_, records)| records.iter().cloned())
        .collect();

    info!(records = flat.len(), "Collected account balances");

    Ok(flat)
}

/// Returns one record per pool, merging every selected account's position.
///
/// The first position seen for a pool seeds the output record, with
/// `account` set to the account that held it; later positions only add to
/// `user_balance` and the asset list (see [`PoolBalance::merge`]). Pools
/// keep first-seen order. The output is built from clones, so the caller's
/// records are left untouched.
///
/// # Errors
/// Returns `MalformedInput` if any record lacks a pool address or asset, and
/// `Overflow` if a pool's sum leaves the decimal range.
pub fn get_grouped_balances(
    balances: &XswapBalances,
    addresses: &[String],
) -> Result<Vec<PoolBalance>> {
    validate_balances(balances)?;

    let filter = AccountFilter::new(addresses);
    let mut per_pool: IndexMap<&str, PoolBalance> = IndexMap::new();

    for (account, records) in balances {
        if !filter.accepts(account) {
            debug!(account = %account, "Skipping balances of unselected account");
            continue;
        }

        for record in records {
            match per_pool.entry(record.address.as_str()) {
                Entry::Occupied(mut entry) => {
                    debug!(account = %account, pool = %record.address, "Merging pool balance");
                    entry.get_mut().merge(record, account)?;
                }
                Entry::Vacant(entry) => {
                    debug!(account = %account, pool = %record.address, "Seeding pool balance");
                    let mut seed = record.clone();
                    seed.account.clone_from(account);
                    entry.insert(seed);
                }
            }
        }
    }

    info!(pools = per_pool.len(), "Grouped pool balances");

    Ok(per_pool.into_values().collect())
}
