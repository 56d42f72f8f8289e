//! Account filtering shared by the profit and balance views.

use std::collections::HashSet;

/// Restricts aggregation to a set of accounts.
///
/// An empty filter accepts every account.
#[derive(Debug, Clone, Default)]
pub struct AccountFilter<'a> {
    accounts: HashSet<&'a str>,
}

impl<'a> AccountFilter<'a> {
    /// Creates a filter from the selected account addresses.
    #[must_use]
    pub fn new(addresses: &'a [String]) -> Self {
        Self {
            accounts: addresses.iter().map(String::as_str).collect(),
        }
    }

    /// Returns true if records of `account` should be aggregated.
    pub fn accepts(&self, account: &str) -> bool {
        self.accounts.is_empty() || self.accounts.contains(account)
    }
}
