use serde::{Deserialize, Serialize};

/// A liquidity pool known to the portfolio, identified by its address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pool {
    pub address: String,
    /// Constituent asset identifiers, in pool order.
    pub assets: Vec<String>,
}

impl Pool {
    pub fn new(address: impl Into<String>, assets: Vec<String>) -> Self {
        Self {
            address: address.into(),
            assets,
        }
    }
}
