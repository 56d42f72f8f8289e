pub mod balance;
pub mod event;
pub mod pool;
pub mod profit;

use indexmap::IndexMap;

// Re-export for easier access
pub use balance::{AssetBalance, PoolBalance};
pub use event::{LiquidityEvent, PoolEvent};
pub use pool::Pool;
pub use profit::PoolProfit;

/// Pool balances keyed by account, in the order the accounts were supplied.
pub type XswapBalances = IndexMap<String, Vec<PoolBalance>>;

/// Pool event details keyed by account, in the order the accounts were supplied.
pub type XswapEvents = IndexMap<String, Vec<PoolEvent>>;
