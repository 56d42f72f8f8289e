//! Domain model for DEX liquidity pool tracking.
//!
//! This crate defines the records exchanged with balance and event
//! collaborators:
//! - Per-account pool balances and their constituent asset balances
//! - Per-account pool event details with profit/loss figures
//! - Derived pool and per-pool profit views
//! - The exact-decimal `Balance` value object used for every summation

/// Pool, balance, event and profit records.
pub mod entities;
/// Enumerations shared across records.
pub mod enums;
/// Error types.
pub mod error;
/// JSON snapshot loading.
pub mod snapshot;
/// Value objects.
pub mod value_objects;

pub use entities::{
    AssetBalance, LiquidityEvent, Pool, PoolBalance, PoolEvent, PoolProfit, XswapBalances,
    XswapEvents,
};
pub use enums::LiquidityEventType;
pub use error::{Result, XswapError};
pub use value_objects::Balance;
