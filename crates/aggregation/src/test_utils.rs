//! Record builders shared by the unit tests.

use rust_decimal::Decimal;
use xswap_domain::{AssetBalance, Balance, PoolBalance, PoolEvent};

pub fn asset(id: &str, amount: Decimal) -> AssetBalance {
    AssetBalance {
        asset: id.to_string(),
        total_amount: None,
        usd_price: Decimal::ONE,
        user_balance: Balance::new(amount, amount),
    }
}

pub fn position(account: &str, pool: &str, assets: Vec<AssetBalance>, lp: Decimal) -> PoolBalance {
    PoolBalance {
        account: account.to_string(),
        address: pool.to_string(),
        assets,
        total_supply: Some(Decimal::ONE_HUNDRED),
        user_balance: Balance::new(lp, lp),
        nft_id: None,
        price_range: None,
    }
}

pub fn pool_event(
    account: &str,
    pool: &str,
    tokens: (&str, &str),
    profit_loss: (Decimal, Decimal, Decimal),
) -> PoolEvent {
    PoolEvent {
        address: account.to_string(),
        pool_address: pool.to_string(),
        token0: tokens.0.to_string(),
        token1: tokens.1.to_string(),
        profit_loss0: profit_loss.0,
        profit_loss1: profit_loss.1,
        usd_profit_loss: profit_loss.2,
        events: Vec::new(),
    }
}
