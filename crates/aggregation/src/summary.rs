//! Portfolio totals over aggregated views.

use rust_decimal::Decimal;
use xswap_domain::{Balance, PoolBalance, PoolProfit, Result, XswapError};

/// Totals across every pool of a balance and profit view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioSummary {
    /// Distinct pools with a balance.
    pub pool_count: usize,
    /// Balance records that contributed.
    pub position_count: usize,
    /// Sum of the LP token balances.
    pub total_balance: Balance,
    /// Sum of realized USD profit/loss.
    pub total_usd_profit_loss: Decimal,
}

impl PortfolioSummary {
    /// Summarizes a balance view and a profit view.
    ///
    /// Works on grouped and ungrouped balances alike; pools are counted by
    /// distinct address.
    ///
    /// # Errors
    /// Returns `Overflow` if a portfolio total leaves the decimal range.
    pub fn from_views(balances: &[PoolBalance], profit: &[PoolProfit]) -> Result<Self> {
        let mut pools: Vec<&str> = balances.iter().map(|b| b.address.as_str()).collect();
        pools.sort_unstable();
        pools.dedup();

        let total_balance = balances
            .iter()
            .try_fold(Balance::ZERO, |acc, b| acc.checked_add(b.user_balance))
            .ok_or_else(|| XswapError::overflow("portfolio balance total"))?;
        let total_usd_profit_loss = profit
            .iter()
            .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.usd_profit_loss))
            .ok_or_else(|| XswapError::overflow("portfolio profit/loss total"))?;

        Ok(Self {
            pool_count: pools.len(),
            position_count: balances.len(),
            total_balance,
            total_usd_profit_loss,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{asset, pool_event, position};
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_counts_distinct_pools() {
        let balances = vec![
            position("0xa", "P1", vec![asset("A", dec!(1))], dec!(2)),
            position("0xb", "P1", vec![asset("A", dec!(1))], dec!(3)),
            position("0xb", "P2", vec![asset("B", dec!(1))], dec!(4.5)),
        ];
        let profit = vec![
            PoolProfit::from(&pool_event("0xa", "P1", ("A", "B"), (dec!(0), dec!(0), dec!(10)))),
            PoolProfit::from(&pool_event("0xa", "P2", ("B", "C"), (dec!(0), dec!(0), dec!(-2.5)))),
        ];

        let summary = PortfolioSummary::from_views(&balances, &profit).unwrap();
        assert_eq!(summary.pool_count, 2);
        assert_eq!(summary.position_count, 3);
        assert_eq!(summary.total_balance, Balance::new(dec!(9.5), dec!(9.5)));
        assert_eq!(summary.total_usd_profit_loss, dec!(7.5));
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(
            PortfolioSummary::from_views(&[], &[]).unwrap(),
            PortfolioSummary::default()
        );
    }

    #[test]
    fn test_summary_overflow_is_an_error() {
        let large = dec!(50000000000000000000000000000);
        let balances = vec![
            position("0xa", "P1", Vec::new(), large),
            position("0xa", "P2", Vec::new(), large),
        ];

        let err = PortfolioSummary::from_views(&balances, &[]).unwrap_err();
        assert_eq!(err.to_string(), "Sum overflows in portfolio balance total");
    }
}
