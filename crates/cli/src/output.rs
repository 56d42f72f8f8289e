//! Rendering of the aggregated views.

use crate::OutputFormat;
use anyhow::Result;
use prettytable::{Table, row};
use serde::Serialize;
use xswap_aggregation::PortfolioSummary;
use xswap_domain::{Pool, PoolBalance, PoolProfit};

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn render_pools(pools: &[Pool], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(pools);
    }

    let mut table = Table::new();
    table.set_titles(row!["Pool", "Assets"]);
    for pool in pools {
        table.add_row(row![pool.address, pool.assets.join(" / ")]);
    }
    Ok(table.to_string())
}

pub fn render_profit(profit: &[PoolProfit], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(profit);
    }

    let mut table = Table::new();
    table.set_titles(row!["Pool", "Token0", "PnL0", "Token1", "PnL1", "PnL USD"]);
    for p in profit {
        table.add_row(row![
            p.pool_address,
            p.token0,
            p.profit_loss0,
            p.token1,
            p.profit_loss1,
            p.usd_profit_loss
        ]);
    }
    Ok(table.to_string())
}

pub fn render_balances(balances: &[PoolBalance], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(balances);
    }

    let mut table = Table::new();
    table.set_titles(row!["Account", "Pool", "LP Amount", "USD Value", "Assets"]);
    for b in balances {
        let assets = b
            .assets
            .iter()
            .map(|a| format!("{} {}", a.user_balance.amount, a.asset))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(row![
            b.account,
            b.address,
            b.user_balance.amount,
            b.user_balance.usd_value,
            assets
        ]);
    }
    Ok(table.to_string())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryView<'a> {
    pool_count: usize,
    position_count: usize,
    total_balance: &'a xswap_domain::Balance,
    total_usd_profit_loss: rust_decimal::Decimal,
}

pub fn render_summary(summary: &PortfolioSummary, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(&SummaryView {
            pool_count: summary.pool_count,
            position_count: summary.position_count,
            total_balance: &summary.total_balance,
            total_usd_profit_loss: summary.total_usd_profit_loss,
        });
    }

    let mut table = Table::new();
    table.add_row(row!["Pools", summary.pool_count]);
    table.add_row(row!["Positions", summary.position_count]);
    table.add_row(row!["LP Amount", summary.total_balance.amount]);
    table.add_row(row!["USD Value", summary.total_balance.usd_value]);
    table.add_row(row!["PnL USD", summary.total_usd_profit_loss]);
    Ok(table.to_string())
}
