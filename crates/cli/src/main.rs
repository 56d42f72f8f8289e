//! Command Line Interface for liquidity pool portfolio views.
//!
//! Reads balance and event snapshots produced by the fetching services and
//! prints the derived pool, profit and balance views.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use xswap_aggregation::prelude::*;
use xswap_domain::snapshot;

mod output;

#[derive(Parser, Debug)]
#[command(name = "xswap")]
#[command(about = "DEX liquidity pool balances and profit/loss", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every pool referenced by balances or events
    Pools {
        /// Balances snapshot (JSON object of account -> pool balances)
        #[arg(long, env = "XSWAP_BALANCES_FILE")]
        balances: Option<PathBuf>,

        /// Events snapshot (JSON object of account -> pool event details)
        #[arg(long, env = "XSWAP_EVENTS_FILE")]
        events: Option<PathBuf>,
    },
    /// Show profit/loss per pool
    Profit {
        /// Events snapshot (JSON object of account -> pool event details)
        #[arg(long, env = "XSWAP_EVENTS_FILE")]
        events: PathBuf,

        /// Only include these accounts (repeatable)
        #[arg(short, long = "address")]
        addresses: Vec<String>,
    },
    /// Show pool balances
    Balances {
        /// Balances snapshot (JSON object of account -> pool balances)
        #[arg(long, env = "XSWAP_BALANCES_FILE")]
        balances: PathBuf,

        /// Only include these accounts (repeatable)
        #[arg(short, long = "address")]
        addresses: Vec<String>,

        /// List one record per account and pool instead of merging per pool
        #[arg(long)]
        ungrouped: bool,
    },
    /// Show portfolio totals
    Summary {
        /// Balances snapshot (JSON object of account -> pool balances)
        #[arg(long, env = "XSWAP_BALANCES_FILE")]
        balances: PathBuf,

        /// Events snapshot (JSON object of account -> pool event details)
        #[arg(long, env = "XSWAP_EVENTS_FILE")]
        events: PathBuf,

        /// Only include these accounts (repeatable)
        #[arg(short, long = "address")]
        addresses: Vec<String>,
    },
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let rendered = run(&cli)?;
    println!("{rendered}");

    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Pools { balances, events } => {
            let balances = match balances {
                Some(path) => load_balances(path)?,
                None => XswapBalances::new(),
            };
            let events = match events {
                Some(path) => load_events(path)?,
                None => XswapEvents::new(),
            };

            let pools = get_pools(&balances, &events)?;
            info!(pools = pools.len(), "Derived pools");
            output::render_pools(&pools, cli.format)
        }
        Commands::Profit { events, addresses } => {
            let events = load_events(events)?;
            let profit = get_pool_profit(&events, addresses)?;
            output::render_profit(&profit, cli.format)
        }
        Commands::Balances {
            balances,
            addresses,
            ungrouped,
        } => {
            let balances = load_balances(balances)?;
            let view = get_balances(&balances, addresses, !ungrouped)?;
            output::render_balances(&view, cli.format)
        }
        Commands::Summary {
            balances,
            events,
            addresses,
        } => {
            let balances = load_balances(balances)?;
            let events = load_events(events)?;

            let grouped = get_grouped_balances(&balances, addresses)?;
            let profit = get_pool_profit(&events, addresses)?;
            let summary = PortfolioSummary::from_views(&grouped, &profit)?;
            output::render_summary(&summary, cli.format)
        }
    }
}

fn load_balances(path: &Path) -> Result<XswapBalances> {
    let balances = snapshot::read_balances(path)
        .with_context(|| format!("loading balances from {}", path.display()))?;
    info!(accounts = balances.len(), path = %path.display(), "Loaded balances snapshot");
    Ok(balances)
}

fn load_events(path: &Path) -> Result<XswapEvents> {
    let events = snapshot::read_events(path)
        .with_context(|| format!("loading events from {}", path.display()))?;
    info!(accounts = events.len(), path = %path.display(), "Loaded events snapshot");
    Ok(events)
}
