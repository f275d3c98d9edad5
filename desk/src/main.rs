//! Commission Desk
//!
//! Operator tool that splits affiliate commission pools between producer,
//! uplines, house and recruiter, and totals batches of closed deals.

mod config;
mod error;
mod report;
mod statement;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commission_model::{compute, conservation_ok, depth_table};
use config::Config;
use report::Report;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "commission-desk")]
#[command(about = "Affiliate commission split calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to $COMMISSION_CONFIG, then commission-desk.toml)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split one deal
    Compute {
        /// Deal amount in currency units
        #[arg(short, long)]
        deal: f64,
        /// Contract rate in percent
        #[arg(short, long, conflicts_with = "product")]
        rate: Option<f64>,
        /// Product-line key from the config
        #[arg(short, long)]
        product: Option<String>,
        /// Uplines above the producer (defaults to the config value)
        #[arg(short, long)]
        uplines: Option<f64>,
        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the split for every upline depth
    Table {
        #[arg(short, long)]
        deal: f64,
        #[arg(short, long, conflicts_with = "product")]
        rate: Option<f64>,
        #[arg(short, long)]
        product: Option<String>,
    },
    /// List configured product lines
    Products,
    /// Split every deal in a TOML or JSON file and total the payouts
    Statement {
        deals: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Write the default config
    InitConfig {
        #[arg(default_value = config::DEFAULT_CONFIG_PATH)]
        path: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Cli {
        config: config_path,
        command,
    } = Cli::parse();

    // Only commands that read the catalog pay for loading it
    let load = || load_config(config_path.as_deref());

    match command {
        Commands::Compute {
            deal,
            rate,
            product,
            uplines,
            json,
        } => {
            let config = load();
            let rate = config.resolve_rate(rate, product.as_deref())?;
            let uplines = uplines.unwrap_or(config.default_uplines as f64);
            let breakdown = compute(deal, rate, uplines);

            if !conservation_ok(&breakdown) {
                log::warn!("Breakdown does not account for the whole pool: {:?}", breakdown);
            }

            if json {
                let out = serde_json::to_string_pretty(&breakdown)
                    .context("Failed to serialize breakdown")?;
                println!("{}", out);
            } else {
                print!("{}", Report::new(&config).breakdown(&breakdown));
            }
        }
        Commands::Table {
            deal,
            rate,
            product,
        } => {
            let config = load();
            let rate = config.resolve_rate(rate, product.as_deref())?;
            let rows = depth_table(deal, rate);
            print!("{}", Report::new(&config).depth_table(&rows));
        }
        Commands::Products => {
            let config = load();
            print!("{}", Report::new(&config).products(&config));
        }
        Commands::Statement { deals, json } => {
            let config = load();
            let file = statement::load_deals(&deals)?;
            log::info!("Loaded {} deals from {}", file.deals.len(), deals.display());

            let statement = statement::build_statement(&config, &file.deals);
            if !statement.rejected.is_empty() {
                log::warn!("{} deals rejected", statement.rejected.len());
            }

            if json {
                let out = serde_json::to_string_pretty(&statement)
                    .context("Failed to serialize statement")?;
                println!("{}", out);
            } else {
                print!("{}", Report::new(&config).statement(&statement));
            }
        }
        Commands::InitConfig { path } => {
            Config::write_default(&path)?;
        }
    }

    Ok(())
}

/// Explicit path, then environment, then the built-in catalog
fn load_config(path: Option<&str>) -> Config {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config ({:#}), using default catalog", e);
        Config::default_catalog()
    })
}
