//! Batch statements: split every deal in a file and total the payouts

use anyhow::{Context, Result};
use commission_model::{compute, total_paid, CommissionBreakdown};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::Config;
use crate::error::DeskError;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DealsFile {
    pub deals: Vec<Deal>,
}

/// One closed deal as exported by the affiliate portal
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Deal {
    pub id: String,
    pub amount: f64,

    /// Product-line key; exclusive with `rate`
    #[serde(default)]
    pub product: Option<String>,

    /// Explicit contract rate in percent; exclusive with `product`
    #[serde(default)]
    pub rate: Option<f64>,

    /// Falls back to the config's `default_uplines` when absent
    #[serde(default)]
    pub uplines: Option<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DealLine {
    pub id: String,
    pub rate_percent: f64,
    pub breakdown: CommissionBreakdown,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RejectedDeal {
    pub id: String,
    pub reason: String,
}

/// Running totals per recipient class
///
/// Each breakdown is finite, but summing many near-`f64::MAX` deals is not;
/// sums saturate at `f64::MAX` instead of reaching infinity.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct Totals {
    pub deal_amount: f64,
    pub pool: f64,
    pub producer: f64,
    pub upline: f64,
    pub house: f64,
    pub recruiter: f64,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Statement {
    pub lines: Vec<DealLine>,
    pub rejected: Vec<RejectedDeal>,
    pub totals: Totals,
}

impl Totals {
    pub fn add(&mut self, b: &CommissionBreakdown) {
        self.deal_amount = saturating_add(self.deal_amount, b.deal_amount);
        self.pool = saturating_add(self.pool, b.pool);
        self.producer = saturating_add(self.producer, b.producer_pay);
        self.upline = saturating_add(self.upline, b.total_upline_pay);
        self.house = saturating_add(self.house, b.house_pay);
        self.recruiter = saturating_add(self.recruiter, b.recruiter_pay);
    }

    pub fn paid(&self) -> f64 {
        [self.upline, self.house, self.recruiter]
            .into_iter()
            .fold(self.producer, saturating_add)
    }
}

/// Add two non-negative amounts, capping at `f64::MAX`
fn saturating_add(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum.is_finite() {
        sum
    } else {
        f64::MAX
    }
}

impl Deal {
    fn rate_percent(&self, config: &Config) -> Result<f64, DeskError> {
        match (self.rate, self.product.as_deref()) {
            (Some(_), Some(_)) => Err(DeskError::AmbiguousRate(self.id.clone())),
            (None, None) => Err(DeskError::MissingRate(self.id.clone())),
            (rate, product) => config.resolve_rate(rate, product),
        }
    }
}

/// Read a deals file, picking the parser from the extension
pub fn load_deals(path: &Path) -> Result<DealsFile> {
    let contents = std::fs::read_to_string(path)
        .context(format!("Failed to read deals file: {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    parse_deals(&extension, &contents)
}

pub fn parse_deals(extension: &str, contents: &str) -> Result<DealsFile> {
    let deals = match extension {
        "toml" => toml::from_str(contents).context("Failed to parse deals TOML")?,
        "json" => serde_json::from_str(contents).context("Failed to parse deals JSON")?,
        other => return Err(DeskError::UnsupportedFormat(other.to_string()).into()),
    };
    Ok(deals)
}

/// Split every deal; deals whose rate cannot be resolved are set aside
pub fn build_statement(config: &Config, deals: &[Deal]) -> Statement {
    let mut statement = Statement::default();

    for deal in deals {
        let rate_percent = match deal.rate_percent(config) {
            Ok(rate) => rate,
            Err(e) => {
                log::warn!("Skipping deal {}: {}", deal.id, e);
                statement.rejected.push(RejectedDeal {
                    id: deal.id.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let uplines = deal.uplines.unwrap_or(config.default_uplines as f64);
        let breakdown = compute(deal.amount, rate_percent, uplines);
        log::debug!(
            "Deal {}: pool {} paid {}",
            deal.id,
            breakdown.pool,
            total_paid(&breakdown)
        );

        statement.totals.add(&breakdown);
        statement.lines.push(DealLine {
            id: deal.id.clone(),
            rate_percent,
            breakdown,
        });
    }

    statement
}
