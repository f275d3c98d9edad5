//! Plain-text rendering of breakdowns, depth tables and statements

use commission_model::format::{format_currency_with, format_percent};
use commission_model::{CommissionBreakdown, MAX_UPLINES};
use std::fmt;

use crate::config::Config;
use crate::statement::Statement;

/// Renders with the configured currency symbol; each method returns a
/// `Display` view so output goes straight to `print!` or `to_string`
pub struct Report<'a> {
    symbol: &'a str,
}

pub struct BreakdownView<'a> {
    symbol: &'a str,
    breakdown: &'a CommissionBreakdown,
}

pub struct DepthTableView<'a> {
    symbol: &'a str,
    rows: &'a [CommissionBreakdown],
}

pub struct ProductsView<'a> {
    config: &'a Config,
}

pub struct StatementView<'a> {
    symbol: &'a str,
    statement: &'a Statement,
}

impl<'a> Report<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            symbol: &config.currency_symbol,
        }
    }

    pub fn breakdown<'r>(&self, breakdown: &'r CommissionBreakdown) -> BreakdownView<'r>
    where
        'a: 'r,
    {
        BreakdownView {
            symbol: self.symbol,
            breakdown,
        }
    }

    pub fn depth_table<'r>(&self, rows: &'r [CommissionBreakdown]) -> DepthTableView<'r>
    where
        'a: 'r,
    {
        DepthTableView {
            symbol: self.symbol,
            rows,
        }
    }

    pub fn products<'r>(&self, config: &'r Config) -> ProductsView<'r> {
        ProductsView { config }
    }

    pub fn statement<'r>(&self, statement: &'r Statement) -> StatementView<'r>
    where
        'a: 'r,
    {
        StatementView {
            symbol: self.symbol,
            statement,
        }
    }
}

impl fmt::Display for BreakdownView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.breakdown;
        let money = |amount| format_currency_with(self.symbol, amount);

        writeln!(f, "Deal amount      {:>14}", money(b.deal_amount))?;
        writeln!(f, "Contract rate    {:>14}", format_percent(b.rate_fraction))?;
        writeln!(f, "Commission pool  {:>14}", money(b.pool))?;
        writeln!(
            f,
            "Uplines          {:>14}",
            format!("{} of {}", b.upline_count_effective, MAX_UPLINES)
        )?;
        writeln!(f)?;

        for payout in b.payouts() {
            writeln!(
                f,
                "{:<16} {:>7} {:>14}",
                payout.recipient.to_string(),
                format_percent(payout.share),
                money(payout.amount)
            )?;
        }

        if b.empty_upline_slots > 0 {
            writeln!(f)?;
            writeln!(
                f,
                "Compression bonus {} ({} empty upline slots) paid to producer",
                format_percent(b.compression_bonus),
                b.empty_upline_slots
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for DepthTableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let money = |amount| format_currency_with(self.symbol, amount);

        writeln!(
            f,
            "{:>7} {:>9} {:>14} {:>12} {:>14} {:>12} {:>12}",
            "uplines", "producer", "producer pay", "per upline", "upline total", "house", "recruiter"
        )?;
        for b in self.rows {
            writeln!(
                f,
                "{:>7} {:>9} {:>14} {:>12} {:>14} {:>12} {:>12}",
                b.upline_count_effective,
                format_percent(b.producer_percent),
                money(b.producer_pay),
                money(b.upline_pay_per_person),
                money(b.total_upline_pay),
                money(b.house_pay),
                money(b.recruiter_pay)
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for ProductsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for product in &self.config.products {
            writeln!(
                f,
                "{:<24} {:<24} {:>6}",
                product.key,
                product.label,
                format_percent(product.rate_percent / 100.0)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for StatementView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let money = |amount| format_currency_with(self.symbol, amount);

        writeln!(
            f,
            "{:<12} {:>6} {:>7} {:>14} {:>14} {:>12} {:>12} {:>12}",
            "deal", "rate", "uplines", "pool", "producer", "uplines", "house", "recruiter"
        )?;
        for line in &self.statement.lines {
            let b = &line.breakdown;
            writeln!(
                f,
                "{:<12} {:>6} {:>7} {:>14} {:>14} {:>12} {:>12} {:>12}",
                line.id,
                format_percent(b.rate_fraction),
                b.upline_count_effective,
                money(b.pool),
                money(b.producer_pay),
                money(b.total_upline_pay),
                money(b.house_pay),
                money(b.recruiter_pay)
            )?;
        }

        let t = &self.statement.totals;
        writeln!(
            f,
            "{:<12} {:>6} {:>7} {:>14} {:>14} {:>12} {:>12} {:>12}",
            "TOTAL",
            "",
            "",
            money(t.pool),
            money(t.producer),
            money(t.upline),
            money(t.house),
            money(t.recruiter)
        )?;

        for rejected in &self.statement.rejected {
            writeln!(f, "rejected {}: {}", rejected.id, rejected.reason)?;
        }

        Ok(())
    }
}
