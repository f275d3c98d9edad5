//! Input and breakdown types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw calculator inputs, exactly as the caller supplies them
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CommissionInput {
    pub deal_amount: f64,
    pub contract_rate_percent: f64,
    pub upline_count: f64,
}

/// Full split of one commission pool
///
/// Carries both currency amounts and the rates behind them so a caller can
/// render either without recomputing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CommissionBreakdown {
    pub deal_amount: f64,   // Sanitized
    pub rate_fraction: f64, // Sanitized, in [0, 1]
    pub pool: f64,
    pub producer_percent: f64,
    pub producer_pay: f64,
    pub upline_count_effective: u8,
    pub upline_pay_per_person: f64,
    pub total_upline_pay: f64,
    pub house_pay: f64,
    pub recruiter_pay: f64,
    pub empty_upline_slots: u8,
    pub compression_bonus: f64,
}

/// Who receives a slice of the pool
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Recipient {
    Producer,
    /// 1-based; level 1 sits directly above the producer
    Upline(u8),
    House,
    Recruiter,
}

/// One line of the payout ledger
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Payout {
    pub recipient: Recipient,
    pub share: f64, // Fraction of pool
    pub amount: f64,
}

impl CommissionInput {
    pub fn new(deal_amount: f64, contract_rate_percent: f64, upline_count: f64) -> Self {
        Self {
            deal_amount,
            contract_rate_percent,
            upline_count,
        }
    }
}

impl Recipient {
    pub fn label(&self) -> &'static str {
        match self {
            Recipient::Producer => "producer",
            Recipient::Upline(_) => "upline",
            Recipient::House => "house",
            Recipient::Recruiter => "recruiter",
        }
    }
}

impl core::fmt::Display for Recipient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Recipient::Upline(level) => write!(f, "upline {}", level),
            other => f.write_str(other.label()),
        }
    }
}
