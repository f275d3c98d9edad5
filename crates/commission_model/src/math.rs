//! Input sanitizers - no NaN escapes, no panics, saturate instead of reject

use crate::constants::{MAX_RATE_PERCENT, MAX_UPLINES};

/// Replace NaN and +/-Infinity with 0
pub fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}

/// Deal amount: non-finite or negative becomes 0
pub fn sanitize_deal_amount(deal_amount: f64) -> f64 {
    finite_or_zero(deal_amount).max(0.0)
}

/// Contract rate in percent, clamped to [0, 100] and returned as a fraction
pub fn rate_fraction(contract_rate_percent: f64) -> f64 {
    finite_or_zero(contract_rate_percent).clamp(0.0, MAX_RATE_PERCENT) / 100.0
}

/// Upline count clamped to [0, MAX_UPLINES]
///
/// Fractional counts are truncated toward zero after clamping, so 2.9 uplines
/// pays two of them. Infinities saturate like any other out-of-range count;
/// only NaN, which has no side to saturate to, becomes 0.
pub fn clamp_upline_count(upline_count: f64) -> u8 {
    if upline_count.is_nan() {
        return 0;
    }
    let clamped = upline_count.clamp(0.0, MAX_UPLINES as f64);
    // Safe: clamped lies in [0, MAX_UPLINES]
    clamped.trunc() as u8
}

/// Relative closeness check used by the conservation helpers
pub fn approx_eq(a: f64, b: f64, rel: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= rel * scale
}
