//! Input space sanitizer - bounds values for Kani exploration

use commission_model::{CommissionInput, MAX_RATE_PERCENT, MAX_UPLINES};

/// Bounds for tractable verification
pub const MAX_DEAL: f64 = 1e9;
const MAX_RATE_SLACK: f64 = 2.0 * MAX_RATE_PERCENT;
const MAX_UPLINE_SLACK: f64 = 2.0 * MAX_UPLINES as f64;

pub trait Sanitize {
    fn sanitize(self) -> Self;
}

impl Sanitize for CommissionInput {
    /// Keep NaN/Infinity and out-of-range values (the calculator must absorb
    /// those) but cap magnitudes so the solver stays in a small box
    fn sanitize(mut self) -> CommissionInput {
        self.deal_amount = cap_magnitude(self.deal_amount, MAX_DEAL);
        self.contract_rate_percent = cap_magnitude(self.contract_rate_percent, MAX_RATE_SLACK);
        self.upline_count = cap_magnitude(self.upline_count, MAX_UPLINE_SLACK);
        self
    }
}

fn cap_magnitude(x: f64, bound: f64) -> f64 {
    if x.is_finite() {
        x.clamp(-bound, bound)
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_caps_finite_values() {
        let input = CommissionInput::new(1e300, -1e6, 1e6).sanitize();
        assert_eq!(input.deal_amount, MAX_DEAL);
        assert_eq!(input.contract_rate_percent, -200.0);
        assert_eq!(input.upline_count, 12.0);
    }

    #[test]
    fn test_sanitize_keeps_non_finite() {
        let input = CommissionInput::new(f64::NAN, f64::INFINITY, 3.0).sanitize();
        assert!(input.deal_amount.is_nan());
        assert_eq!(input.contract_rate_percent, f64::INFINITY);
        assert_eq!(input.upline_count, 3.0);
    }
}
