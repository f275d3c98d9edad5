//! The split itself - total, deterministic, no early returns

use crate::constants::*;
use crate::math::*;
use crate::state::*;

/// Split the commission pool of one deal
///
/// Every input is sanitized independently before any arithmetic:
/// non-finite or negative deal amounts become 0, the rate is clamped to
/// [0, 100] percent and the upline count to [0, MAX_UPLINES]. There is no
/// failure path, and no NaN or Infinity can reach the result.
///
/// Amounts keep full precision; rounding for display is the caller's job.
pub fn compute(deal_amount: f64, contract_rate_percent: f64, upline_count: f64) -> CommissionBreakdown {
    let deal_amount = sanitize_deal_amount(deal_amount);
    let rate_fraction = rate_fraction(contract_rate_percent);
    let pool = deal_amount * rate_fraction;

    let upline_count_effective = clamp_upline_count(upline_count);
    let empty_upline_slots = MAX_UPLINES - upline_count_effective;

    // Unused upline slots compress down to the producer
    let compression_bonus = empty_upline_slots as f64 * UPLINE_UNIT_RATE;
    let producer_percent = PRODUCER_BASE_RATE + compression_bonus;

    let upline_pay_per_person = pool * UPLINE_UNIT_RATE;

    CommissionBreakdown {
        deal_amount,
        rate_fraction,
        pool,
        producer_percent,
        producer_pay: pool * producer_percent,
        upline_count_effective,
        upline_pay_per_person,
        total_upline_pay: upline_pay_per_person * upline_count_effective as f64,
        house_pay: pool * HOUSE_RATE,
        recruiter_pay: pool * RECRUITER_RATE,
        empty_upline_slots,
        compression_bonus,
    }
}

impl CommissionInput {
    pub fn compute(&self) -> CommissionBreakdown {
        compute(self.deal_amount, self.contract_rate_percent, self.upline_count)
    }
}

/// Breakdown for every upline depth 0..=MAX_UPLINES with the same deal and rate
pub fn depth_table(deal_amount: f64, contract_rate_percent: f64) -> [CommissionBreakdown; MAX_UPLINES as usize + 1] {
    let mut table = [CommissionBreakdown::default(); MAX_UPLINES as usize + 1];
    for (depth, row) in table.iter_mut().enumerate() {
        *row = compute(deal_amount, contract_rate_percent, depth as f64);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_solo_producer_icc_logistics() {
        let b = compute(100_000.0, 18.0, 0.0);

        assert_close(b.pool, 18_000.0);
        assert_close(b.producer_percent, 0.75);
        assert_close(b.producer_pay, 13_500.0);
        assert_close(b.total_upline_pay, 0.0);
        assert_close(b.house_pay, 4_050.0);
        assert_close(b.recruiter_pay, 450.0);
        assert_close(total_paid(&b), 18_000.0);
        assert_eq!(b.empty_upline_slots, 6);
        assert_close(b.compression_bonus, 0.06);
    }

    #[test]
    fn test_three_uplines_icc_logistics() {
        let b = compute(100_000.0, 18.0, 3.0);

        assert_close(b.pool, 18_000.0);
        assert_close(b.producer_percent, 0.72);
        assert_close(b.producer_pay, 12_960.0);
        assert_close(b.upline_pay_per_person, 180.0);
        assert_close(b.total_upline_pay, 540.0);
        assert_close(b.house_pay, 4_050.0);
        assert_close(b.recruiter_pay, 450.0);
        assert_close(total_paid(&b), 18_000.0);
        assert_eq!(b.upline_count_effective, 3);
        assert_eq!(b.empty_upline_slots, 3);
    }

    #[test]
    fn test_full_chain_private_reinsurance() {
        let b = compute(100_000.0, 70.0, 6.0);

        assert_close(b.pool, 70_000.0);
        assert_close(b.producer_percent, 0.69);
        assert_close(b.producer_pay, 48_300.0);
        assert_close(b.total_upline_pay, 4_200.0);
        assert_close(b.house_pay, 15_750.0);
        assert_close(b.recruiter_pay, 1_750.0);
        assert_close(total_paid(&b), 70_000.0);
        assert_eq!(b.empty_upline_slots, 0);
        assert_close(b.compression_bonus, 0.0);
    }

    #[test]
    fn test_out_of_range_inputs_saturate() {
        let clamped = compute(100_000.0, 150.0, 10.0);
        let max = compute(100_000.0, 100.0, 6.0);

        assert_eq!(clamped, max);
        assert_close(clamped.pool, 100_000.0);
    }

    #[test]
    fn test_non_finite_and_negative_deal() {
        for deal in [f64::NAN, -500.0, f64::INFINITY, f64::NEG_INFINITY] {
            let b = compute(deal, 18.0, 3.0);
            assert_eq!(b.pool, 0.0);
            assert_eq!(b.producer_pay, 0.0);
            assert!(is_well_formed(&b));
            assert!(conservation_ok(&b));
        }
    }

    #[test]
    fn test_non_finite_rate_and_uplines() {
        let b = compute(100_000.0, f64::NAN, f64::NAN);
        assert_eq!(b.pool, 0.0);
        assert_eq!(b.upline_count_effective, 0);
        assert!(is_well_formed(&b));
    }

    #[test]
    fn test_infinite_uplines_fill_the_chain() {
        assert_eq!(compute(100_000.0, 18.0, f64::INFINITY), compute(100_000.0, 18.0, 6.0));
        assert_eq!(compute(100_000.0, 18.0, f64::NEG_INFINITY), compute(100_000.0, 18.0, 0.0));
    }

    #[test]
    fn test_largest_deal_stays_finite() {
        let b = compute(f64::MAX, 100.0, 0.0);
        assert!(is_well_formed(&b));
    }

    #[test]
    fn test_input_compute_matches_free_function() {
        let input = CommissionInput::new(250_000.0, 55.0, 2.0);
        assert_eq!(input.compute(), compute(250_000.0, 55.0, 2.0));
    }

    #[test]
    fn test_depth_table_rows() {
        let table = depth_table(100_000.0, 18.0);

        assert_eq!(table.len(), 7);
        for (depth, row) in table.iter().enumerate() {
            assert_eq!(row.upline_count_effective as usize, depth);
            assert!(conservation_ok(row));
        }
        assert_close(table[0].producer_pay, 13_500.0);
        assert_close(table[3].producer_pay, 12_960.0);
    }
}
