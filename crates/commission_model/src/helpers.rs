//! Payout ledger and invariant checking helpers

use arrayvec::ArrayVec;

use crate::constants::*;
use crate::math::*;
use crate::state::*;

/// Sum of the four payout classes
pub fn total_paid(b: &CommissionBreakdown) -> f64 {
    b.producer_pay + b.total_upline_pay + b.house_pay + b.recruiter_pay
}

/// Sum of every share of the pool the breakdown hands out
pub fn shares_sum(b: &CommissionBreakdown) -> f64 {
    b.producer_percent
        + b.upline_count_effective as f64 * UPLINE_UNIT_RATE
        + HOUSE_RATE
        + RECRUITER_RATE
}

/// Conservation - shares sum to one and every cent of the pool is paid out
pub fn conservation_ok(b: &CommissionBreakdown) -> bool {
    (shares_sum(b) - 1.0).abs() < SHARE_EPSILON && approx_eq(total_paid(b), b.pool, SHARE_EPSILON)
}

/// Every amount finite and non-negative, counts within bounds
pub fn is_well_formed(b: &CommissionBreakdown) -> bool {
    let amounts = [
        b.deal_amount,
        b.rate_fraction,
        b.pool,
        b.producer_percent,
        b.producer_pay,
        b.upline_pay_per_person,
        b.total_upline_pay,
        b.house_pay,
        b.recruiter_pay,
        b.compression_bonus,
    ];

    amounts.iter().all(|x| x.is_finite() && *x >= 0.0)
        && b.upline_count_effective <= MAX_UPLINES
        && b.upline_count_effective.saturating_add(b.empty_upline_slots) == MAX_UPLINES
}

impl CommissionBreakdown {
    /// One payout per paid upline level, level 1 first
    pub fn upline_payouts(&self) -> ArrayVec<Payout, { MAX_UPLINES as usize }> {
        (1..=self.upline_count_effective)
            .take(MAX_UPLINES as usize)
            .map(|level| Payout {
                recipient: Recipient::Upline(level),
                share: UPLINE_UNIT_RATE,
                amount: self.upline_pay_per_person,
            })
            .collect()
    }

    /// Full ledger: producer, each upline level, house, recruiter
    pub fn payouts(&self) -> ArrayVec<Payout, MAX_PAYOUTS> {
        let mut ledger = ArrayVec::new();

        ledger.push(Payout {
            recipient: Recipient::Producer,
            share: self.producer_percent,
            amount: self.producer_pay,
        });
        for upline in self.upline_payouts() {
            ledger.push(upline);
        }
        ledger.push(Payout {
            recipient: Recipient::House,
            share: HOUSE_RATE,
            amount: self.house_pay,
        });
        ledger.push(Payout {
            recipient: Recipient::Recruiter,
            share: RECRUITER_RATE,
            amount: self.recruiter_pay,
        });

        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::compute;

    #[test]
    fn test_ledger_shape() {
        let b = compute(100_000.0, 18.0, 3.0);
        let ledger = b.payouts();

        assert_eq!(ledger.len(), 3 + 3);
        assert_eq!(ledger[0].recipient, Recipient::Producer);
        assert_eq!(ledger[1].recipient, Recipient::Upline(1));
        assert_eq!(ledger[3].recipient, Recipient::Upline(3));
        assert_eq!(ledger[4].recipient, Recipient::House);
        assert_eq!(ledger[5].recipient, Recipient::Recruiter);
    }

    #[test]
    fn test_ledger_sums_to_pool() {
        for depth in 0..=MAX_UPLINES {
            let b = compute(100_000.0, 70.0, depth as f64);
            let ledger = b.payouts();

            let amount: f64 = ledger.iter().map(|p| p.amount).sum();
            let share: f64 = ledger.iter().map(|p| p.share).sum();

            assert!(approx_eq(amount, b.pool, 1e-9));
            assert!((share - 1.0).abs() < SHARE_EPSILON);
        }
    }

    #[test]
    fn test_full_chain_fills_ledger() {
        let b = compute(1_000.0, 55.0, 6.0);
        assert_eq!(b.upline_payouts().len(), MAX_UPLINES as usize);
        assert_eq!(b.payouts().len(), MAX_PAYOUTS);
    }

    #[test]
    fn test_tampered_breakdown_fails_conservation() {
        let mut b = compute(100_000.0, 18.0, 0.0);
        assert!(conservation_ok(&b));

        b.house_pay += 1.0;
        assert!(!conservation_ok(&b));

        let mut b = compute(100_000.0, 18.0, 0.0);
        b.producer_percent = 0.69; // Forgot the compression bonus
        assert!(!conservation_ok(&b));
    }

    #[test]
    fn test_negative_amount_is_not_well_formed() {
        let mut b = compute(100_000.0, 18.0, 2.0);
        assert!(is_well_formed(&b));

        b.recruiter_pay = -1.0;
        assert!(!is_well_formed(&b));
    }
}
