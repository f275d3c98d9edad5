//! Generators for arbitrary and concrete inputs

#[cfg(kani)]
use kani::any;
use commission_model::CommissionInput;

/// Product-line rates offered by the affiliate backend
pub const OFFERED_RATES: [f64; 3] = [18.0, 55.0, 70.0];

#[cfg(kani)]
pub fn any_input() -> CommissionInput {
    CommissionInput {
        deal_amount: any(),
        contract_rate_percent: any(),
        upline_count: any(),
    }
}

/// Offered rate, whole-dollar deal, integral upline depth
#[cfg(kani)]
pub fn any_offered_input() -> CommissionInput {
    let rate_idx: u8 = any();
    let deal_raw: u32 = any();
    let depth_raw: u8 = any();

    CommissionInput {
        deal_amount: deal_raw as f64,
        contract_rate_percent: OFFERED_RATES[(rate_idx % 3) as usize],
        upline_count: (depth_raw % 7) as f64,
    }
}

/// Hand-picked inputs covering each sanitizer branch
pub fn edge_inputs() -> [CommissionInput; 8] {
    [
        CommissionInput::new(100_000.0, 18.0, 0.0),
        CommissionInput::new(100_000.0, 18.0, 3.0),
        CommissionInput::new(100_000.0, 70.0, 6.0),
        CommissionInput::new(100_000.0, 150.0, 10.0),
        CommissionInput::new(f64::NAN, 18.0, 3.0),
        CommissionInput::new(-500.0, 18.0, 3.0),
        CommissionInput::new(0.0, f64::NEG_INFINITY, -4.0),
        CommissionInput::new(2_500.5, 55.0, 2.75),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use commission_model::{conservation_ok, is_well_formed};

    #[test]
    fn test_edge_inputs_are_well_formed() {
        for input in edge_inputs() {
            let b = input.compute();
            assert!(is_well_formed(&b), "{:?}", input);
            assert!(conservation_ok(&b), "{:?}", input);
        }
    }
}
