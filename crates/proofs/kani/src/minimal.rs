//! Concrete Kani proofs - the documented scenarios, checked exactly once each

use commission_model::*;
use crate::generators::edge_inputs;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

/// Solo producer keeps the whole compression bonus
#[kani::proof]
fn solo_producer_concrete() {
    let b = compute(100_000.0, 18.0, 0.0);

    assert!(close(b.pool, 18_000.0));
    assert!(close(b.producer_pay, 13_500.0));
    assert!(close(b.house_pay, 4_050.0));
    assert!(close(b.recruiter_pay, 450.0));
}

/// Full chain leaves the producer at the base rate
#[kani::proof]
fn full_chain_concrete() {
    let b = compute(100_000.0, 70.0, 6.0);

    assert!(close(b.producer_percent, PRODUCER_BASE_RATE));
    assert!(close(b.total_upline_pay, 4_200.0));
}

/// Every edge input conserves the pool
#[kani::proof]
#[kani::unwind(9)]
fn edge_inputs_concrete() {
    for input in edge_inputs() {
        let b = input.compute();
        assert!(conservation_ok(&b));
    }
}
