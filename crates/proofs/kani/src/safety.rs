//! Kani safety proofs for the split invariants

use kani::any;
use commission_model::*;
use crate::{generators::*, sanitizer::*};

/// Conservation: shares account for the whole pool at every depth
#[kani::proof]
fn conservation_holds_for_every_depth() {
    let depth: u8 = any();
    kani::assume(depth <= MAX_UPLINES);

    let b = compute(100_000.0, 18.0, depth as f64);

    kani::assert((shares_sum(&b) - 1.0).abs() < SHARE_EPSILON, "shares must sum to one");
    kani::assert(b.upline_count_effective == depth, "in-range depth is used as-is");
}

/// Totality: no input produces NaN, Infinity or a negative amount
#[kani::proof]
fn any_input_yields_well_formed_breakdown() {
    let input = any_input().sanitize();
    let b = input.compute();

    kani::assert(is_well_formed(&b), "breakdown must be finite and non-negative");
}

/// Clamping: counts never exceed the chain depth, rates never exceed 100%
#[kani::proof]
fn inputs_saturate_at_bounds() {
    let input = any_input();
    let b = input.compute();

    kani::assert(b.upline_count_effective <= MAX_UPLINES, "upline count is clamped");
    kani::assert(b.rate_fraction <= 1.0, "rate is clamped");
}

/// Offered product lines conserve the pool in currency, not just in shares
#[kani::proof]
fn offered_rates_pay_out_whole_pool() {
    let b = any_offered_input().compute();

    kani::assert(conservation_ok(&b), "payouts must sum to the pool");
}
