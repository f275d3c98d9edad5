//! Split policy constants
//!
//! The five rates below always account for the whole pool:
//! PRODUCER_BASE_RATE + MAX_UPLINES * UPLINE_UNIT_RATE + HOUSE_RATE + RECRUITER_RATE == 1

/// Minimum guaranteed producer share of the pool
pub const PRODUCER_BASE_RATE: f64 = 0.69;

/// Share of the pool paid per upline position, and per empty-slot compression unit
pub const UPLINE_UNIT_RATE: f64 = 0.01;

/// Fixed organizational share, independent of upline depth
pub const HOUSE_RATE: f64 = 0.225;

/// Fixed bounty to whoever recruited the producer
pub const RECRUITER_RATE: f64 = 0.025;

/// Maximum depth of the upline chain
pub const MAX_UPLINES: u8 = 6;

/// Upper bound for a contract rate, in percent
pub const MAX_RATE_PERCENT: f64 = 100.0;

/// Tolerance used when checking that shares sum to one
pub const SHARE_EPSILON: f64 = 1e-9;

/// Producer + every upline level + house + recruiter
pub const MAX_PAYOUTS: usize = MAX_UPLINES as usize + 3;
