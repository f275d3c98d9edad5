//! Pure commission split model
//! No I/O, no unwrap/panic, all functions total over every f64 input

pub mod constants;
pub mod math;
pub mod state;
pub mod split;
pub mod helpers;
pub mod format;

// Re-export commonly used types
pub use constants::*;
pub use state::*;
pub use split::*;
pub use helpers::*;
pub use format::{format_currency, format_percent};
