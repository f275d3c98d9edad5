//! Typed desk errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DeskError {
    #[error("unknown product line `{0}`")]
    UnknownProduct(String),

    #[error("product line `{0}` is listed more than once")]
    DuplicateProduct(String),

    #[error("product line `{key}` has a non-finite rate")]
    InvalidRate { key: String },

    #[error("no contract rate given: pass --rate or --product")]
    NoRate,

    #[error("deal `{0}` names both a product and a rate")]
    AmbiguousRate(String),

    #[error("deal `{0}` names neither a product nor a rate")]
    MissingRate(String),

    #[error("unsupported deals file format `{0}` (expected .toml or .json)")]
    UnsupportedFormat(String),
}
