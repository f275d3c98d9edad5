//! Kani proofs for the commission split model

#![cfg_attr(kani, feature(register_tool), register_tool(kanitool))]

pub mod sanitizer;
pub mod generators;

#[cfg(kani)]
pub mod safety;
#[cfg(kani)]
pub mod minimal;
