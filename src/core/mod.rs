//! Shared constants and tuning values.

pub mod constants;

pub use constants::*;
