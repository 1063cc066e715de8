//! Player state and derived combat stats.

pub mod player;
pub mod stats;

pub use player::*;
pub use stats::*;
