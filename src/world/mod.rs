//! Areas, gating requirements, and exploration events.

pub mod areas;
pub mod explore;

pub use areas::*;
pub use explore::*;
