//! The gladiator arena: a single fighter climbing a fixed opponent
//! ladder with gauge-paced real-time combat.

pub mod combat;
pub mod game;
pub mod state;

pub use combat::*;
pub use game::*;
pub use state::*;
