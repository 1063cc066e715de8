//! The menu-driven adventure game: travel between areas, trade, explore,
//! and fight in alternating turns.

pub mod controller;
pub mod state;

pub use controller::*;
pub use state::*;
