//! Turn-based combat: session state, the alternating-turn resolver, and
//! reward computation. The arena's gauge-paced resolver lives in
//! [`crate::arena`]; the two share the damage-floor and reward
//! conventions but are deliberately distinct policies.

pub mod resolver;
pub mod rewards;
pub mod session;

pub use resolver::*;
pub use rewards::*;
pub use session::*;
