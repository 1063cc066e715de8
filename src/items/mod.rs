//! Item system: definitions, catalog, bounded inventory, and equipment.

pub mod catalog;
pub mod equipment;
pub mod inventory;
pub mod types;

pub use catalog::*;
pub use equipment::*;
pub use inventory::*;
pub use types::*;
