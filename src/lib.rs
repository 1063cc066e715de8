//! Arcania: two small turn-based RPGs sharing one item catalog and
//! bestiary.
//!
//! The [`adventure`] module is a menu-driven quest: travel between
//! areas, trade at the hub, explore the wilds, and fight monsters in
//! alternating turns. The [`arena`] module is a gladiator ladder where
//! both combatants act on filling action gauges driven by real elapsed
//! time.
//!
//! Both games are headless state machines. A frontend owns a
//! [`adventure::Game`] or [`arena::ArenaGame`], feeds it player intents
//! (and, for the arena, elapsed time via [`arena::ArenaGame::advance`]),
//! and renders the returned event lists. Saves go through the
//! [`save::SaveStore`] trait; [`save::FileStore`] persists them as JSON
//! under the user's home directory.

pub mod adventure;
pub mod arena;
pub mod character;
pub mod combat;
pub mod core;
pub mod items;
pub mod monsters;
pub mod save;
pub mod world;
