//! Creature library boundary for the encounter tracker.
//!
//! This crate supplies plain data records (creature definitions) and the
//! pure conversion that turns them into combatant drafts for the core. It
//! has no ordering or concurrency concerns: the core treats creatures as an
//! external collaborator and every combatant owns its own stat fields
//! independently of the creature it came from.
pub mod catalog;
pub mod convert;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{AbilityScores, Creature, CreatureCatalog, SearchFilter, default_catalog};
pub use convert::{CombatantOverrides, ability_modifier};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, LoadResult};
