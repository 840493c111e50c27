//! Deterministic encounter logic shared across runtime layers.
//!
//! `encounter-core` defines the canonical rules of the turn tracker: the
//! combatant model, the initiative ordering, the action vocabulary, and the
//! encounter state itself. All state mutation flows through
//! [`engine::EncounterEngine`], and supporting crates depend on the types
//! re-exported here.
//!
//! The engine is a pure reducer: given the same state, action, and timestamp
//! it always produces the same resulting state. Wall-clock time and
//! randomness live behind ports in the runtime crate and never inside this
//! one.
pub mod action;
pub mod config;
pub mod engine;
pub mod order;
pub mod state;

#[cfg(feature = "serde")]
pub mod document;

pub use action::{Action, CombatantPatch};
pub use config::EncounterConfig;
pub use engine::EncounterEngine;
pub use state::{
    Combatant, CombatantDraft, CombatantId, CombatantKind, Condition, EncounterState, LogEntry,
    Timestamp,
};

#[cfg(feature = "serde")]
pub use document::{DocCombatant, EncounterDocument, ImportError};
