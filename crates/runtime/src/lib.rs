//! Runtime orchestration for the encounter tracker.
//!
//! This crate wires the pure encounter core to the outside world: a
//! key/value session store for persistence, a clock for log timestamps, a
//! dice port for initiative rolls, and a background autosave worker that
//! debounces snapshot writes. Consumers embed [`Session`] to drive an
//! encounter and subscribe to its snapshot stream.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the live encounter session
//! - [`store`] provides the persistence adapters (memory and file backed)
//! - [`clock`] and [`dice`] are the injected time and randomness ports
//! - `workers` keeps background tasks internal to the crate
pub mod clock;
pub mod dice;
pub mod error;
pub mod session;
pub mod store;

mod workers;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dice::{DiceRoller, SeededRoller, StdRoller, roll_initiative};
pub use error::{Result, RuntimeError};
pub use session::Session;
pub use store::{
    CREATURE_LIBRARY_KEY, ENCOUNTER_KEY, ENCOUNTER_LIBRARY_KEY, FileStore, MemoryStore,
    SessionStore, StoreError,
};
pub use workers::{AutosaveConfig, spawn_autosave};
