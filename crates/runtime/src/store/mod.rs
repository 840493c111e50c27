//! Persistence layer for session data.
//!
//! Stores hold data that CHANGES between sessions: the live encounter
//! snapshot, the creature library, and the saved-encounter library. They
//! speak JSON values keyed by well-known string keys, so a store never
//! needs to know the shape of what it holds.

mod error;
mod file;
mod memory;
mod traits;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::SessionStore;

/// Key under which the live encounter snapshot is persisted.
pub const ENCOUNTER_KEY: &str = "rollcall_encounter";

/// Key for the creature library.
pub const CREATURE_LIBRARY_KEY: &str = "rollcall_creature_library";

/// Key for the saved-encounter library.
pub const ENCOUNTER_LIBRARY_KEY: &str = "rollcall_encounter_library";
