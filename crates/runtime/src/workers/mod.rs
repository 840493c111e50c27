//! Background tasks internal to the crate.

mod autosave;

pub use autosave::{AutosaveConfig, spawn_autosave};
