use encounter_core::ImportError;

use crate::store::StoreError;

/// Runtime errors surfaced to embedders.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("failed to serialize encounter snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
