//! Autosave worker.
//!
//! Subscribes to the session's snapshot stream and persists the latest
//! snapshot after a quiet period. Bursts of dispatches collapse into one
//! write: the debounce timer restarts on every change and only the final
//! snapshot in the burst reaches the store. Store failures are logged and
//! the worker keeps running; persistence trouble must never take the
//! session down with it.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tracing::{debug, error};

use encounter_core::EncounterDocument;

use crate::store::{ENCOUNTER_KEY, SessionStore};

#[derive(Debug, Clone)]
pub struct AutosaveConfig {
    /// Quiet period before a changed snapshot is written.
    pub debounce: Duration,

    /// Store key the snapshot is written under.
    pub key: String,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_secs(1),
            key: ENCOUNTER_KEY.to_string(),
        }
    }
}

/// Spawns the autosave loop. The task exits when the snapshot sender (the
/// session) is dropped, flushing any pending snapshot on the way out.
pub fn spawn_autosave(
    store: Arc<dyn SessionStore>,
    mut snapshots: watch::Receiver<EncounterDocument>,
    config: AutosaveConfig,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            // Wait for a change; a closed channel means the session is gone.
            if snapshots.changed().await.is_err() {
                break;
            }

            // Debounce: keep absorbing changes until the stream goes quiet.
            let mut closed = false;
            loop {
                tokio::select! {
                    _ = sleep(config.debounce) => break,
                    changed = snapshots.changed() => {
                        if changed.is_err() {
                            closed = true;
                            break;
                        }
                    }
                }
            }

            persist(store.as_ref(), &snapshots, &config);

            if closed {
                return;
            }
        }

        // Final flush for a snapshot that arrived with the close.
        persist(store.as_ref(), &snapshots, &config);
    })
}

fn persist(
    store: &dyn SessionStore,
    snapshots: &watch::Receiver<EncounterDocument>,
    config: &AutosaveConfig,
) {
    let snapshot = snapshots.borrow().clone();

    let value = match serde_json::to_value(&snapshot) {
        Ok(value) => value,
        Err(err) => {
            error!(%err, "failed to serialize autosave snapshot");
            return;
        }
    };

    match store.set(&config.key, &value) {
        Ok(()) => debug!(key = %config.key, round = snapshot.round, "autosaved encounter"),
        Err(err) => error!(%err, "autosave write failed, will retry on next change"),
    }
}
