//! The live encounter session.
//!
//! A [`Session`] owns the encounter state and everything needed to drive
//! it: the injected clock for log timestamps, the store it restores from
//! and saves to, and a watch channel carrying a snapshot of the state after
//! every dispatch. The autosave worker subscribes to that channel; nothing
//! in here blocks on disk.

use std::sync::Arc;

use tokio::sync::watch;

use encounter_core::{Action, EncounterDocument, EncounterEngine, EncounterState};

use crate::clock::Clock;
use crate::error::Result;
use crate::store::{ENCOUNTER_KEY, SessionStore};

pub struct Session {
    state: EncounterState,
    clock: Arc<dyn Clock>,
    store: Arc<dyn SessionStore>,
    snapshots: watch::Sender<EncounterDocument>,
}

impl Session {
    /// Starts a fresh session with an empty encounter.
    pub fn new(store: Arc<dyn SessionStore>, clock: Arc<dyn Clock>) -> Self {
        let state = EncounterState::new();
        let (snapshots, _) = watch::channel(EncounterDocument::from_state(&state));
        Self {
            state,
            clock,
            store,
            snapshots,
        }
    }

    /// Starts a session from whatever the store holds under the encounter
    /// key. A missing entry starts fresh; a malformed one is logged and
    /// discarded rather than propagated, so a bad save never locks the
    /// user out of their tracker.
    pub fn restore(store: Arc<dyn SessionStore>, clock: Arc<dyn Clock>) -> Result<Self> {
        let mut session = Self::new(Arc::clone(&store), clock);

        match store.get(ENCOUNTER_KEY)? {
            None => {}
            Some(value) => match EncounterDocument::from_value(&value) {
                Ok(doc) => session.dispatch(Action::Import(doc)),
                Err(err) => {
                    tracing::warn!(%err, "stored encounter is unreadable, starting fresh");
                }
            },
        }

        Ok(session)
    }

    pub fn state(&self) -> &EncounterState {
        &self.state
    }

    /// Applies one action at the clock's current instant and publishes the
    /// resulting snapshot.
    pub fn dispatch(&mut self, action: Action) {
        let now = self.clock.now();
        EncounterEngine::new(&mut self.state).apply(action, now);
        self.snapshots
            .send_replace(EncounterDocument::from_state(&self.state));
    }

    /// Validates an untrusted JSON document and, if it passes, replaces the
    /// live encounter with it. On failure the live state is untouched.
    pub fn import(&mut self, value: &serde_json::Value) -> Result<()> {
        let doc = EncounterDocument::from_value(value)?;
        self.dispatch(Action::Import(doc));
        Ok(())
    }

    /// Current encounter in wire shape, ready to hand to an export file or
    /// the store.
    pub fn export(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(EncounterDocument::from_state(
            &self.state,
        ))?)
    }

    /// Writes the current snapshot to the store immediately, bypassing the
    /// autosave debounce. Used on shutdown.
    pub fn save_now(&self) -> Result<()> {
        let value = self.export()?;
        self.store.set(ENCOUNTER_KEY, &value)?;
        Ok(())
    }

    /// Snapshot stream for the autosave worker (or any other observer).
    /// The receiver always starts with the current snapshot.
    pub fn subscribe(&self) -> watch::Receiver<EncounterDocument> {
        self.snapshots.subscribe()
    }
}
