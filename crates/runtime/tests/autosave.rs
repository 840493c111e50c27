//! Autosave worker behavior: debounce coalescing and failure tolerance.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;
use tokio::time::{Duration, sleep};

use encounter_core::{Action, CombatantDraft};
use rollcall_runtime::{
    AutosaveConfig, ENCOUNTER_KEY, FixedClock, MemoryStore, Session, SessionStore, StoreError,
    spawn_autosave,
};

/// Store wrapper that counts writes and can be told to fail them.
struct CountingStore {
    inner: MemoryStore,
    writes: AtomicUsize,
    failures_left: AtomicUsize,
}

impl CountingStore {
    fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            writes: AtomicUsize::new(0),
            failures_left: AtomicUsize::new(0),
        }
    }

    fn fail_next(&self, count: usize) {
        self.failures_left.store(count, Ordering::SeqCst);
    }

    fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl SessionStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        if self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(StoreError::Serialization("injected failure".to_string()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key)
    }
}

fn debounce(ms: u64) -> AutosaveConfig {
    AutosaveConfig {
        debounce: Duration::from_millis(ms),
        ..AutosaveConfig::default()
    }
}

#[tokio::test]
async fn burst_of_dispatches_coalesces_into_one_write() {
    let store = Arc::new(CountingStore::new());
    let mut session = Session::new(store.clone(), Arc::new(FixedClock::default()));
    let worker = spawn_autosave(store.clone(), session.subscribe(), debounce(50));

    for i in 0..10 {
        session.dispatch(Action::AddCombatant(
            CombatantDraft::named(format!("Goblin {i}")).with_initiative(i),
        ));
    }

    sleep(Duration::from_millis(300)).await;
    assert_eq!(store.write_count(), 1);

    // The write that landed is the last snapshot of the burst.
    let saved = store.get(ENCOUNTER_KEY).unwrap().unwrap();
    assert_eq!(saved["combatants"].as_array().unwrap().len(), 10);

    drop(session);
    worker.await.unwrap();
}

#[tokio::test]
async fn separate_quiet_periods_write_separately() {
    let store = Arc::new(CountingStore::new());
    let mut session = Session::new(store.clone(), Arc::new(FixedClock::default()));
    let worker = spawn_autosave(store.clone(), session.subscribe(), debounce(30));

    session.dispatch(Action::SetEncounterName("First".to_string()));
    sleep(Duration::from_millis(200)).await;

    session.dispatch(Action::SetEncounterName("Second".to_string()));
    sleep(Duration::from_millis(200)).await;

    assert_eq!(store.write_count(), 2);
    let saved = store.get(ENCOUNTER_KEY).unwrap().unwrap();
    assert_eq!(saved["encounterName"], "Second");

    drop(session);
    worker.await.unwrap();
}

#[tokio::test]
async fn store_failures_do_not_kill_the_worker() {
    let store = Arc::new(CountingStore::new());
    let mut session = Session::new(store.clone(), Arc::new(FixedClock::default()));
    let worker = spawn_autosave(store.clone(), session.subscribe(), debounce(30));

    store.fail_next(1);
    session.dispatch(Action::SetEncounterName("Lost".to_string()));
    sleep(Duration::from_millis(200)).await;
    assert_eq!(store.write_count(), 0);

    // Next change still gets persisted by the same worker.
    session.dispatch(Action::SetEncounterName("Found".to_string()));
    sleep(Duration::from_millis(200)).await;
    assert!(store.write_count() >= 1);
    let saved = store.get(ENCOUNTER_KEY).unwrap().unwrap();
    assert_eq!(saved["encounterName"], "Found");

    drop(session);
    worker.await.unwrap();
}

#[tokio::test]
async fn worker_exits_when_the_session_is_dropped() {
    let store = Arc::new(CountingStore::new());
    let session = Session::new(store.clone(), Arc::new(FixedClock::default()));
    let worker = spawn_autosave(store.clone(), session.subscribe(), debounce(30));

    drop(session);
    tokio::time::timeout(Duration::from_secs(2), worker)
        .await
        .expect("worker should exit once the snapshot stream closes")
        .unwrap();
}
