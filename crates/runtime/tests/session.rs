//! Session lifecycle against the in-memory and file stores.

use std::sync::Arc;

use serde_json::json;

use encounter_core::{Action, CombatantDraft};
use rollcall_runtime::{
    ENCOUNTER_KEY, FileStore, FixedClock, MemoryStore, Session, SessionStore,
};

fn fighter() -> CombatantDraft {
    CombatantDraft::named("Fighter")
        .with_initiative(18)
        .with_dex_modifier(2)
        .with_hit_points(30)
}

fn goblin() -> CombatantDraft {
    CombatantDraft::named("Goblin")
        .with_initiative(12)
        .with_dex_modifier(2)
        .with_hit_points(7)
}

#[test]
fn dispatch_save_restore_round_trip() {
    let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::new());
    let clock = Arc::new(FixedClock::at(1_000));

    let mut session = Session::new(Arc::clone(&store), clock.clone());
    session.dispatch(Action::AddCombatant(fighter()));
    session.dispatch(Action::AddCombatant(goblin()));
    session.dispatch(Action::NextTurn);
    session.save_now().unwrap();

    let restored = Session::restore(store, clock).unwrap();
    assert_eq!(restored.state().encounter_name, session.state().encounter_name);
    assert_eq!(restored.state().round, session.state().round);
    assert_eq!(restored.state().active_index, 1);
    let names: Vec<_> = restored
        .state()
        .combatants
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Fighter", "Goblin"]);
}

#[test]
fn restore_with_empty_store_starts_fresh() {
    let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::new());
    let session = Session::restore(store, Arc::new(FixedClock::default())).unwrap();

    assert!(session.state().combatants.is_empty());
    assert_eq!(session.state().round, 1);
}

#[test]
fn restore_discards_malformed_saves() {
    // Version gate missing: the stored blob must not poison the session.
    let store: Arc<dyn SessionStore> =
        Arc::new(MemoryStore::new().seed(ENCOUNTER_KEY, json!({"combatants": []})));

    let mut session = Session::restore(store, Arc::new(FixedClock::default())).unwrap();
    assert!(session.state().combatants.is_empty());

    // The fresh session is fully operable afterwards.
    session.dispatch(Action::AddCombatant(fighter()));
    assert_eq!(session.state().combatants.len(), 1);
}

#[test]
fn import_rejects_junk_and_leaves_state_alone() {
    let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::new());
    let mut session = Session::new(store, Arc::new(FixedClock::default()));
    session.dispatch(Action::AddCombatant(fighter()));

    assert!(session.import(&json!([1, 2, 3])).is_err());
    assert!(session.import(&json!({"version": null, "combatants": []})).is_err());
    assert_eq!(session.state().combatants.len(), 1);

    let exported = session.export().unwrap();
    session.import(&exported).unwrap();
    assert_eq!(session.state().combatants.len(), 1);
    assert_eq!(session.state().combatants[0].name, "Fighter");
}

#[test]
fn log_entries_carry_the_injected_clock() {
    let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::new());
    let clock = Arc::new(FixedClock::at(5_000));
    let mut session = Session::new(store, clock.clone());

    session.dispatch(Action::AddCombatant(fighter()));
    clock.advance(1_500);
    session.dispatch(Action::AddCombatant(goblin()));

    let log = &session.state().log;
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].ts.0, 5_000);
    assert_eq!(log[1].ts.0, 6_500);
}

#[test]
fn file_store_survives_process_style_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let clock: Arc<FixedClock> = Arc::new(FixedClock::at(0));

    {
        let store: Arc<dyn SessionStore> = Arc::new(FileStore::new(dir.path()).unwrap());
        let mut session = Session::new(store, clock.clone());
        session.dispatch(Action::SetEncounterName("Bridge Skirmish".to_string()));
        session.dispatch(Action::AddCombatant(fighter()));
        session.save_now().unwrap();
    }

    let store: Arc<dyn SessionStore> = Arc::new(FileStore::new(dir.path()).unwrap());
    let session = Session::restore(store, clock).unwrap();
    assert_eq!(session.state().encounter_name, "Bridge Skirmish");
    assert_eq!(session.state().combatants.len(), 1);
}
