//! Small end-to-end demo: build an encounter from the creature library,
//! roll initiative, run a couple of rounds, and autosave to a temp dir.
//!
//! Run with: cargo run -p rollcall-runtime --example skirmish

use std::sync::Arc;

use encounter_core::{Action, CombatantDraft};
use encounter_content::{CombatantOverrides, ability_modifier, default_catalog};
use rollcall_runtime::{
    AutosaveConfig, FileStore, SeededRoller, Session, SessionStore, SystemClock, roll_initiative,
    spawn_autosave,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rollcall_runtime=debug".into()),
        )
        .init();

    let dir = tempfile::tempdir()?;
    let store: Arc<dyn SessionStore> = Arc::new(FileStore::new(dir.path())?);
    let mut session = Session::restore(Arc::clone(&store), Arc::new(SystemClock))?;
    let autosave = spawn_autosave(
        Arc::clone(&store),
        session.subscribe(),
        AutosaveConfig::default(),
    );

    session.dispatch(Action::SetEncounterName("Bridge Skirmish".to_string()));

    let mut roller = SeededRoller::new(2024);
    let catalog = default_catalog();

    // Party member entered by hand.
    session.dispatch(Action::AddCombatant(
        CombatantDraft::named("Yara")
            .with_initiative(roll_initiative(&mut roller, 2))
            .with_dex_modifier(2)
            .with_hit_points(28)
            .with_armor_class(16),
    ));

    // Opposition pulled from the library.
    for creature_id in ["goblin_basic", "goblin_basic", "orc_basic"] {
        let creature = catalog
            .get(creature_id)
            .ok_or_else(|| anyhow::anyhow!("missing creature {creature_id}"))?;
        let dex = ability_modifier(creature.stats.dexterity);
        let overrides = CombatantOverrides {
            initiative: Some(roll_initiative(&mut roller, dex)),
            ..CombatantOverrides::default()
        };
        session.dispatch(Action::AddCombatant(creature.to_draft(&overrides)));
    }

    // Run two full rounds.
    let turns = session.state().combatants.len() * 2;
    for _ in 0..turns {
        let active = session
            .state()
            .active_combatant()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        tracing::info!(round = session.state().round, %active, "taking turn");
        session.dispatch(Action::NextTurn);
    }

    for entry in &session.state().log {
        tracing::info!(ts = entry.ts.0, "{}", entry.msg);
    }

    session.save_now()?;
    drop(session);
    autosave.await?;

    Ok(())
}
