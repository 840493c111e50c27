//! The encounter state machine.
//!
//! [`EncounterEngine`] is the authoritative reducer for
//! [`EncounterState`]: all mutations, from roster edits to round
//! advancement to wholesale import, flow through [`EncounterEngine::apply`].
//!
//! `apply` is total. Actions referencing a missing combatant id or an
//! out-of-range condition index are absorbed as no-ops, and `SetActive`
//! clamps rather than rejects. The one fallible boundary, import payload
//! validation, runs in [`crate::document`] before an [`Action::Import`] can
//! exist, so nothing in here ever fails mid-session.

mod roster;
mod session;
mod status;
mod turns;

use crate::action::Action;
use crate::order;
use crate::state::{CombatantId, EncounterState, Timestamp};

/// Reducer wrapping mutable access to one encounter.
pub struct EncounterEngine<'a> {
    state: &'a mut EncounterState,
}

impl<'a> EncounterEngine<'a> {
    /// Creates a new engine over the given state.
    pub fn new(state: &'a mut EncounterState) -> Self {
        Self { state }
    }

    /// Read-only view of the underlying state.
    pub fn state(&self) -> &EncounterState {
        self.state
    }

    /// Applies one action. `now` is used only for log entry timestamps;
    /// given the same `(state, action, now)` the result is always the same.
    pub fn apply(&mut self, action: Action, now: Timestamp) {
        match action {
            Action::AddCombatant(draft) => self.add_combatant(draft, now),
            Action::UpdateCombatant { id, patch } => self.update_combatant(&id, &patch),
            Action::RemoveCombatant(id) => self.remove_combatant(&id, now),
            Action::DuplicateCombatant(id) => self.duplicate_combatant(&id),
            Action::SetActive(index) => self.set_active(index),
            Action::NextTurn => self.next_turn(now),
            Action::PrevTurn => self.prev_turn(),
            Action::AddCondition { id, condition } => self.add_condition(&id, condition),
            Action::RemoveCondition { id, index } => self.remove_condition(&id, index),
            Action::HoldAction(id) => self.hold_action(&id),
            Action::ReleaseHeldAction(id) => self.release_held_action(&id),
            Action::SetEncounterName(name) => self.set_encounter_name(name),
            Action::Clear => self.clear(now),
            #[cfg(feature = "serde")]
            Action::Import(document) => self.import(document),
        }
    }

    /// Identity of the currently active combatant, if any. Captured before
    /// a mutation so the marker can be re-located afterwards.
    fn active_id(&self) -> Option<CombatantId> {
        self.state.active_combatant().map(|c| c.id.clone())
    }

    /// Re-sorts the roster and points the turn marker back at the combatant
    /// that was active before the mutation. If that combatant is gone (or
    /// the roster was empty), the marker wraps to the canonical 0.
    fn resort_and_relocate(&mut self, previously_active: Option<CombatantId>) {
        order::sort_combatants(&mut self.state.combatants);
        self.state.active_index = previously_active
            .and_then(|id| self.state.position_of(&id))
            .unwrap_or(0);
    }
}
