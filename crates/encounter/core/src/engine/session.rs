//! Session-level transitions: rename, reset, and wholesale import.

use crate::config::EncounterConfig;
use crate::state::Timestamp;

#[cfg(feature = "serde")]
use crate::document::EncounterDocument;
#[cfg(feature = "serde")]
use crate::order;

use super::EncounterEngine;

impl EncounterEngine<'_> {
    /// Replaces the encounter's display name.
    pub(super) fn set_encounter_name(&mut self, name: String) {
        self.state.encounter_name = name;
    }

    /// Resets to the initial state while preserving the encounter name and
    /// the log history, then records the reset. The id allocator carries
    /// forward: ids stay unique for the whole process lifetime.
    pub(super) fn clear(&mut self, now: Timestamp) {
        self.state.round = EncounterConfig::FIRST_ROUND;
        self.state.active_index = 0;
        self.state.combatants.clear();
        self.state.push_log(now, "Encounter cleared");
    }

    /// Wholesale replacement from a validated document: rebuild the state,
    /// re-sort the roster, clamp the active marker into range, and raise
    /// the id allocator past both the previous session's ids and any
    /// imported id in the local format.
    #[cfg(feature = "serde")]
    pub(super) fn import(&mut self, document: EncounterDocument) {
        let allocator_floor = self.state.allocator();

        let mut state = document.into_state();
        order::sort_combatants(&mut state.combatants);
        state.active_index = match state.combatants.len() {
            0 => 0,
            len => state.active_index.min(len - 1),
        };
        state.raise_allocator(allocator_floor);
        state.absorb_roster_ids();

        *self.state = state;
    }
}
