//! Combatant lifecycle transitions: add, update, remove, duplicate.

use crate::action::CombatantPatch;
use crate::state::{Combatant, CombatantDraft, CombatantId, Timestamp};

use super::EncounterEngine;

impl EncounterEngine<'_> {
    /// Constructs a combatant from permissive input, inserts it, and
    /// re-sorts. The previously active combatant keeps the turn.
    pub(super) fn add_combatant(&mut self, draft: CombatantDraft, now: Timestamp) {
        let previously_active = self.active_id();
        let id = self.state.allocate_id();
        let combatant = Combatant::materialize(id, draft);
        let name = combatant.name.clone();

        self.state.combatants.push(combatant);
        self.resort_and_relocate(previously_active);
        self.state.push_log(now, format!("Added {name}"));
    }

    /// Merges a patch into the matching combatant. Re-sorts (and re-locates
    /// the active marker) only when the patch touches ordering keys.
    /// Unknown ids are a no-op.
    pub(super) fn update_combatant(&mut self, id: &CombatantId, patch: &CombatantPatch) {
        let previously_active = self.active_id();

        let Some(combatant) = self.state.combatant_mut(id) else {
            return;
        };
        patch.apply_to(combatant);

        if patch.reorders() {
            self.resort_and_relocate(previously_active);
        }
    }

    /// Deletes the combatant with the given id and re-targets the active
    /// marker:
    /// - removal left of the marker shifts it one slot left;
    /// - removing the active combatant keeps the index if something still
    ///   occupies that slot, otherwise wraps to 0;
    /// - removal right of the marker leaves it alone.
    ///
    /// Unknown ids are a no-op.
    pub(super) fn remove_combatant(&mut self, id: &CombatantId, now: Timestamp) {
        let Some(removed_index) = self.state.position_of(id) else {
            return;
        };

        let removed = self.state.combatants.remove(removed_index);
        self.state.active_index = retarget_after_removal(
            self.state.combatants.len(),
            removed_index,
            self.state.active_index,
        );
        self.state.push_log(now, format!("Removed {}", removed.name));
    }

    /// Clones all fields except identity, appends " (Copy)" to the name,
    /// inserts, and re-sorts. Unknown ids are a no-op.
    pub(super) fn duplicate_combatant(&mut self, id: &CombatantId) {
        let Some(original) = self.state.combatant(id) else {
            return;
        };
        let draft = original.duplicate_draft();

        let previously_active = self.active_id();
        let copy_id = self.state.allocate_id();
        let copy = Combatant::materialize(copy_id, draft);

        self.state.combatants.push(copy);
        self.resort_and_relocate(previously_active);
    }
}

/// Active-index rule after removing the combatant at `removed_index` from a
/// roster that now holds `remaining` entries.
fn retarget_after_removal(remaining: usize, removed_index: usize, active: usize) -> usize {
    if remaining == 0 {
        0
    } else if removed_index < active {
        active - 1
    } else if removed_index == active {
        // The active combatant itself was removed; keep the slot if it is
        // still occupied, otherwise wrap to the start.
        if active >= remaining { 0 } else { active }
    } else {
        active
    }
}
