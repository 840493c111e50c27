//! Condition list and held-action transitions.

use crate::state::{CombatantId, Condition};

use super::EncounterEngine;

impl EncounterEngine<'_> {
    /// Appends a condition to the combatant's sequence. No dedup: the same
    /// named condition may be held more than once. A zero duration is
    /// raised to the one-round minimum. Unknown ids are a no-op.
    pub(super) fn add_condition(&mut self, id: &CombatantId, condition: Condition) {
        let Some(combatant) = self.state.combatant_mut(id) else {
            return;
        };
        combatant
            .conditions
            .push(Condition::new(condition.name, condition.remaining_rounds));
    }

    /// Deletes the condition at the given insertion-order index. Unknown
    /// ids and out-of-range indices are no-ops.
    pub(super) fn remove_condition(&mut self, id: &CombatantId, index: usize) {
        let Some(combatant) = self.state.combatant_mut(id) else {
            return;
        };
        if index < combatant.conditions.len() {
            combatant.conditions.remove(index);
        }
    }

    /// Marks the combatant as holding its action this round.
    pub(super) fn hold_action(&mut self, id: &CombatantId) {
        if let Some(combatant) = self.state.combatant_mut(id) {
            combatant.is_held_action = true;
        }
    }

    /// Intentionally inert. The reference behavior defines this transition
    /// in the action vocabulary but performs no observable change; clearing
    /// semantics have not been invented here.
    pub(super) fn release_held_action(&mut self, _id: &CombatantId) {}
}
