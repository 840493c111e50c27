//! Turn and round advancement.

use crate::state::Timestamp;

use super::EncounterEngine;

impl EncounterEngine<'_> {
    /// Advances the turn marker circularly. Wrapping to 0 begins a new
    /// round: the round counter increments and every condition clock ticks
    /// down, dropping conditions that reach 0. No-op on an empty roster.
    pub(super) fn next_turn(&mut self, now: Timestamp) {
        let len = self.state.combatants.len();
        if len == 0 {
            return;
        }

        let next = (self.state.active_index + 1) % len;
        self.state.active_index = next;

        if next == 0 {
            self.begin_round(now);
        }
    }

    /// Retreats the turn marker circularly. Deliberately asymmetric with
    /// [`Self::next_turn`]: round number and condition clocks are not
    /// touched going backward. No-op on an empty roster.
    pub(super) fn prev_turn(&mut self) {
        let len = self.state.combatants.len();
        if len == 0 {
            return;
        }

        self.state.active_index = if self.state.active_index == 0 {
            len - 1
        } else {
            self.state.active_index - 1
        };
    }

    /// Points the turn marker at the given position, clamped into
    /// `[0, len - 1]` (0 when the roster is empty). Out-of-range input is
    /// clamped, never rejected.
    pub(super) fn set_active(&mut self, index: usize) {
        let len = self.state.combatants.len();
        self.state.active_index = if len == 0 { 0 } else { index.min(len - 1) };
    }

    /// Round-wrap bookkeeping: increment the round, tick every condition
    /// clock, drop expired conditions, and log the round start.
    fn begin_round(&mut self, now: Timestamp) {
        self.state.round += 1;

        for combatant in &mut self.state.combatants {
            for condition in &mut combatant.conditions {
                condition.remaining_rounds = condition.remaining_rounds.saturating_sub(1);
            }
            combatant.conditions.retain(|c| c.remaining_rounds > 0);
        }

        let round = self.state.round;
        self.state.push_log(now, format!("Round {round} begins"));
    }
}
