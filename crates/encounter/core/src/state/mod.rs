//! Authoritative encounter state representation.
//!
//! This module owns the data structures that describe combatants, turn
//! bookkeeping, and the session log. Runtime layers clone or query this
//! state but mutate it exclusively through the engine.
mod combatant;
mod common;

pub use combatant::{Combatant, CombatantDraft, Condition};
pub use common::{CombatantId, CombatantKind, LogEntry, Timestamp};

use crate::config::EncounterConfig;

/// Canonical snapshot of one tracked encounter.
///
/// Invariants maintained by the engine:
/// - `combatants` is always sorted by the turn-order comparator; no code
///   path reorders it except the comparator-driven sort.
/// - `active_index < combatants.len()` whenever the roster is non-empty;
///   `0` is the canonical value when it is empty.
/// - `round >= 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterState {
    pub encounter_name: String,
    pub round: u32,
    pub active_index: usize,
    pub combatants: Vec<Combatant>,
    pub log: Vec<LogEntry>,

    /// Sequential combatant id allocator (monotonically increasing, never
    /// reused). Import raises it past any imported id in the local format
    /// so later allocations cannot collide.
    next_combatant_id: u64,
}

impl EncounterState {
    /// Creates a fresh, empty encounter.
    pub fn new() -> Self {
        Self {
            encounter_name: EncounterConfig::DEFAULT_ENCOUNTER_NAME.to_string(),
            round: EncounterConfig::FIRST_ROUND,
            active_index: 0,
            combatants: Vec::new(),
            log: Vec::new(),
            next_combatant_id: 1,
        }
    }

    /// Returns a reference to the combatant with the given id.
    pub fn combatant(&self, id: &CombatantId) -> Option<&Combatant> {
        self.combatants.iter().find(|c| &c.id == id)
    }

    /// Returns a mutable reference to the combatant with the given id.
    pub(crate) fn combatant_mut(&mut self, id: &CombatantId) -> Option<&mut Combatant> {
        self.combatants.iter_mut().find(|c| &c.id == id)
    }

    /// Position of a combatant in the current turn order.
    pub fn position_of(&self, id: &CombatantId) -> Option<usize> {
        self.combatants.iter().position(|c| &c.id == id)
    }

    /// The combatant whose turn it currently is, if any.
    pub fn active_combatant(&self) -> Option<&Combatant> {
        self.combatants.get(self.active_index)
    }

    /// Allocates the next combatant id.
    pub(crate) fn allocate_id(&mut self) -> CombatantId {
        let id = CombatantId::from_sequence(self.next_combatant_id);
        self.next_combatant_id += 1;
        id
    }

    /// Current allocator position (next sequence to hand out).
    pub(crate) fn allocator(&self) -> u64 {
        self.next_combatant_id
    }

    /// Raises the allocator so it will never hand out a sequence below
    /// `floor`. Lower floors are ignored.
    pub(crate) fn raise_allocator(&mut self, floor: u64) {
        self.next_combatant_id = self.next_combatant_id.max(floor);
    }

    /// Raises the allocator past every roster id that uses the local
    /// format. Foreign-format ids are left alone.
    pub(crate) fn absorb_roster_ids(&mut self) {
        let max_seen = self
            .combatants
            .iter()
            .filter_map(|c| c.id.sequence())
            .max();
        if let Some(sequence) = max_seen {
            self.raise_allocator(sequence + 1);
        }
    }

    /// Appends an informational log entry.
    pub(crate) fn push_log(&mut self, ts: Timestamp, msg: impl Into<String>) {
        self.log.push(LogEntry::new(ts, msg));
    }
}

impl Default for EncounterState {
    fn default() -> Self {
        Self::new()
    }
}
