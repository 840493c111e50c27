//! Action vocabulary for the encounter reducer.
//!
//! Every mutation of [`crate::EncounterState`] is expressed as one of these
//! variants and routed through [`crate::EncounterEngine::apply`]. Actions
//! that name a missing combatant (or an out-of-range condition index) are
//! absorbed as no-ops rather than errors: the tracker must keep running
//! mid-session no matter what the UI dispatches.

mod patch;

pub use patch::CombatantPatch;

use crate::state::{CombatantDraft, CombatantId, Condition};

#[cfg(feature = "serde")]
use crate::document::EncounterDocument;

/// Top-level action enum driving all encounter state transitions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Construct a combatant from permissive input, insert it, re-sort.
    AddCombatant(CombatantDraft),

    /// Merge a field-group patch into the matching combatant. Re-sorts only
    /// when the patch touches ordering keys.
    UpdateCombatant {
        id: CombatantId,
        patch: CombatantPatch,
    },

    /// Delete the combatant with the given id.
    RemoveCombatant(CombatantId),

    /// Clone all fields except identity, append " (Copy)" to the name.
    DuplicateCombatant(CombatantId),

    /// Point the turn marker at the given position, clamped into range.
    SetActive(usize),

    /// Advance the turn marker circularly; wrapping to 0 starts a new round
    /// and ticks every condition clock.
    NextTurn,

    /// Retreat the turn marker circularly. A UI correction affordance: round
    /// number and condition clocks are deliberately untouched.
    PrevTurn,

    /// Append a condition to a combatant (no dedup; the same name may be
    /// held more than once).
    AddCondition {
        id: CombatantId,
        condition: Condition,
    },

    /// Delete the condition at the given insertion-order index.
    RemoveCondition { id: CombatantId, index: usize },

    /// Mark a combatant as having declared a held action this round.
    HoldAction(CombatantId),

    /// Named transition with no observable state change. The reference
    /// behavior never clears the held flag here, and no clearing semantics
    /// have been invented; the variant exists so callers have somewhere to
    /// dispatch and the behavior is pinned by tests.
    ReleaseHeldAction(CombatantId),

    /// Replace the encounter's display name.
    SetEncounterName(String),

    /// Reset to the initial state, preserving the encounter name and log.
    Clear,

    /// Wholesale state replacement from a validated external document.
    /// Validation happens before this variant can be constructed; the
    /// transition itself re-sorts and clamps, never fails.
    #[cfg(feature = "serde")]
    Import(EncounterDocument),
}
