//! Combatant model: the validated participant record and its permissive
//! raw-input counterpart.
//!
//! Every [`Combatant`] stored in an encounter is well-formed by
//! construction: the only way to build one is through
//! [`Combatant::materialize`], which is total over any [`CombatantDraft`]
//! and substitutes defaults for missing or mangled fields. The surrounding
//! UI allows partial, human-typed input, so rejection is never an option
//! here.

use crate::config::EncounterConfig;

use super::{CombatantId, CombatantKind};

/// A named, round-limited status effect attached to one combatant.
///
/// `remaining_rounds` is at least 1 while the condition lives; the round
/// tick decrements it and drops the condition the moment it reaches 0.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "remainingRounds"))]
    pub remaining_rounds: u32,
}

impl Condition {
    /// Creates a condition lasting at least one round.
    pub fn new(name: impl Into<String>, remaining_rounds: u32) -> Self {
        Self {
            name: name.into(),
            remaining_rounds: remaining_rounds.max(1),
        }
    }
}

/// One participant in the encounter.
///
/// Field invariants: `id` is immutable after creation, `hit_points >= 0`,
/// and `conditions` keeps insertion order (removal is by index into that
/// order). `creature_id` is a weak reference to an external library record;
/// the combatant owns all of its stat fields independently of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub kind: CombatantKind,
    pub initiative: i32,
    pub dex_modifier: i32,
    pub hit_points: i32,
    pub armor_class: i32,
    pub notes: String,
    pub tags: Vec<String>,
    pub conditions: Vec<Condition>,
    pub hidden: bool,
    pub is_held_action: bool,
    pub creature_id: Option<String>,
}

impl Combatant {
    /// Builds a well-formed combatant from permissive input. Total: every
    /// draft produces a usable combatant.
    pub fn materialize(id: CombatantId, draft: CombatantDraft) -> Self {
        Self {
            id,
            name: draft.name.unwrap_or_default(),
            kind: draft.kind.unwrap_or_default(),
            initiative: draft.initiative.unwrap_or(0),
            dex_modifier: draft.dex_modifier.unwrap_or(0),
            hit_points: draft.hit_points.unwrap_or(0).max(0),
            armor_class: draft
                .armor_class
                .unwrap_or(EncounterConfig::DEFAULT_ARMOR_CLASS),
            notes: draft.notes.unwrap_or_default(),
            tags: draft.tags.unwrap_or_default(),
            conditions: draft.conditions.unwrap_or_default(),
            hidden: draft.hidden.unwrap_or(false),
            is_held_action: draft.is_held_action.unwrap_or(false),
            creature_id: draft.creature_id,
        }
    }

    /// Draft carrying every field of this combatant except identity, with
    /// `" (Copy)"` appended to the name. Used by the duplicate transition.
    pub fn duplicate_draft(&self) -> CombatantDraft {
        CombatantDraft {
            name: Some(format!("{} (Copy)", self.name)),
            kind: Some(self.kind),
            initiative: Some(self.initiative),
            dex_modifier: Some(self.dex_modifier),
            hit_points: Some(self.hit_points),
            armor_class: Some(self.armor_class),
            notes: Some(self.notes.clone()),
            tags: Some(self.tags.clone()),
            conditions: Some(self.conditions.clone()),
            hidden: Some(self.hidden),
            is_held_action: Some(self.is_held_action),
            creature_id: self.creature_id.clone(),
        }
    }
}

/// Raw combatant input, distinct from the validated [`Combatant`] type.
///
/// Every field is optional; [`Combatant::materialize`] fills the gaps.
/// Callers assembling drafts by hand can use struct-update syntax over
/// `Default` or the small builder methods below.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatantDraft {
    pub name: Option<String>,
    pub kind: Option<CombatantKind>,
    pub initiative: Option<i32>,
    pub dex_modifier: Option<i32>,
    pub hit_points: Option<i32>,
    pub armor_class: Option<i32>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub conditions: Option<Vec<Condition>>,
    pub hidden: Option<bool>,
    pub is_held_action: Option<bool>,
    pub creature_id: Option<String>,
}

impl CombatantDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: CombatantKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_initiative(mut self, initiative: i32) -> Self {
        self.initiative = Some(initiative);
        self
    }

    pub fn with_dex_modifier(mut self, dex_modifier: i32) -> Self {
        self.dex_modifier = Some(dex_modifier);
        self
    }

    pub fn with_hit_points(mut self, hit_points: i32) -> Self {
        self.hit_points = Some(hit_points);
        self
    }

    pub fn with_armor_class(mut self, armor_class: i32) -> Self {
        self.armor_class = Some(armor_class);
        self
    }
}
