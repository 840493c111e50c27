//! Turning library creatures into combatant drafts.

use encounter_core::{CombatantDraft, Condition};

use crate::catalog::Creature;

/// Standard ability-score modifier: floor((score - 10) / 2). Uses
/// `div_euclid` so odd scores below 10 round toward negative infinity
/// (a score of 9 is -1, not 0).
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Per-instance overrides applied when a creature is dropped into an
/// encounter. `None` fields fall back to the creature record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CombatantOverrides {
    pub name: Option<String>,
    pub initiative: Option<i32>,
    pub hit_points: Option<i32>,
    pub notes: Option<String>,
    pub tags: Vec<String>,
    pub hidden: Option<bool>,
    pub conditions: Vec<Condition>,
}

impl Creature {
    /// Builds a draft for this creature. The draft still goes through the
    /// usual materialization path, so clamping and defaults apply there.
    pub fn to_draft(&self, overrides: &CombatantOverrides) -> CombatantDraft {
        let mut tags = self.tags.clone();
        tags.extend(overrides.tags.iter().cloned());

        CombatantDraft {
            name: Some(overrides.name.clone().unwrap_or_else(|| self.name.clone())),
            kind: Some(self.kind),
            initiative: Some(overrides.initiative.unwrap_or(0)),
            dex_modifier: Some(ability_modifier(self.stats.dexterity)),
            hit_points: Some(overrides.hit_points.unwrap_or(self.hp)),
            armor_class: Some(self.ac),
            notes: Some(overrides.notes.clone().unwrap_or_else(|| self.notes.clone())),
            tags: Some(tags),
            conditions: Some(overrides.conditions.clone()),
            hidden: Some(overrides.hidden.unwrap_or(false)),
            is_held_action: Some(false),
            creature_id: Some(self.id.clone()),
        }
    }
}
