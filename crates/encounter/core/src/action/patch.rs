//! Field-group update commands for combatants.
//!
//! Updates are grouped so that "does this update require a re-sort" is a
//! property of the command type rather than a runtime field check: only
//! [`CombatantPatch::Order`] touches the turn-order keys.

use crate::state::{Combatant, CombatantKind};

/// One update command against a single combatant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatantPatch {
    /// Display fields; never reorders.
    Identity {
        name: Option<String>,
        kind: Option<CombatantKind>,
        notes: Option<String>,
        tags: Option<Vec<String>>,
        hidden: Option<bool>,
    },

    /// Hit points and armor class; never reorders. Hit points are clamped
    /// at 0 so stored combatants keep the `hp >= 0` expectation.
    Vitals {
        hit_points: Option<i32>,
        armor_class: Option<i32>,
    },

    /// Turn-order keys; always forces a re-sort.
    Order {
        initiative: Option<i32>,
        dex_modifier: Option<i32>,
    },

    /// Explicit empty patch (useful default).
    #[default]
    None,
}

impl CombatantPatch {
    /// Convenience: rename only.
    pub fn rename(name: impl Into<String>) -> Self {
        Self::Identity {
            name: Some(name.into()),
            kind: None,
            notes: None,
            tags: None,
            hidden: None,
        }
    }

    /// Convenience: set hit points only.
    pub fn hit_points(hit_points: i32) -> Self {
        Self::Vitals {
            hit_points: Some(hit_points),
            armor_class: None,
        }
    }

    /// Convenience: set initiative only.
    pub fn initiative(initiative: i32) -> Self {
        Self::Order {
            initiative: Some(initiative),
            dex_modifier: None,
        }
    }

    /// Convenience: set dex modifier only.
    pub fn dex_modifier(dex_modifier: i32) -> Self {
        Self::Order {
            initiative: None,
            dex_modifier: Some(dex_modifier),
        }
    }

    /// Whether applying this patch can change the combatant's position in
    /// the turn order.
    pub fn reorders(&self) -> bool {
        matches!(self, Self::Order { .. })
    }

    /// Merges the patch into the target combatant. Total; `None` fields are
    /// left untouched.
    pub(crate) fn apply_to(&self, combatant: &mut Combatant) {
        match self {
            Self::Identity {
                name,
                kind,
                notes,
                tags,
                hidden,
            } => {
                if let Some(name) = name {
                    combatant.name = name.clone();
                }
                if let Some(kind) = kind {
                    combatant.kind = *kind;
                }
                if let Some(notes) = notes {
                    combatant.notes = notes.clone();
                }
                if let Some(tags) = tags {
                    combatant.tags = tags.clone();
                }
                if let Some(hidden) = hidden {
                    combatant.hidden = *hidden;
                }
            }
            Self::Vitals {
                hit_points,
                armor_class,
            } => {
                if let Some(hit_points) = hit_points {
                    combatant.hit_points = (*hit_points).max(0);
                }
                if let Some(armor_class) = armor_class {
                    combatant.armor_class = *armor_class;
                }
            }
            Self::Order {
                initiative,
                dex_modifier,
            } => {
                if let Some(initiative) = initiative {
                    combatant.initiative = *initiative;
                }
                if let Some(dex_modifier) = dex_modifier {
                    combatant.dex_modifier = *dex_modifier;
                }
            }
            Self::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CombatantDraft, CombatantId};

    #[test]
    fn only_order_patches_reorder() {
        assert!(CombatantPatch::initiative(10).reorders());
        assert!(CombatantPatch::dex_modifier(2).reorders());
        assert!(!CombatantPatch::rename("X").reorders());
        assert!(!CombatantPatch::hit_points(5).reorders());
        assert!(!CombatantPatch::None.reorders());
    }

    #[test]
    fn vitals_patch_clamps_hit_points_at_zero() {
        let mut combatant = Combatant::materialize(
            CombatantId::from_raw("c-00000001"),
            CombatantDraft::named("Orc").with_hit_points(15),
        );
        CombatantPatch::hit_points(-3).apply_to(&mut combatant);
        assert_eq!(combatant.hit_points, 0);
    }
}
