//! Total, deterministic turn ordering for combatants.
//!
//! Initiative descending, then dex modifier descending, then id ascending.
//! The final id tie-break keeps the ordering independent of insertion order
//! for combatants with identical initiative and dex.

use std::cmp::Ordering;

use crate::state::Combatant;

/// Comparator for the initiative order. `Less` means "acts earlier".
pub fn initiative_order(a: &Combatant, b: &Combatant) -> Ordering {
    b.initiative
        .cmp(&a.initiative)
        .then_with(|| b.dex_modifier.cmp(&a.dex_modifier))
        .then_with(|| a.id.cmp(&b.id))
}

/// Re-sorts the roster in place. This is a projection of the comparator
/// onto the existing elements; it never adds or loses combatants.
pub fn sort_combatants(combatants: &mut [Combatant]) {
    combatants.sort_by(initiative_order);
}

/// True if the roster already satisfies the initiative order.
pub fn is_sorted(combatants: &[Combatant]) -> bool {
    combatants
        .windows(2)
        .all(|pair| initiative_order(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CombatantDraft, CombatantId};

    fn combatant(seq: u64, initiative: i32, dex: i32) -> Combatant {
        Combatant::materialize(
            CombatantId::from_sequence(seq),
            CombatantDraft::default()
                .with_initiative(initiative)
                .with_dex_modifier(dex),
        )
    }

    #[test]
    fn initiative_descending_is_primary() {
        let high = combatant(1, 20, 0);
        let low = combatant(2, 5, 10);
        assert_eq!(initiative_order(&high, &low), Ordering::Less);
    }

    #[test]
    fn dex_modifier_breaks_initiative_ties() {
        let slow = combatant(1, 15, 2);
        let fast = combatant(2, 15, 4);
        assert_eq!(initiative_order(&fast, &slow), Ordering::Less);
    }

    #[test]
    fn id_breaks_full_ties_deterministically() {
        let first = combatant(1, 15, 2);
        let second = combatant(2, 15, 2);
        assert_eq!(initiative_order(&first, &second), Ordering::Less);

        // Insertion order must not matter.
        let mut forward = vec![first.clone(), second.clone()];
        let mut backward = vec![second, first];
        sort_combatants(&mut forward);
        sort_combatants(&mut backward);
        assert_eq!(forward, backward);
    }

    #[test]
    fn sort_preserves_every_element() {
        let mut roster = vec![
            combatant(3, 5, 0),
            combatant(1, 20, 1),
            combatant(2, 20, 3),
        ];
        sort_combatants(&mut roster);
        assert_eq!(roster.len(), 3);
        assert!(is_sorted(&roster));
    }
}
