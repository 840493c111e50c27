//! Creature records and the in-memory library that holds them.

use encounter_core::CombatantKind;

/// The six ability scores of a creature record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AbilityScores {
    #[serde(rename = "str")]
    pub strength: i32,
    #[serde(rename = "dex")]
    pub dexterity: i32,
    #[serde(rename = "con")]
    pub constitution: i32,
    #[serde(rename = "int")]
    pub intelligence: i32,
    #[serde(rename = "wis")]
    pub wisdom: i32,
    #[serde(rename = "cha")]
    pub charisma: i32,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self {
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
        }
    }
}

/// One creature definition from the library. Plain data; combatants built
/// from it never refer back except through the weak `id`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Creature {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CombatantKind,
    pub cr: String,
    pub ac: i32,
    pub hp: i32,
    pub speed: String,
    pub stats: AbilityScores,
    pub skills: Vec<String>,
    pub senses: Vec<String>,
    pub languages: Vec<String>,
    pub abilities: Vec<String>,
    pub actions: Vec<String>,
    pub source: String,
    pub tags: Vec<String>,
    pub notes: String,
}

impl Default for Creature {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            kind: CombatantKind::Monster,
            cr: "1".to_string(),
            ac: 10,
            hp: 10,
            speed: "30 ft".to_string(),
            stats: AbilityScores::default(),
            skills: Vec::new(),
            senses: Vec::new(),
            languages: Vec::new(),
            abilities: Vec::new(),
            actions: Vec::new(),
            source: "Custom".to_string(),
            tags: Vec::new(),
            notes: String::new(),
        }
    }
}

/// Search filters for the catalog. Empty filters match everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchFilter {
    pub kind: Option<CombatantKind>,
    pub cr: Option<String>,
    pub source: Option<String>,
    pub tags: Vec<String>,
}

/// In-memory creature library.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CreatureCatalog {
    creatures: Vec<Creature>,
}

impl CreatureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_creatures(creatures: Vec<Creature>) -> Self {
        Self { creatures }
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id == id)
    }

    /// Inserts the creature, replacing any existing record with the same
    /// id. Import-merge uses this so re-imports win over stale entries.
    pub fn upsert(&mut self, creature: Creature) {
        match self.creatures.iter_mut().find(|c| c.id == creature.id) {
            Some(existing) => *existing = creature,
            None => self.creatures.push(creature),
        }
    }

    /// Removes the creature with the given id. Returns whether anything
    /// was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.creatures.len();
        self.creatures.retain(|c| c.id != id);
        self.creatures.len() != before
    }

    /// Upserts every creature from `other` into this catalog.
    pub fn merge(&mut self, other: CreatureCatalog) {
        for creature in other.creatures {
            self.upsert(creature);
        }
    }

    /// Case-insensitive text search over name, kind, source, tags, and
    /// notes, narrowed by the filter. An empty query matches everything.
    pub fn search(&self, query: &str, filter: &SearchFilter) -> Vec<&Creature> {
        let needle = query.trim().to_lowercase();

        self.creatures
            .iter()
            .filter(|creature| {
                let matches_query = needle.is_empty()
                    || creature.name.to_lowercase().contains(&needle)
                    || creature.kind.to_string().to_lowercase().contains(&needle)
                    || creature.source.to_lowercase().contains(&needle)
                    || creature
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
                    || creature.notes.to_lowercase().contains(&needle);

                let matches_kind = filter.kind.is_none_or(|kind| creature.kind == kind);
                let matches_cr = filter.cr.as_deref().is_none_or(|cr| creature.cr == cr);
                let matches_source = filter
                    .source
                    .as_deref()
                    .is_none_or(|source| creature.source == source);
                let matches_tags = filter
                    .tags
                    .iter()
                    .all(|tag| creature.tags.iter().any(|t| t == tag));

                matches_query && matches_kind && matches_cr && matches_source && matches_tags
            })
            .collect()
    }
}

/// Catalog seeded with the stock creatures a fresh library starts from.
pub fn default_catalog() -> CreatureCatalog {
    CreatureCatalog::from_creatures(vec![
        Creature {
            id: "goblin_basic".to_string(),
            name: "Goblin".to_string(),
            cr: "1/4".to_string(),
            ac: 15,
            hp: 7,
            stats: AbilityScores {
                strength: 8,
                dexterity: 14,
                constitution: 10,
                intelligence: 10,
                wisdom: 8,
                charisma: 8,
            },
            skills: vec!["Stealth +6".to_string()],
            senses: vec!["Darkvision 60 ft".to_string()],
            languages: vec!["Common".to_string(), "Goblin".to_string()],
            abilities: vec!["Nimble Escape".to_string()],
            actions: vec!["Scimitar".to_string(), "Shortbow".to_string()],
            source: "Monster Manual".to_string(),
            tags: vec![
                "humanoid".to_string(),
                "goblinoid".to_string(),
                "common".to_string(),
            ],
            notes: "Basic goblin warrior".to_string(),
            ..Creature::default()
        },
        Creature {
            id: "orc_basic".to_string(),
            name: "Orc".to_string(),
            cr: "1".to_string(),
            ac: 13,
            hp: 15,
            stats: AbilityScores {
                strength: 16,
                dexterity: 12,
                constitution: 16,
                intelligence: 7,
                wisdom: 11,
                charisma: 10,
            },
            skills: vec!["Intimidation +2".to_string()],
            senses: vec!["Darkvision 60 ft".to_string()],
            languages: vec!["Common".to_string(), "Orc".to_string()],
            abilities: vec!["Aggressive".to_string()],
            actions: vec!["Greataxe".to_string(), "Javelin".to_string()],
            source: "Monster Manual".to_string(),
            tags: vec!["humanoid".to_string(), "orc".to_string(), "common".to_string()],
            notes: "Savage orc warrior".to_string(),
            ..Creature::default()
        },
        Creature {
            id: "skeleton_basic".to_string(),
            name: "Skeleton".to_string(),
            cr: "1/4".to_string(),
            ac: 13,
            hp: 13,
            stats: AbilityScores {
                strength: 10,
                dexterity: 14,
                constitution: 15,
                intelligence: 6,
                wisdom: 8,
                charisma: 5,
            },
            senses: vec!["Darkvision 60 ft".to_string()],
            actions: vec!["Shortsword".to_string(), "Shortbow".to_string()],
            source: "Monster Manual".to_string(),
            tags: vec!["undead".to_string(), "common".to_string()],
            notes: "Animated skeleton warrior".to_string(),
            ..Creature::default()
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_replaces_by_id() {
        let mut catalog = default_catalog();
        let count = catalog.len();

        let mut tougher_goblin = catalog.get("goblin_basic").unwrap().clone();
        tougher_goblin.hp = 12;
        catalog.upsert(tougher_goblin);

        assert_eq!(catalog.len(), count);
        assert_eq!(catalog.get("goblin_basic").unwrap().hp, 12);
    }

    #[test]
    fn search_matches_tags_case_insensitively() {
        let catalog = default_catalog();
        let hits = catalog.search("GOBLINOID", &SearchFilter::default());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Goblin");
    }

    #[test]
    fn filter_narrows_by_cr_and_tags() {
        let catalog = default_catalog();

        let quarter_cr = catalog.search(
            "",
            &SearchFilter {
                cr: Some("1/4".to_string()),
                ..SearchFilter::default()
            },
        );
        assert_eq!(quarter_cr.len(), 2);

        let undead = catalog.search(
            "",
            &SearchFilter {
                tags: vec!["undead".to_string()],
                ..SearchFilter::default()
            },
        );
        assert_eq!(undead.len(), 1);
        assert_eq!(undead[0].name, "Skeleton");
    }

    #[test]
    fn remove_reports_whether_anything_went_away() {
        let mut catalog = default_catalog();
        assert!(catalog.remove("orc_basic"));
        assert!(!catalog.remove("orc_basic"));
        assert!(catalog.get("orc_basic").is_none());
    }
}
