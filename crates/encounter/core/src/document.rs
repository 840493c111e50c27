//! Persisted/exported encounter document.
//!
//! This is the JSON shape the outside world sees: the persistence adapter
//! stores it, export hands it to the user, and import consumes it. Field
//! names follow the wire contract (`init`, `dex`, `hp`, `ac`, `ts`, `msg`,
//! `isHeldAction`, `creatureId`), not the in-memory names.
//!
//! Import runs two hard gates before any live state is touched: the payload
//! must be a JSON object carrying a `version` field, and `combatants` must
//! be an array. Everything else is tolerated by best-effort coercion
//! through the permissive draft path; a mangled number becomes a default,
//! never an error.

use serde_json::Value;

use crate::config::EncounterConfig;
use crate::state::{
    Combatant, CombatantDraft, CombatantId, CombatantKind, Condition, EncounterState, LogEntry,
    Timestamp,
};

/// Validation failures for an import payload. The only errors the core ever
/// surfaces to a user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("import payload must be a JSON object")]
    NotAnObject,

    #[error("import payload is missing version information")]
    MissingVersion,

    #[error("import payload combatants must be an array")]
    InvalidCombatants,
}

/// One combatant as it appears on the wire.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DocCombatant {
    /// Missing or empty ids are re-allocated during reconstruction.
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CombatantKind,
    pub init: i32,
    pub dex: i32,
    pub hp: i32,
    pub ac: i32,
    pub notes: String,
    pub tags: Vec<String>,
    pub conditions: Vec<Condition>,
    pub hidden: bool,
    #[serde(rename = "isHeldAction")]
    pub is_held_action: bool,
    #[serde(rename = "creatureId", skip_serializing_if = "Option::is_none")]
    pub creature_id: Option<String>,
}

// Not derived: the default armor class is 10, matching the coercion
// defaults of the lenient field readers below.
impl Default for DocCombatant {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            kind: CombatantKind::default(),
            init: 0,
            dex: 0,
            hp: 0,
            ac: EncounterConfig::DEFAULT_ARMOR_CLASS,
            notes: String::new(),
            tags: Vec::new(),
            conditions: Vec::new(),
            hidden: false,
            is_held_action: false,
            creature_id: None,
        }
    }
}

impl DocCombatant {
    /// Lenient reconstruction from arbitrary JSON. Total: anything that is
    /// not the expected shape collapses to defaults.
    fn from_value(value: &Value) -> Self {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => return Self::default(),
        };

        Self {
            id: lenient_string(obj.get("id")),
            name: lenient_string(obj.get("name")).unwrap_or_default(),
            kind: lenient_string(obj.get("type"))
                .map(|raw| CombatantKind::parse_lenient(&raw))
                .unwrap_or_default(),
            init: lenient_i32(obj.get("init")).unwrap_or(0),
            dex: lenient_i32(obj.get("dex")).unwrap_or(0),
            hp: lenient_i32(obj.get("hp")).unwrap_or(0),
            ac: lenient_i32(obj.get("ac")).unwrap_or(EncounterConfig::DEFAULT_ARMOR_CLASS),
            notes: lenient_string(obj.get("notes")).unwrap_or_default(),
            tags: lenient_string_array(obj.get("tags")),
            conditions: lenient_conditions(obj.get("conditions")),
            hidden: lenient_bool(obj.get("hidden")),
            is_held_action: lenient_bool(obj.get("isHeldAction")),
            creature_id: lenient_string(obj.get("creatureId")),
        }
    }

    fn from_combatant(combatant: &Combatant) -> Self {
        Self {
            id: Some(combatant.id.to_string()),
            name: combatant.name.clone(),
            kind: combatant.kind,
            init: combatant.initiative,
            dex: combatant.dex_modifier,
            hp: combatant.hit_points,
            ac: combatant.armor_class,
            notes: combatant.notes.clone(),
            tags: combatant.tags.clone(),
            conditions: combatant.conditions.clone(),
            hidden: combatant.hidden,
            is_held_action: combatant.is_held_action,
            creature_id: combatant.creature_id.clone(),
        }
    }

    fn into_draft(self) -> CombatantDraft {
        CombatantDraft {
            name: Some(self.name),
            kind: Some(self.kind),
            initiative: Some(self.init),
            dex_modifier: Some(self.dex),
            hit_points: Some(self.hp),
            armor_class: Some(self.ac),
            notes: Some(self.notes),
            tags: Some(self.tags),
            conditions: Some(self.conditions),
            hidden: Some(self.hidden),
            is_held_action: Some(self.is_held_action),
            creature_id: self.creature_id,
        }
    }
}

/// The full encounter document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EncounterDocument {
    pub version: u32,
    #[serde(rename = "encounterName")]
    pub encounter_name: String,
    pub round: u32,
    #[serde(rename = "activeIndex")]
    pub active_index: usize,
    pub combatants: Vec<DocCombatant>,
    pub log: Vec<LogEntry>,
}

impl Default for EncounterDocument {
    fn default() -> Self {
        Self {
            version: EncounterConfig::DOCUMENT_VERSION,
            encounter_name: EncounterConfig::DEFAULT_ENCOUNTER_NAME.to_string(),
            round: EncounterConfig::FIRST_ROUND,
            active_index: 0,
            combatants: Vec::new(),
            log: Vec::new(),
        }
    }
}

impl EncounterDocument {
    /// Validated import entry point. Applies the two hard gates, then
    /// decodes the rest leniently. Live state is never touched here; the
    /// caller feeds the result to `Action::Import` on success.
    pub fn from_value(value: &Value) -> Result<Self, ImportError> {
        let obj = value.as_object().ok_or(ImportError::NotAnObject)?;

        match obj.get("version") {
            None | Some(Value::Null) => return Err(ImportError::MissingVersion),
            Some(_) => {}
        }

        let combatants = match obj.get("combatants") {
            Some(Value::Array(items)) => items.iter().map(DocCombatant::from_value).collect(),
            _ => return Err(ImportError::InvalidCombatants),
        };

        Ok(Self {
            version: lenient_u32(obj.get("version")).unwrap_or(EncounterConfig::DOCUMENT_VERSION),
            encounter_name: lenient_string(obj.get("encounterName"))
                .unwrap_or_else(|| EncounterConfig::DEFAULT_ENCOUNTER_NAME.to_string()),
            round: lenient_u32(obj.get("round"))
                .unwrap_or(EncounterConfig::FIRST_ROUND)
                .max(EncounterConfig::FIRST_ROUND),
            active_index: lenient_u32(obj.get("activeIndex")).unwrap_or(0) as usize,
            combatants,
            log: lenient_log(obj.get("log")),
        })
    }

    /// Snapshot of the live state in wire shape.
    pub fn from_state(state: &EncounterState) -> Self {
        Self {
            version: EncounterConfig::DOCUMENT_VERSION,
            encounter_name: state.encounter_name.clone(),
            round: state.round,
            active_index: state.active_index,
            combatants: state
                .combatants
                .iter()
                .map(DocCombatant::from_combatant)
                .collect(),
            log: state.log.clone(),
        }
    }

    /// Reconstructs an [`EncounterState`] from the document. Sorting and
    /// active-index clamping are the engine's job (the import transition),
    /// not this conversion's.
    pub(crate) fn into_state(self) -> EncounterState {
        let mut state = EncounterState::new();
        state.encounter_name = self.encounter_name;
        state.round = self.round.max(EncounterConfig::FIRST_ROUND);
        state.active_index = self.active_index;
        state.log = self.log;

        for doc in self.combatants {
            let id = match doc.id.as_deref() {
                Some(raw) if !raw.is_empty() => CombatantId::from_raw(raw),
                _ => state.allocate_id(),
            };
            let combatant = Combatant::materialize(id, doc.into_draft());
            state.combatants.push(combatant);
        }

        state
    }
}

// ---------------------------------------------------------------------------
// Lenient field readers
// ---------------------------------------------------------------------------

fn lenient_string(value: Option<&Value>) -> Option<String> {
    value?.as_str().map(str::to_owned)
}

fn lenient_i64(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_i32(value: Option<&Value>) -> Option<i32> {
    lenient_i64(value).map(|n| n.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

fn lenient_u32(value: Option<&Value>) -> Option<u32> {
    lenient_i64(value).map(|n| n.clamp(0, u32::MAX as i64) as u32)
}

fn lenient_bool(value: Option<&Value>) -> bool {
    value.and_then(Value::as_bool).unwrap_or(false)
}

fn lenient_string_array(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect(),
        _ => Vec::new(),
    }
}

fn lenient_conditions(value: Option<&Value>) -> Vec<Condition> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| {
                let obj = item.as_object()?;
                Some(Condition::new(
                    lenient_string(obj.get("name")).unwrap_or_default(),
                    lenient_u32(obj.get("remainingRounds")).unwrap_or(1),
                ))
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn lenient_log(value: Option<&Value>) -> Vec<LogEntry> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| {
                let obj = item.as_object()?;
                Some(LogEntry::new(
                    Timestamp(lenient_i64(obj.get("ts")).unwrap_or(0)),
                    lenient_string(obj.get("msg")).unwrap_or_default(),
                ))
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_object_payloads() {
        assert_eq!(
            EncounterDocument::from_value(&json!([1, 2, 3])),
            Err(ImportError::NotAnObject)
        );
        assert_eq!(
            EncounterDocument::from_value(&json!("nope")),
            Err(ImportError::NotAnObject)
        );
    }

    #[test]
    fn rejects_missing_version() {
        assert_eq!(
            EncounterDocument::from_value(&json!({ "combatants": [] })),
            Err(ImportError::MissingVersion)
        );
        assert_eq!(
            EncounterDocument::from_value(&json!({ "version": null, "combatants": [] })),
            Err(ImportError::MissingVersion)
        );
    }

    #[test]
    fn rejects_non_array_combatants() {
        assert_eq!(
            EncounterDocument::from_value(&json!({ "version": 1 })),
            Err(ImportError::InvalidCombatants)
        );
        assert_eq!(
            EncounterDocument::from_value(&json!({ "version": 1, "combatants": {} })),
            Err(ImportError::InvalidCombatants)
        );
    }

    #[test]
    fn coerces_malformed_fields_instead_of_failing() {
        let doc = EncounterDocument::from_value(&json!({
            "version": 1,
            "round": "not a number",
            "activeIndex": -3,
            "combatants": [
                {
                    "id": "c-00000001",
                    "name": "Goblin",
                    "type": "Gremlin",
                    "init": "12",
                    "dex": { "bogus": true },
                    "hp": 7.9,
                    "tags": ["ambusher", 42],
                    "conditions": [{ "name": "Poisoned", "remainingRounds": 0 }]
                },
                "not even an object"
            ]
        }))
        .expect("payload passes the hard gates");

        assert_eq!(doc.round, 1);
        assert_eq!(doc.active_index, 0);
        assert_eq!(doc.combatants.len(), 2);

        let goblin = &doc.combatants[0];
        assert_eq!(goblin.kind, CombatantKind::Pc); // unknown type falls back
        assert_eq!(goblin.init, 12); // numeric string accepted
        assert_eq!(goblin.dex, 0);
        assert_eq!(goblin.hp, 7); // fractional truncated
        assert_eq!(goblin.tags, vec!["ambusher".to_string()]);
        assert_eq!(goblin.conditions[0].remaining_rounds, 1);

        // The junk entry collapses to an all-defaults combatant, with the
        // same armor class default an object entry would get.
        assert_eq!(doc.combatants[1], DocCombatant::default());
        assert_eq!(doc.combatants[1].ac, EncounterConfig::DEFAULT_ARMOR_CLASS);
    }

    #[test]
    fn export_uses_wire_field_names() {
        let mut state = EncounterState::new();
        let mut engine = crate::EncounterEngine::new(&mut state);
        engine.apply(
            crate::Action::AddCombatant(
                CombatantDraft::named("Orc")
                    .with_kind(CombatantKind::Monster)
                    .with_initiative(12)
                    .with_dex_modifier(1),
            ),
            Timestamp::ZERO,
        );

        let value = serde_json::to_value(EncounterDocument::from_state(&state)).unwrap();
        let combatant = &value["combatants"][0];
        assert_eq!(combatant["type"], "Monster");
        assert_eq!(combatant["init"], 12);
        assert_eq!(combatant["dex"], 1);
        assert_eq!(combatant["ac"], 10);
        assert!(combatant["isHeldAction"].is_boolean());
        assert!(combatant.get("creatureId").is_none());
        assert_eq!(value["encounterName"], "New Encounter");
        assert_eq!(value["log"][0]["msg"], "Added Orc");
    }
}
