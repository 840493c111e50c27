/// Encounter configuration constants.
///
/// The tracker deliberately has almost no tunables: defaults here are the
/// substitution values used by the permissive combatant construction path
/// and the initial-state values used by reset/import.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncounterConfig;

impl EncounterConfig {
    /// Armor class substituted when input omits or mangles the field.
    pub const DEFAULT_ARMOR_CLASS: i32 = 10;

    /// Name given to a freshly created (or cleared) encounter.
    pub const DEFAULT_ENCOUNTER_NAME: &'static str = "New Encounter";

    /// Rounds are 1-based; a new encounter starts here.
    pub const FIRST_ROUND: u32 = 1;

    /// Version stamped on exported encounter documents.
    pub const DOCUMENT_VERSION: u32 = 1;
}
