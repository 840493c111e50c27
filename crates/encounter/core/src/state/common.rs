use std::fmt;
use std::str::FromStr;

/// Unique identifier for a combatant within an encounter.
///
/// Ids are opaque strings: locally allocated ids come from the encounter's
/// monotonic allocator (rendered zero-padded so lexicographic order equals
/// allocation order), while imported ids may be arbitrary strings. The
/// lexicographic ordering doubles as the final turn-order tie-break, so it
/// must be total and deterministic.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CombatantId(String);

impl CombatantId {
    /// Renders the id for a locally allocated sequence number.
    pub(crate) fn from_sequence(sequence: u64) -> Self {
        Self(format!("c-{sequence:08}"))
    }

    /// Wraps an externally supplied id verbatim (import path).
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Extracts the sequence number if this id uses the local format.
    ///
    /// Foreign ids (arbitrary import strings) return `None` and never
    /// influence the allocator.
    pub(crate) fn sequence(&self) -> Option<u64> {
        self.0.strip_prefix("c-")?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Broad participant category. Carries no core semantics beyond labeling;
/// the wire format spells these `"PC"`, `"NPC"`, and `"Monster"`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatantKind {
    #[default]
    #[strum(serialize = "PC")]
    #[cfg_attr(feature = "serde", serde(rename = "PC"))]
    Pc,
    #[strum(serialize = "NPC")]
    #[cfg_attr(feature = "serde", serde(rename = "NPC"))]
    Npc,
    #[strum(serialize = "Monster")]
    #[cfg_attr(feature = "serde", serde(rename = "Monster"))]
    Monster,
}

impl CombatantKind {
    /// Best-effort parse for lenient input paths. Unknown strings fall back
    /// to the default kind rather than failing.
    pub fn parse_lenient(raw: &str) -> Self {
        Self::from_str(raw).unwrap_or_default()
    }
}

/// Epoch milliseconds, supplied by the caller of every logging transition.
///
/// The reducer never reads wall-clock time itself; timestamps exist only so
/// log entries are meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const ZERO: Self = Self(0);

    pub fn new(epoch_ms: i64) -> Self {
        Self(epoch_ms)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One append-only log line recording a notable transition.
///
/// Informational only: no transition ever reads the log back.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub ts: Timestamp,
    pub msg: String,
}

impl LogEntry {
    pub fn new(ts: Timestamp, msg: impl Into<String>) -> Self {
        Self {
            ts,
            msg: msg.into(),
        }
    }
}
