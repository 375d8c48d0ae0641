use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RecordError;

/// One observed key transition within a zone
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Key identifier (key tag, label, or any caller-chosen name)
    pub key: String,

    /// How many other keys were published alongside this one
    pub overlap_count: u32,

    /// Whether the transition was an abrupt swap with no overlap window
    #[serde(default)]
    pub cutover: bool,
}

impl TransitionRecord {
    /// Create a transition record
    pub fn new(key: impl Into<String>, overlap_count: u32, cutover: bool) -> Self {
        Self {
            key: key.into(),
            overlap_count,
            cutover,
        }
    }
}

/// Transition record as it arrives from an input file
///
/// Every field is optional so that malformed rows can be reported with a
/// precise reason instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransitionRecord {
    /// Key identifier
    #[serde(default)]
    pub key: Option<String>,

    /// Overlap count, signed so negative values can be rejected explicitly
    #[serde(default, alias = "overlap")]
    pub overlap_count: Option<i64>,

    /// Cutover flag, absent means `false`
    #[serde(default)]
    pub cutover: Option<bool>,
}

impl TryFrom<RawTransitionRecord> for TransitionRecord {
    type Error = RecordError;

    fn try_from(raw: RawTransitionRecord) -> Result<Self, Self::Error> {
        let key = normalize_key(raw.key).ok_or(RecordError::MissingKey)?;
        let overlap = raw.overlap_count.ok_or(RecordError::MissingOverlapCount)?;
        if overlap < 0 {
            return Err(RecordError::NegativeOverlapCount(overlap));
        }
        let overlap_count =
            u32::try_from(overlap).map_err(|_| RecordError::OverlapCountOutOfRange(overlap))?;

        Ok(Self {
            key,
            overlap_count,
            cutover: raw.cutover.unwrap_or(false),
        })
    }
}

/// Overlap pattern label for a key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Classification {
    /// Several keys signed the zone at once (double-signature style rollover)
    MultiSignature,
    /// Old and new key were published together (pre-publish style rollover)
    CoPresent,
    /// Hard swap from one key to the next
    Cutover,
    /// No recognisable pattern
    Unknown,
}

impl Classification {
    /// All labels in rule priority order
    pub const ALL: [Self; 4] = [
        Self::MultiSignature,
        Self::CoPresent,
        Self::Cutover,
        Self::Unknown,
    ];

    /// Label as written in serialized output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MultiSignature => "MultiSignature",
            Self::CoPresent => "CoPresent",
            Self::Cutover => "Cutover",
            Self::Unknown => "Unknown",
        }
    }

    /// Human-readable description of the rule that produces this label
    #[must_use]
    pub const fn rule(self) -> &'static str {
        match self {
            Self::MultiSignature => "overlap_count > 1",
            Self::CoPresent => "overlap_count == 1",
            Self::Cutover => "cutover == true",
            Self::Unknown => "no rule matched",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a single transition record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Key identifier copied from the input record
    pub key: String,

    /// Assigned label
    pub classification: Classification,
}

/// Trim a key and treat blank strings as absent
pub(crate) fn normalize_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}
