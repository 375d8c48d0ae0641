use thiserror::Error;

/// Result type alias for key-lifecycle operations
pub type Result<T> = std::result::Result<T, KeylifeError>;

/// Errors that can occur while analysing key-lifecycle records
#[derive(Error, Debug)]
pub enum KeylifeError {
    /// A boundary record failed validation
    #[error("invalid record at index {index}")]
    InvalidRecord {
        /// Position of the offending record in the input sequence
        index: usize,
        /// What was wrong with it
        #[source]
        source: RecordError,
    },
}

impl KeylifeError {
    /// Index of the offending record, if the error refers to one
    #[must_use]
    pub const fn record_index(&self) -> Option<usize> {
        match self {
            Self::InvalidRecord { index, .. } => Some(*index),
        }
    }
}

/// Reasons a single record is rejected at the boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Key identifier absent or blank
    #[error("missing key identifier")]
    MissingKey,

    /// Overlap count absent from a transition record
    #[error("missing overlap_count")]
    MissingOverlapCount,

    /// Overlap count below zero
    #[error("overlap_count must be non-negative, got {0}")]
    NegativeOverlapCount(i64),

    /// Overlap count does not fit the record's counter
    #[error("overlap_count {0} is out of range")]
    OverlapCountOutOfRange(i64),

    /// Timestamp absent from an observation
    #[error("missing timestamp")]
    MissingTimestamp,

    /// Timestamp present but not in a recognised format
    #[error("unrecognised timestamp: {0:?}")]
    InvalidTimestamp(String),
}

impl RecordError {
    /// Attach the record's input position
    #[must_use]
    pub const fn at(self, index: usize) -> KeylifeError {
        KeylifeError::InvalidRecord {
            index,
            source: self,
        }
    }
}
