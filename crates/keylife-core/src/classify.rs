//! Key-transition classification.
//!
//! Each transition is labelled by the first matching rule:
//!
//! | Priority | Condition            | Label            |
//! |----------|----------------------|------------------|
//! | 1        | `overlap_count > 1`  | `MultiSignature` |
//! | 2        | `overlap_count == 1` | `CoPresent`      |
//! | 3        | `cutover`            | `Cutover`        |
//! | 4        | otherwise            | `Unknown`        |
//!
//! The overlap rules outrank the cutover flag: a record with one overlapping
//! key and `cutover = true` is `CoPresent`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::types::{Classification, ClassificationResult, RawTransitionRecord, TransitionRecord};

/// Label a single transition record.
#[must_use]
pub const fn classify(record: &TransitionRecord) -> Classification {
    // Arm order is rule priority.
    match (record.overlap_count, record.cutover) {
        (n, _) if n > 1 => Classification::MultiSignature,
        (1, _) => Classification::CoPresent,
        (_, true) => Classification::Cutover,
        _ => Classification::Unknown,
    }
}

/// Maps sequences of transition records to classification results.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionClassifier;

impl TransitionClassifier {
    /// Classify every record, preserving input order.
    #[must_use]
    pub fn classify_all(records: &[TransitionRecord]) -> Vec<ClassificationResult> {
        debug!(records = records.len(), "classifying key transitions");

        records
            .iter()
            .map(|record| ClassificationResult {
                key: record.key.clone(),
                classification: classify(record),
            })
            .collect()
    }

    /// Validate boundary records, then classify them.
    ///
    /// Fails on the first invalid record without classifying any.
    pub fn classify_raw(records: Vec<RawTransitionRecord>) -> Result<Vec<ClassificationResult>> {
        let validated = records
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                TransitionRecord::try_from(raw).map_err(|reason| {
                    debug!(index, error = %reason, "rejecting transition record");
                    reason.at(index)
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::classify_all(&validated))
    }
}

/// Number of results per classification label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    /// Total results counted
    pub total: usize,
    /// `MultiSignature` results
    pub multi_signature: usize,
    /// `CoPresent` results
    pub co_present: usize,
    /// `Cutover` results
    pub cutover: usize,
    /// `Unknown` results
    pub unknown: usize,
}

impl ClassificationSummary {
    /// Tally a slice of results
    #[must_use]
    pub fn from_results(results: &[ClassificationResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, result| {
            acc.total += 1;
            match result.classification {
                Classification::MultiSignature => acc.multi_signature += 1,
                Classification::CoPresent => acc.co_present += 1,
                Classification::Cutover => acc.cutover += 1,
                Classification::Unknown => acc.unknown += 1,
            }
            acc
        })
    }

    /// Count for a single label
    #[must_use]
    pub const fn count(&self, classification: Classification) -> usize {
        match classification {
            Classification::MultiSignature => self.multi_signature,
            Classification::CoPresent => self.co_present,
            Classification::Cutover => self.cutover,
            Classification::Unknown => self.unknown,
        }
    }
}
