use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::observation::{Observation, Timestamp};

/// Continuous span during which a key was observed without interruption
///
/// Invariant: `start_time <= end_time`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LifetimeInterval {
    /// Key identifier
    pub key: String,

    /// First observation of the run
    pub start_time: Timestamp,

    /// Last observation of the run
    pub end_time: Timestamp,
}

impl LifetimeInterval {
    /// Open a new interval at a single observation
    #[must_use]
    pub fn open(observation: &Observation) -> Self {
        Self {
            key: observation.key.clone(),
            start_time: observation.timestamp,
            end_time: observation.timestamp,
        }
    }

    /// Return this interval stretched to cover `timestamp`
    #[must_use]
    pub fn extended_to(self, timestamp: Timestamp) -> Self {
        Self {
            start_time: self.start_time.min(timestamp),
            end_time: self.end_time.max(timestamp),
            ..self
        }
    }

    /// Length of the interval
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Whether `timestamp` falls within the interval, bounds inclusive
    #[must_use]
    pub fn contains(&self, timestamp: Timestamp) -> bool {
        self.start_time <= timestamp && timestamp <= self.end_time
    }
}
