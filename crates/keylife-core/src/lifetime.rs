//! Key-lifetime reconstruction ("bridge/bust/bind").
//!
//! Observations are stable-sorted by timestamp, then scanned once:
//!
//! - **bridge**: the next observation has the open interval's key, so the
//!   interval is stretched to cover it
//! - **bust**: the key changed, so the open interval is emitted
//! - **bind**: a new interval is opened at the observation that changed it
//!
//! Grouping follows adjacency in time, not key identity. A key that is
//! replaced and later re-published yields one interval per session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::types::{LifetimeInterval, Observation, RawObservation, Timestamp};

/// Builds lifetime intervals from DNSKEY observations.
#[derive(Debug, Clone, Copy, Default)]
pub struct LifetimeBuilder;

impl LifetimeBuilder {
    /// Merge observations into per-session lifetime intervals.
    ///
    /// Input order does not matter except between observations sharing a
    /// timestamp, which keep their relative order.
    #[must_use]
    pub fn build(observations: &[Observation]) -> Vec<LifetimeInterval> {
        let mut sorted: Vec<&Observation> = observations.iter().collect();
        // `sort_by_key` is stable.
        sorted.sort_by_key(|obs| obs.timestamp);

        let mut intervals = Vec::new();
        let mut open: Option<LifetimeInterval> = None;

        for obs in sorted {
            open = Some(match open.take() {
                Some(current) if current.key == obs.key => current.extended_to(obs.timestamp),
                Some(current) => {
                    intervals.push(current);
                    LifetimeInterval::open(obs)
                }
                None => LifetimeInterval::open(obs),
            });
        }
        intervals.extend(open);

        debug!(
            observations = observations.len(),
            intervals = intervals.len(),
            "built key lifetimes"
        );
        intervals
    }

    /// Validate boundary observations, then build intervals.
    ///
    /// Fails on the first invalid observation without building any.
    pub fn build_raw(observations: Vec<RawObservation>) -> Result<Vec<LifetimeInterval>> {
        let validated = observations
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                Observation::try_from(raw).map_err(|reason| {
                    debug!(index, error = %reason, "rejecting observation");
                    reason.at(index)
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::build(&validated))
    }

    /// Group intervals by key, keeping each key's sessions in input order.
    #[must_use]
    pub fn sessions_by_key(intervals: &[LifetimeInterval]) -> BTreeMap<&str, Vec<&LifetimeInterval>> {
        let mut sessions: BTreeMap<&str, Vec<&LifetimeInterval>> = BTreeMap::new();
        for interval in intervals {
            sessions.entry(interval.key.as_str()).or_default().push(interval);
        }
        sessions
    }
}

/// Aggregate view over a set of lifetime intervals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeSummary {
    /// Number of intervals
    pub intervals: usize,

    /// Number of distinct keys
    pub distinct_keys: usize,

    /// Keys with more than one session, sorted
    pub reappearing_keys: Vec<String>,

    /// Earliest start across all intervals
    pub earliest: Option<Timestamp>,

    /// Latest end across all intervals
    pub latest: Option<Timestamp>,
}

impl LifetimeSummary {
    /// Summarize a slice of intervals
    #[must_use]
    pub fn from_intervals(intervals: &[LifetimeInterval]) -> Self {
        let sessions = LifetimeBuilder::sessions_by_key(intervals);

        Self {
            intervals: intervals.len(),
            distinct_keys: sessions.len(),
            reappearing_keys: sessions
                .iter()
                .filter(|(_, runs)| runs.len() > 1)
                .map(|(key, _)| (*key).to_string())
                .collect(),
            earliest: intervals.iter().map(|i| i.start_time).min(),
            latest: intervals.iter().map(|i| i.end_time).max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(month: u32, day: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, month, day, 0, 0, 0).unwrap()
    }

    fn obs(key: &str, month: u32, day: u32) -> Observation {
        Observation::new(key, at(month, day))
    }

    #[test]
    fn test_empty_input() {
        assert!(LifetimeBuilder::build(&[]).is_empty());
        assert!(LifetimeBuilder::build_raw(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_bridge_and_bust() {
        let intervals = LifetimeBuilder::build(&[
            obs("key1", 1, 1),
            obs("key1", 1, 15),
            obs("key2", 4, 10),
        ]);

        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].key, "key1");
        assert_eq!(intervals[0].start_time, at(1, 1));
        assert_eq!(intervals[0].end_time, at(1, 15));
        assert_eq!(intervals[1].start_time, intervals[1].end_time);
    }

    #[test]
    fn test_reintroduced_key_gets_second_session() {
        let intervals = LifetimeBuilder::build(&[
            obs("A", 1, 1),
            obs("B", 2, 1),
            obs("A", 3, 1),
            obs("A", 3, 5),
        ]);

        let keys: Vec<&str> = intervals.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, ["A", "B", "A"]);
        assert_eq!(intervals[2].start_time, at(3, 1));
        assert_eq!(intervals[2].end_time, at(3, 5));

        let summary = LifetimeSummary::from_intervals(&intervals);
        assert_eq!(summary.intervals, 3);
        assert_eq!(summary.distinct_keys, 2);
        assert_eq!(summary.reappearing_keys, vec!["A".to_string()]);
        assert_eq!(summary.earliest, Some(at(1, 1)));
        assert_eq!(summary.latest, Some(at(3, 5)));
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let intervals = LifetimeBuilder::build(&[
            obs("A", 1, 1),
            obs("B", 1, 1),
            obs("A", 1, 1),
        ]);

        let keys: Vec<&str> = intervals.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, ["A", "B", "A"]);
    }

    #[test]
    fn test_sessions_by_key() {
        let intervals = LifetimeBuilder::build(&[obs("A", 1, 1), obs("B", 2, 1), obs("A", 3, 1)]);
        let sessions = LifetimeBuilder::sessions_by_key(&intervals);

        assert_eq!(sessions["A"].len(), 2);
        assert_eq!(sessions["B"].len(), 1);
    }

    #[test]
    fn test_build_raw_rejects_bad_timestamp() {
        let err = LifetimeBuilder::build_raw(vec![
            RawObservation {
                key: Some("key1".into()),
                timestamp: Some("2024-01-01".into()),
            },
            RawObservation {
                key: Some("key1".into()),
                timestamp: None,
            },
        ])
        .unwrap_err();

        assert_eq!(err.record_index(), Some(1));
    }
}
