//! Behavioural properties of the classifier and lifetime builder.

use chrono::{Duration, TimeZone, Utc};
use keylife_core::{
    Classification, LifetimeBuilder, LifetimeInterval, Observation, RawObservation,
    TransitionClassifier, TransitionRecord,
};
use proptest::prelude::*;

fn date(year: i32, month: u32, day: u32) -> keylife_core::Timestamp {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn raw(key: &str, timestamp: &str) -> RawObservation {
    RawObservation {
        key: Some(key.to_string()),
        timestamp: Some(timestamp.to_string()),
    }
}

#[test]
fn three_key_rollover_scenario() {
    let intervals = LifetimeBuilder::build_raw(vec![
        raw("key1", "2024-01-01"),
        raw("key1", "2024-01-15"),
        raw("key2", "2024-04-10"),
        raw("key2", "2024-04-20"),
        raw("key3", "2024-05-07"),
        raw("key3", "2024-08-10"),
    ])
    .unwrap();

    let expected = vec![
        LifetimeInterval {
            key: "key1".into(),
            start_time: date(2024, 1, 1),
            end_time: date(2024, 1, 15),
        },
        LifetimeInterval {
            key: "key2".into(),
            start_time: date(2024, 4, 10),
            end_time: date(2024, 4, 20),
        },
        LifetimeInterval {
            key: "key3".into(),
            start_time: date(2024, 5, 7),
            end_time: date(2024, 8, 10),
        },
    ];
    assert_eq!(intervals, expected);
}

#[test]
fn single_observation_yields_point_interval() {
    let t = date(2024, 3, 3);
    let intervals = LifetimeBuilder::build(&[Observation::new("key1", t)]);
    assert_eq!(
        intervals,
        vec![LifetimeInterval {
            key: "key1".into(),
            start_time: t,
            end_time: t,
        }]
    );
}

#[test]
fn out_of_order_input_is_sorted_first() {
    let intervals = LifetimeBuilder::build_raw(vec![
        raw("key2", "2024-04-20"),
        raw("key1", "2024-01-15"),
        raw("key2", "2024-04-10"),
        raw("key1", "2024-01-01"),
    ])
    .unwrap();

    assert_eq!(intervals.len(), 2);
    assert_eq!(intervals[0].key, "key1");
    assert_eq!(intervals[0].start_time, date(2024, 1, 1));
    assert_eq!(intervals[0].end_time, date(2024, 1, 15));
    assert_eq!(intervals[1].key, "key2");
    assert_eq!(intervals[1].start_time, date(2024, 4, 10));
    assert_eq!(intervals[1].end_time, date(2024, 4, 20));
}

#[test]
fn empty_inputs_are_not_errors() {
    assert!(TransitionClassifier::classify_all(&[]).is_empty());
    assert!(TransitionClassifier::classify_raw(Vec::new()).unwrap().is_empty());
    assert!(LifetimeBuilder::build(&[]).is_empty());
}

#[test]
fn documented_classifications() {
    let results = TransitionClassifier::classify_all(&[
        TransitionRecord::new("a", 2, false),
        TransitionRecord::new("b", 1, true),
        TransitionRecord::new("c", 0, false),
        TransitionRecord::new("d", 0, true),
    ]);
    let labels: Vec<Classification> = results.iter().map(|r| r.classification).collect();
    assert_eq!(
        labels,
        [
            Classification::MultiSignature,
            Classification::CoPresent,
            Classification::Unknown,
            Classification::Cutover,
        ]
    );
}

fn arb_transition() -> impl Strategy<Value = TransitionRecord> {
    ("[a-z]{1,6}", 0u32..5, any::<bool>())
        .prop_map(|(key, overlap, cutover)| TransitionRecord::new(key, overlap, cutover))
}

/// Observations drawn from a small key alphabet over roughly a year.
fn arb_observations() -> impl Strategy<Value = Vec<Observation>> {
    prop::collection::vec((0usize..3, 0i64..365), 0..40).prop_map(|samples| {
        let base = date(2024, 1, 1);
        samples
            .into_iter()
            .map(|(key, offset)| Observation::new(["A", "B", "C"][key], base + Duration::days(offset)))
            .collect()
    })
}

/// Number of maximal same-key runs in an already time-sorted sequence.
fn count_runs(sorted: &[Observation]) -> usize {
    sorted
        .iter()
        .enumerate()
        .filter(|(i, obs)| *i == 0 || sorted[i - 1].key != obs.key)
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn classification_is_positional(records in prop::collection::vec(arb_transition(), 0..50)) {
        let results = TransitionClassifier::classify_all(&records);
        prop_assert_eq!(results.len(), records.len());
        for (record, result) in records.iter().zip(&results) {
            prop_assert_eq!(&record.key, &result.key);
        }
    }

    #[test]
    fn intervals_are_well_formed(observations in arb_observations()) {
        for interval in LifetimeBuilder::build(&observations) {
            prop_assert!(interval.start_time <= interval.end_time);
        }
    }

    #[test]
    fn interval_count_matches_runs(observations in arb_observations()) {
        let mut sorted = observations.clone();
        sorted.sort_by_key(|obs| obs.timestamp);

        let intervals = LifetimeBuilder::build(&observations);
        prop_assert_eq!(intervals.len(), count_runs(&sorted));
    }

    #[test]
    fn every_observation_is_covered(observations in arb_observations()) {
        let intervals = LifetimeBuilder::build(&observations);
        for obs in &observations {
            prop_assert!(intervals
                .iter()
                .any(|i| i.key == obs.key && i.contains(obs.timestamp)));
        }
    }
}
