use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::transition::normalize_key;
use crate::error::RecordError;

/// Instant at which a key was sampled, always normalized to UTC
pub type Timestamp = DateTime<Utc>;

/// One sighting of a DNSKEY in a zone
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    /// Key identifier
    pub key: String,

    /// When the key was seen
    pub timestamp: Timestamp,
}

impl Observation {
    /// Create an observation
    pub fn new(key: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            key: key.into(),
            timestamp,
        }
    }
}

/// Observation as it arrives from an input file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObservation {
    /// Key identifier
    #[serde(default)]
    pub key: Option<String>,

    /// Timestamp text, see [`parse_timestamp`] for accepted forms
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl TryFrom<RawObservation> for Observation {
    type Error = RecordError;

    fn try_from(raw: RawObservation) -> Result<Self, Self::Error> {
        let key = normalize_key(raw.key).ok_or(RecordError::MissingKey)?;
        let text = raw
            .timestamp
            .filter(|t| !t.trim().is_empty())
            .ok_or(RecordError::MissingTimestamp)?;
        let timestamp = parse_timestamp(&text).ok_or(RecordError::InvalidTimestamp(text))?;

        Ok(Self { key, timestamp })
    }
}

/// Parse a timestamp in one of the accepted input forms.
///
/// Accepted, in order:
/// - RFC 3339 with any offset (`2024-01-01T12:00:00+02:00`), converted to UTC
/// - naive date-time (`2024-01-01T12:00:00` or `2024-01-01 12:00:00`,
///   optional fractional seconds), taken as UTC
/// - bare date (`2024-01-01`), taken as midnight UTC
#[must_use]
pub fn parse_timestamp(input: &str) -> Option<Timestamp> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_bare_date() {
        let ts = parse_timestamp("2024-04-10").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 4, 10, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_normalizes_offset() {
        let ts = parse_timestamp("2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_datetime() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 7, 13, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2024-05-07T13:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-07 13:30:00"), Some(expected));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_timestamp("last tuesday"), None);
        assert_eq!(parse_timestamp("2024-13-01"), None);
    }

    #[test]
    fn test_raw_observation_validation() {
        let ok = Observation::try_from(RawObservation {
            key: Some("key1".into()),
            timestamp: Some("2024-01-15".into()),
        })
        .unwrap();
        assert_eq!(ok.key, "key1");

        let missing_ts = Observation::try_from(RawObservation {
            key: Some("key1".into()),
            timestamp: Some("  ".into()),
        });
        assert_eq!(missing_ts.unwrap_err(), RecordError::MissingTimestamp);

        let missing_key = Observation::try_from(RawObservation {
            key: None,
            timestamp: Some("2024-01-15".into()),
        });
        assert_eq!(missing_key.unwrap_err(), RecordError::MissingKey);

        let bad_ts = Observation::try_from(RawObservation {
            key: Some("key1".into()),
            timestamp: Some("soon".into()),
        });
        assert_eq!(
            bad_ts.unwrap_err(),
            RecordError::InvalidTimestamp("soon".into())
        );
    }
}
