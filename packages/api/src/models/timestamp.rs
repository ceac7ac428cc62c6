//! Serde helpers for backend timestamps.
//!
//! The backend emits naive ISO-8601 timestamps (`2025-03-01T18:30:00` or with
//! microseconds) that are UTC by convention. RFC 3339 values with an offset are
//! accepted as well. Outgoing timestamps use the browser's `toISOString` shape
//! (`2025-03-01T18:30:00.000Z`).

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Parse a backend timestamp, treating offset-less values as UTC.
pub fn parse(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Format the way `Date.prototype.toISOString` does.
pub fn format(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(dt))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_naive_is_utc() {
        let dt = parse("2025-03-01T18:30:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 3, 1, 18, 30, 0).unwrap());
    }

    #[test]
    fn test_microseconds_and_offsets() {
        let micro = parse("2025-03-01T18:30:00.123456").unwrap();
        assert_eq!(micro.timestamp_subsec_micros(), 123456);

        let offset = parse("2025-03-01T20:30:00+02:00").unwrap();
        assert_eq!(offset, Utc.with_ymd_and_hms(2025, 3, 1, 18, 30, 0).unwrap());

        let zulu = parse("2025-03-01T18:30:00.000Z").unwrap();
        assert_eq!(zulu, offset);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse("tomorrow").is_none());
        assert!(parse("").is_none());
    }

    #[test]
    fn test_format_matches_iso_string() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 1, 18, 30, 0).unwrap();
        assert_eq!(format(&dt), "2025-03-01T18:30:00.000Z");
    }
}
