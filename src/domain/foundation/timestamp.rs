//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Calendar date in `YYYY-MM-DD` form, used in export file names.
    pub fn date_stamp(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// RFC 3339 representation with millisecond precision.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn fixed() -> Timestamp {
        let dt = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Timestamp::from_datetime(dt)
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_date_stamp_is_calendar_date() {
        assert_eq!(fixed().date_stamp(), "2024-01-15");
    }

    #[test]
    fn timestamp_displays_as_rfc3339() {
        assert_eq!(fixed().to_string(), "2024-01-15T10:30:00.000Z");
    }

    #[test]
    fn timestamp_roundtrips_through_json() {
        let ts = fixed();
        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("2024-01-15"));

        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_datetime().year(), 2024);
        assert_eq!(back, ts);
    }
}
