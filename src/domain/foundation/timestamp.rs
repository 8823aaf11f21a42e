//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Immutable point in time, always UTC.
///
/// On the wire a timestamp is either RFC 3339 (`2024-01-04T10:00:00Z`) or a
/// bare calendar date (`2024-01-04`, read as midnight UTC). It is always
/// written back as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp at midnight UTC of the given calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .map(Self)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "date",
                    format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
                )
            })
    }

    /// Parses an RFC 3339 timestamp or a `YYYY-MM-DD` date.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self(naive.and_utc()))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "date",
                    format!("'{}' is neither RFC 3339 nor YYYY-MM-DD", value),
                )
            })
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Returns the elapsed time from `earlier` to this timestamp in
    /// fractional days. Negative if `earlier` is actually later.
    pub fn days_since(&self, earlier: &Timestamp) -> f64 {
        self.0.signed_duration_since(earlier.0).num_milliseconds() as f64 / MILLIS_PER_DAY
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Creates a new timestamp by adding the specified number of days.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new timestamp by adding the specified number of milliseconds.
    pub fn plus_millis(&self, millis: i64) -> Self {
        Self(self.0 + Duration::milliseconds(millis))
    }

    /// Truncates to midnight UTC of the same day.
    pub fn start_of_day(&self) -> Self {
        let midnight = self
            .0
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc())
            .unwrap_or(self.0);
        Self(midnight)
    }

    /// Calendar month bucket key in UTC, e.g. `2024-03`.
    pub fn year_month(&self) -> String {
        format!("{:04}-{:02}", self.0.year(), self.0.month())
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl TryFrom<String> for Timestamp {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.0.to_rfc3339()
    }
}
