//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
///
/// All rolling-window math in the engine goes through
/// [`Timestamp::secs_since_saturating`] so that out-of-order or skewed
/// timestamps can never produce negative deltas.
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

    /// Creates a timestamp from Unix seconds.
    pub fn from_unix_secs(secs: u64) -> Self {
        use chrono::TimeZone;
        Self(Utc.timestamp_opt(secs as i64, 0).unwrap())
    }

    /// Returns the timestamp as Unix seconds.
    pub fn as_unix_secs(&self) -> u64 {
        self.0.timestamp() as u64
    }

    /// Creates a new timestamp by adding the specified number of seconds.
    pub fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0 + Duration::seconds(secs as i64))
    }

    /// Creates a new timestamp by subtracting the specified number of seconds.
    pub fn minus_secs(&self, secs: u64) -> Self {
        Self(self.0 - Duration::seconds(secs as i64))
    }

    /// Whole seconds elapsed from `earlier` to this timestamp, clamped at zero.
    ///
    /// Clock skew or test injection can hand the engine a timestamp that
    /// precedes an already-recorded one; the windows treat that delta as
    /// zero rather than underflowing.
    pub fn secs_since_saturating(&self, earlier: &Timestamp) -> u64 {
        let delta = self.0.signed_duration_since(earlier.0).num_seconds();
        if delta < 0 {
            0
        } else {
            delta as u64
        }
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_from_unix_secs_roundtrips() {
        let unix_secs = 1705276800_u64;
        let ts = Timestamp::from_unix_secs(unix_secs);
        assert_eq!(ts.as_unix_secs(), unix_secs);
    }

    #[test]
    fn timestamp_plus_secs_adds_correctly() {
        let ts1 = Timestamp::from_unix_secs(1000);
        let ts2 = ts1.plus_secs(60);
        assert_eq!(ts2.as_unix_secs(), 1060);
    }

    #[test]
    fn timestamp_minus_secs_subtracts_correctly() {
        let ts1 = Timestamp::from_unix_secs(1000);
        let ts2 = ts1.minus_secs(300);
        assert_eq!(ts2.as_unix_secs(), 700);
    }

    #[test]
    fn secs_since_saturating_returns_elapsed_seconds() {
        let earlier = Timestamp::from_unix_secs(1000);
        let later = Timestamp::from_unix_secs(1059);
        assert_eq!(later.secs_since_saturating(&earlier), 59);
    }

    #[test]
    fn secs_since_saturating_clamps_negative_delta_to_zero() {
        let earlier = Timestamp::from_unix_secs(1000);
        let later = Timestamp::from_unix_secs(2000);
        // Reversed arguments simulate clock skew.
        assert_eq!(earlier.secs_since_saturating(&later), 0);
    }

    #[test]
    fn timestamp_serializes_to_rfc3339_json() {
        let ts = Timestamp::from_unix_secs(1705276800);
        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("2024-01-15"));
    }

    #[test]
    fn timestamp_ordering_works() {
        let ts1 = Timestamp::from_unix_secs(100);
        let ts2 = Timestamp::from_unix_secs(200);
        assert!(ts1 < ts2);
        assert!(ts2 > ts1);
    }
}
