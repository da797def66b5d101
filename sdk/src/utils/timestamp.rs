use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub const UTC_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A timestamp with second precision, matching the `iat`/`exp` claims
/// carried by the identity token.
///
/// This struct uses `SystemTime` from `std::time` crate.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct CoveraTimestamp(SystemTime);

impl CoveraTimestamp {
    pub fn now() -> Self {
        CoveraTimestamp::default()
    }

    pub fn to_secs(&self) -> u64 {
        self.0.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs()
    }

    pub fn to_utc_string(&self, format: &str) -> String {
        DateTime::<Utc>::from(self.0).format(format).to_string()
    }
}

impl From<u64> for CoveraTimestamp {
    fn from(seconds: u64) -> Self {
        CoveraTimestamp(UNIX_EPOCH + Duration::from_secs(seconds))
    }
}

impl Default for CoveraTimestamp {
    fn default() -> Self {
        CoveraTimestamp(SystemTime::now())
    }
}

impl std::fmt::Display for CoveraTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_utc_string(UTC_TIME_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_seconds_round_trip() {
        let timestamp = CoveraTimestamp::from(1694968446);
        assert_eq!(timestamp.to_secs(), 1694968446);
    }

    #[test]
    fn should_format_as_utc_string() {
        let timestamp = CoveraTimestamp::from(1694968446);
        assert_eq!(timestamp.to_utc_string(UTC_TIME_FORMAT), "2023-09-17 16:34:06");
    }
}
