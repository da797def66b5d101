use humantime::format_duration;
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
    time::Duration,
};

/// A duration wrapper which parses and renders human-readable values
/// such as `10s` or `5m`, used for the poll interval configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoveraDuration {
    duration: Duration,
}

impl CoveraDuration {
    pub fn new(duration: Duration) -> CoveraDuration {
        CoveraDuration { duration }
    }

    pub fn as_human_time_string(&self) -> String {
        format!("{}", format_duration(self.duration))
    }

    pub fn as_secs(&self) -> u32 {
        self.duration.as_secs() as u32
    }

    pub fn get_duration(&self) -> Duration {
        self.duration
    }

    pub fn is_zero(&self) -> bool {
        self.duration.as_secs() == 0
    }
}

impl FromStr for CoveraDuration {
    type Err = humantime::DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = &s.to_lowercase();
        if s == "0" || s == "disabled" || s == "none" {
            Ok(CoveraDuration {
                duration: Duration::new(0, 0),
            })
        } else {
            Ok(CoveraDuration {
                duration: humantime::parse_duration(s)?,
            })
        }
    }
}

impl From<u64> for CoveraDuration {
    fn from(seconds: u64) -> Self {
        CoveraDuration {
            duration: Duration::from_secs(seconds),
        }
    }
}

impl Display for CoveraDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_human_time_string())
    }
}

impl Serialize for CoveraDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.as_human_time_string())
    }
}

impl<'de> Deserialize<'de> for CoveraDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(CoveraDurationVisitor)
    }
}

struct CoveraDurationVisitor;

impl Visitor<'_> for CoveraDurationVisitor {
    type Value = CoveraDuration;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("a human-readable duration such as '10s'")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        CoveraDuration::from_str(value).map_err(de::Error::custom)
    }
}
