use std::{fmt::Display, str::FromStr};

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};

const SECS_IN_MIN: u64 = 60;

/// Layout of the timestamps in a call log, e.g. `13-01-2020 18:10:15`.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// A wall-clock date time with second precision, as written in a call log.
///
/// Logs carry no time zone, hours are taken as they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CallTimestamp(NaiveDateTime);

impl CallTimestamp {
    /// The hour of the day, `0..24`.
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Signed time elapsed from `earlier` until `self`.
    #[must_use]
    pub fn signed_duration_since(self, earlier: Self) -> Duration {
        self.0.signed_duration_since(earlier.0)
    }
}

impl FromStr for CallTimestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map(Self)
    }
}

impl From<NaiveDateTime> for CallTimestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl From<CallTimestamp> for NaiveDateTime {
    fn from(value: CallTimestamp) -> Self {
        value.0
    }
}

impl Display for CallTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for CallTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A number of billed minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Minutes(u64);

impl Minutes {
    pub(crate) fn zero() -> Self {
        Self(0)
    }

    /// The whole minutes billed for `duration`. A started minute is billed as a full minute, a
    /// zero duration is zero minutes.
    ///
    /// Returns `None` for a negative duration.
    #[must_use]
    pub fn from_duration_ceil(duration: Duration) -> Option<Self> {
        let seconds = u64::try_from(duration.num_seconds()).ok()?;
        Some(Self(seconds.div_ceil(SECS_IN_MIN)))
    }

    /// The amount of minutes.
    #[must_use]
    pub fn count(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl From<u64> for Minutes {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for Minutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
