use std::{fmt::Display, num::ParseIntError, str::FromStr};

use serde::Serialize;

/// The dialed number of a call, kept as the integer the log contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(i64);

impl PhoneNumber {
    /// The number a call is billed under when its number field could not be parsed.
    pub const UNKNOWN: Self = Self(0);
}

impl FromStr for PhoneNumber {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<i64> for PhoneNumber {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<PhoneNumber> for i64 {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
