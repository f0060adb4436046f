//! Timezone value object
//!
//! An IANA timezone validated against the chrono-tz database. Day bucketing
//! and clock labels are always computed in an explicit zone; the host's
//! local time is never consulted.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A validated IANA timezone (e.g. "Asia/Kolkata")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timezone(Tz);

impl Timezone {
    /// Create a new timezone, validating the name against the IANA database
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` if the name is unknown.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        Tz::from_str(name)
            .map(Self)
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
    }

    /// Get the canonical zone name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0.name()
    }

    /// The underlying chrono-tz zone
    #[must_use]
    pub const fn tz(&self) -> Tz {
        self.0
    }

    /// Convert a UTC instant to this zone
    #[must_use]
    pub fn localize(&self, at: DateTime<Utc>) -> DateTime<Tz> {
        at.with_timezone(&self.0)
    }

    /// Check if this is the UTC zone
    #[must_use]
    pub fn is_utc(&self) -> bool {
        self.0 == Tz::UTC
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(Tz::UTC)
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timezone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Custom deserialization that validates the zone name
impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Self::new(&name).map_err(serde::de::Error::custom)
    }
}

/// Common zone constants
impl Timezone {
    /// UTC
    #[must_use]
    pub const fn utc() -> Self {
        Self(Tz::UTC)
    }

    /// Asia/Kolkata
    #[must_use]
    pub const fn kolkata() -> Self {
        Self(Tz::Asia__Kolkata)
    }

    /// Europe/London
    #[must_use]
    pub const fn london() -> Self {
        Self(Tz::Europe__London)
    }
}
