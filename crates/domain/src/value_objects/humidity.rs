//! Humidity value object
//!
//! Represents a validated relative humidity percentage (0-100%).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a humidity value is out of range
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid humidity: {0}% is out of range (must be 0-100)")]
pub struct InvalidHumidity(u8);

/// Relative humidity percentage (0-100%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Humidity(u8);

impl Humidity {
    /// Maximum valid humidity percentage
    pub const MAX: u8 = 100;

    /// Create a new validated humidity value
    ///
    /// # Errors
    ///
    /// Returns `InvalidHumidity` if the value is greater than 100.
    pub const fn new(value: u8) -> Result<Self, InvalidHumidity> {
        if value > Self::MAX {
            Err(InvalidHumidity(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Create a humidity value, clamping to valid range
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Get the humidity value as a u8
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Dry air (< 30%)
    #[must_use]
    pub const fn is_dry(self) -> bool {
        self.0 < 30
    }

    /// Humid air (> 60%)
    #[must_use]
    pub const fn is_humid(self) -> bool {
        self.0 > 60
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Humidity {
    type Error = InvalidHumidity;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Humidity> for u8 {
    fn from(h: Humidity) -> Self {
        h.0
    }
}

/// Custom deserialization that validates humidity values
impl<'de> Deserialize<'de> for Humidity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humidity_new_valid() {
        assert!(Humidity::new(0).is_ok());
        assert!(Humidity::new(50).is_ok());
        assert!(Humidity::new(100).is_ok());
    }

    #[test]
    fn test_humidity_new_invalid() {
        let result = Humidity::new(101);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "invalid humidity: 101% is out of range (must be 0-100)"
        );
    }

    #[test]
    fn test_humidity_clamped() {
        assert_eq!(Humidity::clamped(50).value(), 50);
        assert_eq!(Humidity::clamped(101).value(), 100);
        assert_eq!(Humidity::clamped(255).value(), 100);
    }

    #[test]
    fn test_humidity_display() {
        assert_eq!(format!("{}", Humidity::clamped(65)), "65%");
    }

    #[test]
    fn test_humidity_categories() {
        assert!(Humidity::clamped(20).is_dry());
        assert!(!Humidity::clamped(20).is_humid());
        assert!(!Humidity::clamped(45).is_dry());
        assert!(!Humidity::clamped(45).is_humid());
        assert!(Humidity::clamped(75).is_humid());
    }

    #[test]
    fn test_humidity_deserialization() {
        let h: Humidity = serde_json::from_str("65").expect("deserialize");
        assert_eq!(h.value(), 65);

        let result: Result<Humidity, _> = serde_json::from_str("101");
        assert!(result.is_err());
    }

    #[test]
    fn test_humidity_ordering() {
        assert!(Humidity::clamped(30) < Humidity::clamped(70));
    }
}
