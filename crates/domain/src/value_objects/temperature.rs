//! Temperature value object
//!
//! A temperature reading in degrees Celsius. Feed values arrive with full
//! floating-point precision; the dashboard emits them quantized to one
//! decimal place, so the quantization lives here rather than in formatting
//! code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature(f64);

impl Temperature {
    /// Create a temperature from a Celsius reading
    #[must_use]
    pub const fn new(celsius: f64) -> Self {
        Self(celsius)
    }

    /// Get the raw Celsius value
    #[must_use]
    pub const fn celsius(self) -> f64 {
        self.0
    }

    /// Quantize to one decimal place (half away from zero)
    ///
    /// This is the precision the dashboard displays; accumulators compare
    /// raw values and round only at emission.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self((self.0 * 10.0).round() / 10.0)
    }

    /// The lower of two temperatures
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// The higher of two temperatures
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

impl From<f64> for Temperature {
    fn from(celsius: f64) -> Self {
        Self(celsius)
    }
}

impl From<Temperature> for f64 {
    fn from(t: Temperature) -> Self {
        t.0
    }
}
