//! Forecast sample entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Humidity, Temperature};

/// One 3-hour-resolution record from the upstream forecast feed
///
/// Samples arrive in chronological feed order and are never mutated. The
/// aggregation core only reads the timestamp, temperature and condition;
/// humidity and wind feed the trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Instant the sample is valid for
    pub observed_at: DateTime<Utc>,
    /// Forecast temperature
    pub temperature: Temperature,
    /// Relative humidity, when the feed carries it
    #[serde(default)]
    pub humidity: Option<Humidity>,
    /// Wind speed in m/s, when the feed carries it
    #[serde(default)]
    pub wind_speed: Option<f64>,
    /// Primary condition label (e.g. "Clear", "Rain")
    pub condition: String,
}

impl ForecastSample {
    /// Create a sample carrying only the fields the aggregation core reads
    #[must_use]
    pub fn new(
        observed_at: DateTime<Utc>,
        temperature: Temperature,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            observed_at,
            temperature,
            humidity: None,
            wind_speed: None,
            condition: condition.into(),
        }
    }
}
