//! Current conditions entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Humidity, Temperature};

/// The latest observed weather at the requested location
///
/// Feeds the dashboard's metrics row and the insight texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Observation time
    pub observed_at: DateTime<Utc>,
    /// Observed temperature
    pub temperature: Temperature,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Primary condition label (e.g. "Clouds")
    pub condition: String,
    /// Longer condition description (e.g. "scattered clouds")
    pub description: String,
}

impl CurrentConditions {
    /// One-line rendering for logs and the CLI metrics row
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} {}, humidity {}, wind {:.1} m/s",
            self.condition, self.temperature, self.humidity, self.wind_speed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn conditions() -> CurrentConditions {
        CurrentConditions {
            observed_at: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).single().expect("valid"),
            temperature: Temperature::new(22.3),
            humidity: Humidity::clamped(65),
            wind_speed: 3.4,
            condition: "Clouds".to_string(),
            description: "scattered clouds".to_string(),
        }
    }

    #[test]
    fn test_summary_line() {
        let summary = conditions().summary();
        assert!(summary.contains("Clouds"));
        assert!(summary.contains("22.3°C"));
        assert!(summary.contains("65%"));
        assert!(summary.contains("3.4 m/s"));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let current = conditions();
        let json = serde_json::to_string(&current).expect("serialize");
        let parsed: CurrentConditions = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, current);
    }
}
