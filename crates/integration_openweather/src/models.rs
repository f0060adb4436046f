//! OpenWeather wire models
//!
//! Raw shapes of the provider payloads. Unknown fields are ignored during
//! deserialization; only what the dashboard consumes is modelled.

use serde::Deserialize;

/// One entry of the geocoding response (`/geo/1.0/direct`)
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeEntry {
    /// Matched place name
    pub name: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// ISO country code, when the provider reports one
    #[serde(default)]
    pub country: Option<String>,
}

/// The `weather[i]` condition tag
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionTag {
    /// Primary label (e.g. "Clear", "Rain")
    pub main: String,
    /// Longer description (e.g. "light rain")
    pub description: String,
}

/// The `main` block: temperature and humidity readings
#[derive(Debug, Clone, Deserialize)]
pub struct MainMetrics {
    /// Temperature in °C (metric units requested upstream)
    pub temp: f64,
    /// Relative humidity in percent
    #[serde(default)]
    pub humidity: Option<u8>,
}

/// The `wind` block
#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    /// Wind speed in m/s
    #[serde(default)]
    pub speed: Option<f64>,
}

/// One weather record: the current-weather response body, and each entry of
/// the forecast `list`
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherEntry {
    /// Unix timestamp (seconds) the record is valid for
    pub dt: i64,
    /// Temperature and humidity readings
    pub main: MainMetrics,
    /// Wind readings, when present
    #[serde(default)]
    pub wind: Option<Wind>,
    /// Condition tags; the first one is the primary condition
    #[serde(default)]
    pub weather: Vec<ConditionTag>,
}

/// The 5-day/3-hour forecast response (`/data/2.5/forecast`)
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// Forecast records in chronological order
    pub list: Vec<WeatherEntry>,
}

/// The `list[i].main` block of the air-pollution response
#[derive(Debug, Clone, Deserialize)]
pub struct PollutionIndex {
    /// Air-quality index, 1 (best) to 5 (worst)
    pub aqi: u8,
}

/// One entry of the air-pollution `list`
#[derive(Debug, Clone, Deserialize)]
pub struct PollutionEntry {
    /// The index block
    pub main: PollutionIndex,
}

/// The air-pollution response (`/data/2.5/air_pollution`)
#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityResponse {
    /// Readings; the first entry is the current one
    pub list: Vec<PollutionEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_entry_parses_with_unknown_fields_ignored() {
        let json = serde_json::json!({
            "dt": 1_772_442_000,
            "main": {"temp": 22.3, "humidity": 65, "pressure": 1013, "feels_like": 21.8},
            "wind": {"speed": 3.4, "deg": 240},
            "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}],
            "visibility": 10_000
        });

        let entry: WeatherEntry = serde_json::from_value(json).expect("parse");
        assert_eq!(entry.dt, 1_772_442_000);
        assert!((entry.main.temp - 22.3).abs() < f64::EPSILON);
        assert_eq!(entry.main.humidity, Some(65));
        assert_eq!(entry.weather[0].main, "Clouds");
    }

    #[test]
    fn weather_entry_tolerates_missing_optional_blocks() {
        let json = serde_json::json!({"dt": 1_772_442_000, "main": {"temp": 10.0}});

        let entry: WeatherEntry = serde_json::from_value(json).expect("parse");
        assert!(entry.main.humidity.is_none());
        assert!(entry.wind.is_none());
        assert!(entry.weather.is_empty());
    }

    #[test]
    fn geocode_entry_parses() {
        let json = serde_json::json!({
            "name": "Delhi",
            "lat": 28.6139,
            "lon": 77.209,
            "country": "IN",
            "state": "Delhi"
        });

        let entry: GeocodeEntry = serde_json::from_value(json).expect("parse");
        assert_eq!(entry.name, "Delhi");
        assert_eq!(entry.country.as_deref(), Some("IN"));
    }

    #[test]
    fn air_quality_response_parses() {
        let json = serde_json::json!({
            "coord": {"lat": 28.61, "lon": 77.21},
            "list": [{"main": {"aqi": 4}, "components": {"pm2_5": 91.2}, "dt": 1_772_442_000}]
        });

        let response: AirQualityResponse = serde_json::from_value(json).expect("parse");
        assert_eq!(response.list[0].main.aqi, 4);
    }
}
