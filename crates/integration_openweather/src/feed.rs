//! Payload decoding and the snapshot-backed feed
//!
//! Decoders map provider payloads onto domain types without repairing
//! them: a malformed document or a missing required element is an error,
//! and the caller decides whether to surface, skip or abort.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;
use tracing::{debug, instrument};

use application::ApplicationError;
use application::ports::{GeocoderPort, WeatherFeedPort};
use domain::entities::{CurrentConditions, ForecastSample};
use domain::value_objects::{AqiLevel, GeoLocation, Humidity, Temperature};

use crate::models::{AirQualityResponse, ForecastResponse, GeocodeEntry, WeatherEntry};

/// Feed decoding errors
#[derive(Debug, Error)]
pub enum FeedError {
    /// The payload is not the expected JSON document
    #[error("Parse error: {0}")]
    Parse(String),

    /// A required element is absent from an otherwise valid document
    #[error("Missing data in feed payload: {0}")]
    MissingData(&'static str),

    /// A value cannot be represented in the domain
    #[error("Invalid value in feed payload: {0}")]
    InvalidValue(String),
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<FeedError> for ApplicationError {
    fn from(e: FeedError) -> Self {
        Self::ExternalService(e.to_string())
    }
}

fn timestamp(unix_secs: i64) -> Result<DateTime<Utc>, FeedError> {
    Utc.timestamp_opt(unix_secs, 0)
        .single()
        .ok_or_else(|| FeedError::InvalidValue(format!("timestamp {unix_secs}")))
}

fn sample_from_entry(entry: &WeatherEntry) -> Result<ForecastSample, FeedError> {
    let condition = entry
        .weather
        .first()
        .ok_or(FeedError::MissingData("weather[0]"))?;

    Ok(ForecastSample {
        observed_at: timestamp(entry.dt)?,
        temperature: Temperature::new(entry.main.temp),
        humidity: entry.main.humidity.map(Humidity::clamped),
        wind_speed: entry.wind.as_ref().and_then(|w| w.speed),
        condition: condition.main.clone(),
    })
}

/// Decode a geocoding response into its entries
pub fn decode_geocode(json: &str) -> Result<Vec<GeocodeEntry>, FeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a current-weather response
pub fn decode_current(json: &str) -> Result<CurrentConditions, FeedError> {
    let entry: WeatherEntry = serde_json::from_str(json)?;

    let condition = entry
        .weather
        .first()
        .ok_or(FeedError::MissingData("weather[0]"))?;
    let humidity = entry
        .main
        .humidity
        .ok_or(FeedError::MissingData("main.humidity"))?;
    let wind_speed = entry
        .wind
        .as_ref()
        .and_then(|w| w.speed)
        .ok_or(FeedError::MissingData("wind.speed"))?;

    Ok(CurrentConditions {
        observed_at: timestamp(entry.dt)?,
        temperature: Temperature::new(entry.main.temp),
        humidity: Humidity::clamped(humidity),
        wind_speed,
        condition: condition.main.clone(),
        description: condition.description.clone(),
    })
}

/// Decode a 5-day/3-hour forecast response into feed-ordered samples
pub fn decode_forecast(json: &str) -> Result<Vec<ForecastSample>, FeedError> {
    let response: ForecastResponse = serde_json::from_str(json)?;
    response.list.iter().map(sample_from_entry).collect()
}

/// Decode an air-pollution response into the current AQI level
pub fn decode_air_quality(json: &str) -> Result<AqiLevel, FeedError> {
    let response: AirQualityResponse = serde_json::from_str(json)?;
    let entry = response.list.first().ok_or(FeedError::MissingData("list[0]"))?;
    Ok(AqiLevel::from_index(entry.main.aqi))
}

/// A weather feed replaying recorded provider payloads
///
/// Implements the geocoder and feed ports over one set of snapshot
/// documents (one city's worth of provider responses). The live HTTP
/// provider is an external collaborator; this adapter is what the
/// dashboard wires in its place.
#[derive(Debug, Clone)]
pub struct SnapshotFeed {
    geocode: Vec<GeocodeEntry>,
    current: CurrentConditions,
    samples: Vec<ForecastSample>,
    air_quality: AqiLevel,
}

impl SnapshotFeed {
    /// Decode one set of recorded payloads
    ///
    /// The air-pollution payload is optional; without it the feed reports
    /// [`AqiLevel::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns the first [`FeedError`] any payload produces.
    #[instrument(skip_all)]
    pub fn from_payloads(
        geocode_json: &str,
        current_json: &str,
        forecast_json: &str,
        air_quality_json: Option<&str>,
    ) -> Result<Self, FeedError> {
        let geocode = decode_geocode(geocode_json)?;
        let current = decode_current(current_json)?;
        let samples = decode_forecast(forecast_json)?;
        let air_quality = match air_quality_json {
            Some(json) => decode_air_quality(json)?,
            None => AqiLevel::Unknown,
        };

        debug!(
            geocode_entries = geocode.len(),
            samples = samples.len(),
            aqi = %air_quality,
            "Loaded feed snapshot"
        );

        Ok(Self {
            geocode,
            current,
            samples,
            air_quality,
        })
    }

    /// The place name the snapshot geocodes to, if any
    #[must_use]
    pub fn place_name(&self) -> Option<&str> {
        self.geocode.first().map(|e| e.name.as_str())
    }
}

#[async_trait]
impl GeocoderPort for SnapshotFeed {
    async fn resolve(&self, city: &str) -> Result<GeoLocation, ApplicationError> {
        // The snapshot is the provider's answer for this query; an empty
        // list is the provider's way of saying the city is unknown.
        let entry = self
            .geocode
            .first()
            .ok_or_else(|| ApplicationError::CityNotFound(city.to_string()))?;
        Ok(GeoLocation::new(entry.lat, entry.lon)?)
    }
}

#[async_trait]
impl WeatherFeedPort for SnapshotFeed {
    async fn current(
        &self,
        _location: GeoLocation,
    ) -> Result<CurrentConditions, ApplicationError> {
        Ok(self.current.clone())
    }

    async fn forecast(
        &self,
        _location: GeoLocation,
    ) -> Result<Vec<ForecastSample>, ApplicationError> {
        Ok(self.samples.clone())
    }

    async fn air_quality(&self, _location: GeoLocation) -> Result<AqiLevel, ApplicationError> {
        Ok(self.air_quality)
    }

    async fn is_available(&self) -> bool {
        true
    }
}
