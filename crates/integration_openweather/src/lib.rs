//! OpenWeather payload integration
//!
//! Serde models of the OpenWeather wire shapes (geocoding, current weather,
//! 5-day/3-hour forecast, air pollution) and decoding into domain types.
//! Network access is not this crate's concern: `SnapshotFeed` serves the
//! application ports from recorded provider payloads.

pub mod feed;
mod models;

pub use feed::{
    FeedError, SnapshotFeed, decode_air_quality, decode_current, decode_forecast, decode_geocode,
};
pub use models::{
    AirQualityResponse, ConditionTag, ForecastResponse, GeocodeEntry, MainMetrics, PollutionEntry,
    PollutionIndex, WeatherEntry, Wind,
};
