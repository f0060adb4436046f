//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. The weather provider, the geocoder and the language
//! model are out-of-process collaborators; adapters implement these ports.

mod cache_port;
mod geocoder_port;
mod inference_port;
mod weather_feed_port;

pub use cache_port::{CachePort, CachePortExt, CacheStats, ttl};
#[cfg(test)]
pub use geocoder_port::MockGeocoderPort;
pub use geocoder_port::GeocoderPort;
#[cfg(test)]
pub use inference_port::MockInferencePort;
pub use inference_port::{InferencePort, InferenceResult};
#[cfg(test)]
pub use weather_feed_port::MockWeatherFeedPort;
pub use weather_feed_port::WeatherFeedPort;
