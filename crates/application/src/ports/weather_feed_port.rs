//! Weather feed port
//!
//! Defines the interface for the upstream weather provider: current
//! conditions, the 3-hourly forecast feed, and the air-quality index.

use async_trait::async_trait;
use domain::entities::{CurrentConditions, ForecastSample};
use domain::value_objects::{AqiLevel, GeoLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather feed operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherFeedPort: Send + Sync {
    /// Get current weather for a location
    async fn current(
        &self,
        location: GeoLocation,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Get the 3-hourly forecast feed for a location
    ///
    /// Samples are returned in chronological feed order; the feed typically
    /// spans five days at 3-hour resolution.
    async fn forecast(
        &self,
        location: GeoLocation,
    ) -> Result<Vec<ForecastSample>, ApplicationError>;

    /// Get the air-quality index for a location
    async fn air_quality(&self, location: GeoLocation) -> Result<AqiLevel, ApplicationError>;

    /// Check if the feed is available
    async fn is_available(&self) -> bool;

    /// Get current conditions and the forecast feed in one call
    async fn conditions_and_forecast(
        &self,
        location: GeoLocation,
    ) -> Result<(CurrentConditions, Vec<ForecastSample>), ApplicationError> {
        let current = self.current(location).await?;
        let samples = self.forecast(location).await?;
        Ok((current, samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherFeedPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherFeedPort>();
    }
}
