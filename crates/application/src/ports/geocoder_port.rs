//! Geocoder port
//!
//! Defines the interface for resolving a city name to coordinates.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for city-name geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocoderPort: Send + Sync {
    /// Resolve a city name to coordinates
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::CityNotFound` when the provider has no
    /// match for the name, and `ApplicationError::ExternalService` for any
    /// other failure.
    async fn resolve(&self, city: &str) -> Result<GeoLocation, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeocoderPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocoderPort>();
    }
}
