//! Application configuration
//!
//! Loaded from a TOML file with serde defaults for every field, so an
//! empty file (or none at all) yields a working development setup. The
//! model credential is read from the environment, held behind `secrecy`
//! and never logged.

use std::path::Path;

use domain::value_objects::{GeoLocation, Language, Timezone};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for this schema
    #[error("Cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Fallback coordinates used when the geocoding payload is empty
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LocationConfig {
    /// Latitude in degrees
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    /// Longitude in degrees
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

const fn default_latitude() -> f64 {
    28.6139
}

const fn default_longitude() -> f64 {
    77.209
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

impl LocationConfig {
    /// The configured coordinates as a validated location
    ///
    /// Falls back to the default location if the configured pair is out of
    /// range.
    #[must_use]
    pub fn geo_location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude, self.longitude).unwrap_or_else(|_| GeoLocation::delhi())
    }
}

/// Cache sizing
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CacheSettings {
    /// Maximum capacity in megabytes
    #[serde(default = "default_cache_mb")]
    pub max_capacity_mb: u64,
    /// Entry TTL in seconds
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

const fn default_cache_mb() -> u64 {
    8
}

const fn default_cache_ttl() -> u64 {
    24 * 3600
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_capacity_mb: default_cache_mb(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

/// Insight engine settings
///
/// The model endpoint itself is an external collaborator; configuration
/// only carries the model name and which environment variable holds the
/// credential. Credential *presence* is what selects the model-backed
/// summarizer at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct InsightConfig {
    /// Model name requested from the inference collaborator
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the model credential
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

fn default_model() -> String {
    "mistral-7b-instruct".to_string()
}

fn default_token_env() -> String {
    "SKYBRIEF_MODEL_TOKEN".to_string()
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            token_env: default_token_env(),
        }
    }
}

impl InsightConfig {
    /// Read the model credential from the configured environment variable
    ///
    /// Empty values count as absent.
    #[must_use]
    pub fn model_token(&self) -> Option<SecretString> {
        std::env::var(&self.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .map(SecretString::from)
    }

    /// Whether a model credential is available
    #[must_use]
    pub fn model_available(&self) -> bool {
        self.model_token().is_some()
    }
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Default city suggested by the dashboard
    #[serde(default = "default_city")]
    pub city: String,

    /// Fallback coordinates
    #[serde(default)]
    pub location: LocationConfig,

    /// Zone used for day bucketing and clock labels (IANA name, validated)
    #[serde(default)]
    pub timezone: Timezone,

    /// Narration language
    #[serde(default)]
    pub language: Language,

    /// Cache sizing
    #[serde(default)]
    pub cache: CacheSettings,

    /// Insight engine settings
    #[serde(default)]
    pub insight: InsightConfig,
}

fn default_city() -> String {
    "Delhi".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            city: default_city(),
            location: LocationConfig::default(),
            timezone: Timezone::default(),
            language: Language::default(),
            cache: CacheSettings::default(),
            insight: InsightConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the file cannot be read or parsed;
    /// parsing also fails on an invalid timezone or language.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        debug!(path = %path.display(), zone = %config.timezone, "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for invalid documents.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
// set_var/remove_var are unsafe in edition 2024; tests touch process env on purpose
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn empty_document_yields_defaults() {
        let config = AppConfig::from_toml_str("").expect("parse");
        assert_eq!(config.city, "Delhi");
        assert!(config.timezone.is_utc());
        assert_eq!(config.language, Language::English);
        assert_eq!(config.cache.max_capacity_mb, 8);
        assert_eq!(config.insight.token_env, "SKYBRIEF_MODEL_TOKEN");
    }

    #[test]
    fn full_document_parses() {
        let raw = r#"
            city = "Mumbai"
            timezone = "Asia/Kolkata"
            language = "bengali"

            [location]
            latitude = 19.076
            longitude = 72.8777

            [cache]
            max_capacity_mb = 4
            ttl_secs = 3600

            [insight]
            model = "small-instruct"
            token_env = "MY_TOKEN"
        "#;

        let config = AppConfig::from_toml_str(raw).expect("parse");
        assert_eq!(config.city, "Mumbai");
        assert_eq!(config.timezone.as_str(), "Asia/Kolkata");
        assert_eq!(config.language, Language::Bengali);
        assert!((config.location.geo_location().latitude() - 19.076).abs() < 1e-9);
        assert_eq!(config.cache.max_capacity_mb, 4);
        assert_eq!(config.insight.model, "small-instruct");
    }

    #[test]
    fn invalid_timezone_fails_at_parse_time() {
        let result = AppConfig::from_toml_str("timezone = \"Mars/Olympus\"");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_language_fails_at_parse_time() {
        let result = AppConfig::from_toml_str("language = \"klingon\"");
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_location_falls_back_to_default() {
        let raw = "[location]\nlatitude = 120.0\nlongitude = 0.0";
        let config = AppConfig::from_toml_str(raw).expect("parse");
        assert!((config.location.geo_location().latitude() - 28.6139).abs() < 1e-9);
    }

    #[test]
    fn model_token_reads_the_configured_env_var() {
        let insight = InsightConfig {
            model: default_model(),
            token_env: "SKYBRIEF_TEST_TOKEN_SET".to_string(),
        };

        // Not set yet
        assert!(!insight.model_available());

        unsafe { std::env::set_var("SKYBRIEF_TEST_TOKEN_SET", "secret-token") };
        let token = insight.model_token().expect("token present");
        assert_eq!(token.expose_secret(), "secret-token");
        assert!(insight.model_available());
        unsafe { std::env::remove_var("SKYBRIEF_TEST_TOKEN_SET") };
    }

    #[test]
    fn blank_model_token_counts_as_absent() {
        let insight = InsightConfig {
            model: default_model(),
            token_env: "SKYBRIEF_TEST_TOKEN_BLANK".to_string(),
        };

        unsafe { std::env::set_var("SKYBRIEF_TEST_TOKEN_BLANK", "   ") };
        assert!(!insight.model_available());
        unsafe { std::env::remove_var("SKYBRIEF_TEST_TOKEN_BLANK") };
    }
}
