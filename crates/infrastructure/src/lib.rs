//! Infrastructure layer for Skybrief
//!
//! Adapters for the application ports and configuration loading:
//! - `cache`: in-memory cache implementing `CachePort`
//! - `config`: TOML + environment application configuration

pub mod cache;
pub mod config;

pub use cache::MokaCache;
pub use config::{AppConfig, CacheSettings, ConfigError, InsightConfig, LocationConfig};
