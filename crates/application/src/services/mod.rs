//! Application services
//!
//! - `ForecastService`: daily min/max/condition aggregation of the feed
//! - `TrendService`: 24-hour chart-ready series
//! - `InsightService`: summary and advice texts (model-backed or templates)
//! - `TranslationService`: cached narration translation
//! - `DashboardService`: end-to-end assembly

mod dashboard_service;
mod forecast_service;
mod insight_service;
mod translation_service;
mod trend_service;

pub use dashboard_service::{Dashboard, DashboardService, voice_script};
pub use forecast_service::{ForecastService, MAX_OUTLOOK_DAYS};
pub use insight_service::{InsightService, Summarizer};
pub use translation_service::{TranslationService, translation_cache_key};
pub use trend_service::{TREND_WINDOW, TemperatureTrend, TrendPoint, TrendSeries, TrendService};
