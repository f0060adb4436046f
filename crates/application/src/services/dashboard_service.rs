//! Dashboard orchestration service
//!
//! Resolves a city, pulls the feed, and assembles everything the renderer
//! needs in one pass: metrics, trends, the 5-day outlook, air quality,
//! insight texts and the voice narration script.

use std::sync::Arc;

use domain::entities::{CurrentConditions, DaySummary};
use domain::value_objects::{AqiLevel, GeoLocation, Timezone};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApplicationError;
use crate::ports::{GeocoderPort, WeatherFeedPort};
use crate::services::{
    ForecastService, InsightService, TemperatureTrend, TrendSeries, TrendService,
};

/// Everything one dashboard render needs, in display order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    /// The city as requested
    pub city: String,
    /// Resolved coordinates
    pub location: GeoLocation,
    /// Current conditions metrics row
    pub current: CurrentConditions,
    /// 24-hour temperature series with annotated extremes
    pub temperature_trend: TemperatureTrend,
    /// 24-hour wind series
    pub wind_trend: TrendSeries,
    /// 24-hour humidity series
    pub humidity_trend: TrendSeries,
    /// Up to five daily summaries in first-appearance order
    pub outlook: Vec<DaySummary>,
    /// Air-quality level
    pub air_quality: AqiLevel,
    /// Natural-language weather summary
    pub summary: String,
    /// Safety and travel advice
    pub advice: String,
    /// Narration handed to the external speech player
    pub voice_script: String,
}

/// The narration script spoken by the voice assistant
#[must_use]
pub fn voice_script(city: &str, current: &CurrentConditions, summary: &str) -> String {
    format!(
        "Weather update for {city}. Temperature {:.1} degree Celsius. \
         Humidity {} percent. {summary}",
        current.temperature.celsius(),
        current.humidity.value(),
    )
}

/// Assembles the dashboard from the collaborator ports and the services
pub struct DashboardService {
    geocoder: Arc<dyn GeocoderPort>,
    feed: Arc<dyn WeatherFeedPort>,
    forecast: ForecastService,
    trends: TrendService,
    insights: InsightService,
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService")
            .field("forecast", &self.forecast)
            .field("insights", &self.insights)
            .finish_non_exhaustive()
    }
}

impl DashboardService {
    /// Wire up the dashboard: collaborator ports, the zone day buckets and
    /// clock labels use, and the selected insight summarizer
    #[must_use]
    pub fn new(
        geocoder: Arc<dyn GeocoderPort>,
        feed: Arc<dyn WeatherFeedPort>,
        timezone: Timezone,
        insights: InsightService,
    ) -> Self {
        Self {
            geocoder,
            feed,
            forecast: ForecastService::new(timezone),
            trends: TrendService::new(timezone),
            insights,
        }
    }

    /// Assemble a full dashboard for a city
    ///
    /// Geocoder and feed failures propagate; insight generation never fails
    /// (it degrades to deterministic texts).
    #[instrument(skip(self), fields(city = %city))]
    pub async fn assemble(&self, city: &str) -> Result<Dashboard, ApplicationError> {
        let location = self.geocoder.resolve(city).await?;
        info!(%location, "Resolved city");

        let (current, samples) = self.feed.conditions_and_forecast(location).await?;
        let air_quality = self.feed.air_quality(location).await?;

        let outlook = self.forecast.daily_outlook(&samples);
        let temperature_trend = self.trends.temperature_trend(&samples);
        let wind_trend = self.trends.wind_trend(&samples);
        let humidity_trend = self.trends.humidity_trend(&samples);

        let summary = self.insights.weather_summary(&current).await;
        let advice = self.insights.safety_advice(&current, air_quality).await;
        let voice_script = voice_script(city, &current, &summary);

        Ok(Dashboard {
            city: city.to_string(),
            location,
            current,
            temperature_trend,
            wind_trend,
            humidity_trend,
            outlook,
            air_quality,
            summary,
            advice,
            voice_script,
        })
    }
}
