//! Trend shaping service
//!
//! Shapes the first 24 hours of the forecast feed into time-indexed series
//! an external chart widget can plot directly. The temperature series also
//! carries its peak and trough so the renderer can annotate them without
//! re-scanning.

use chrono::{DateTime, Utc};
use domain::entities::ForecastSample;
use domain::value_objects::Timezone;
use serde::{Deserialize, Serialize};

/// Number of leading feed samples shaped into a trend
pub const TREND_WINDOW: usize = 24;

/// One plotted point: instant, zone-local clock label, value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Instant of the sample
    pub at: DateTime<Utc>,
    /// Clock label in the configured zone ("HH:MM")
    pub label: String,
    /// Plotted value
    pub value: f64,
}

/// A chart-ready series of points in feed order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Points in feed order
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// Whether the series has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Temperature series with annotated extremes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureTrend {
    /// The plotted series
    pub series: TrendSeries,
    /// Warmest point (first occurrence on ties); `None` for an empty series
    pub peak: Option<TrendPoint>,
    /// Coldest point (first occurrence on ties); `None` for an empty series
    pub trough: Option<TrendPoint>,
}

/// Shapes forecast samples into chart-ready series
#[derive(Debug, Clone)]
pub struct TrendService {
    timezone: Timezone,
}

impl TrendService {
    /// Create a new trend service labelling clocks in the given zone
    #[must_use]
    pub const fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }

    fn clock_label(&self, at: DateTime<Utc>) -> String {
        self.timezone.localize(at).format("%H:%M").to_string()
    }

    /// Temperature over the next 24 hours, with peak and trough annotated
    #[must_use]
    pub fn temperature_trend(&self, samples: &[ForecastSample]) -> TemperatureTrend {
        let points: Vec<TrendPoint> = samples
            .iter()
            .take(TREND_WINDOW)
            .map(|s| TrendPoint {
                at: s.observed_at,
                label: self.clock_label(s.observed_at),
                value: s.temperature.celsius(),
            })
            .collect();

        let mut peak: Option<TrendPoint> = None;
        let mut trough: Option<TrendPoint> = None;
        for point in &points {
            if peak.as_ref().is_none_or(|p| point.value > p.value) {
                peak = Some(point.clone());
            }
            if trough.as_ref().is_none_or(|p| point.value < p.value) {
                trough = Some(point.clone());
            }
        }

        TemperatureTrend {
            series: TrendSeries { points },
            peak,
            trough,
        }
    }

    /// Wind speed over the next 24 hours; samples without a reading are
    /// skipped
    #[must_use]
    pub fn wind_trend(&self, samples: &[ForecastSample]) -> TrendSeries {
        TrendSeries {
            points: samples
                .iter()
                .take(TREND_WINDOW)
                .filter_map(|s| {
                    s.wind_speed.map(|wind| TrendPoint {
                        at: s.observed_at,
                        label: self.clock_label(s.observed_at),
                        value: wind,
                    })
                })
                .collect(),
        }
    }

    /// Relative humidity over the next 24 hours; samples without a reading
    /// are skipped
    #[must_use]
    pub fn humidity_trend(&self, samples: &[ForecastSample]) -> TrendSeries {
        TrendSeries {
            points: samples
                .iter()
                .take(TREND_WINDOW)
                .filter_map(|s| {
                    s.humidity.map(|h| TrendPoint {
                        at: s.observed_at,
                        label: self.clock_label(s.observed_at),
                        value: f64::from(h.value()),
                    })
                })
                .collect(),
        }
    }
}

impl Default for TrendService {
    fn default() -> Self {
        Self::new(Timezone::utc())
    }
}
