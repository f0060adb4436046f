//! Forecast aggregation service
//!
//! Folds the 3-hourly forecast feed into at most five daily summaries. Day
//! buckets are keyed by the calendar day of each sample in the service's
//! configured timezone and ordered by first appearance in the feed, not by
//! calendar order. The scan is a pure function of its input: same samples,
//! same outlook.

use domain::entities::{DaySummary, ForecastSample};
use domain::value_objects::{DayKey, Temperature, Timezone};
use tracing::debug;

/// Maximum number of days emitted in the outlook
pub const MAX_OUTLOOK_DAYS: usize = 5;

/// Running per-day aggregate while scanning the feed
struct DayAccumulator {
    day: DayKey,
    min: f64,
    max: f64,
    condition: Option<String>,
}

impl DayAccumulator {
    const fn new(day: DayKey) -> Self {
        Self {
            day,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            condition: None,
        }
    }
}

/// Aggregates the forecast feed into a daily outlook
#[derive(Debug, Clone)]
pub struct ForecastService {
    timezone: Timezone,
}

impl ForecastService {
    /// Create a new forecast service bucketing days in the given zone
    #[must_use]
    pub const fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }

    /// The zone day keys are derived in
    #[must_use]
    pub const fn timezone(&self) -> &Timezone {
        &self.timezone
    }

    /// Fold the feed into at most [`MAX_OUTLOOK_DAYS`] daily summaries
    ///
    /// For every sample, in feed order: the day's minimum and maximum track
    /// the sample temperature, and the first sample seen for a day fixes
    /// its condition label (even when a later sample sets the min or max).
    /// The emitted days are the first distinct day keys encountered, in
    /// encounter order; temperatures are quantized to one decimal place at
    /// emission only. An empty feed yields an empty outlook.
    #[must_use]
    pub fn daily_outlook(&self, samples: &[ForecastSample]) -> Vec<DaySummary> {
        // Day counts are tiny (a 5-day feed holds at most 6 distinct keys),
        // so a Vec scan keeps insertion order without another map type.
        let mut days: Vec<DayAccumulator> = Vec::new();

        for sample in samples {
            let key = DayKey::from_datetime(sample.observed_at, &self.timezone);

            let idx = match days.iter().position(|acc| acc.day == key) {
                Some(idx) => idx,
                None => {
                    days.push(DayAccumulator::new(key));
                    days.len() - 1
                },
            };

            let acc = &mut days[idx];
            acc.min = acc.min.min(sample.temperature.celsius());
            acc.max = acc.max.max(sample.temperature.celsius());
            if acc.condition.is_none() {
                acc.condition = Some(sample.condition.clone());
            }
        }

        debug!(
            samples = samples.len(),
            days = days.len(),
            zone = %self.timezone,
            "Aggregated forecast feed"
        );

        days.into_iter()
            .take(MAX_OUTLOOK_DAYS)
            .map(|acc| DaySummary {
                day: acc.day,
                min_temp: Temperature::new(acc.min).rounded(),
                max_temp: Temperature::new(acc.max).rounded(),
                condition: acc.condition.unwrap_or_default(),
            })
            .collect()
    }
}

impl Default for ForecastService {
    fn default() -> Self {
        Self::new(Timezone::utc())
    }
}
