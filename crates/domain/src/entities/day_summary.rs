//! Day summary entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{DayKey, Temperature};

/// Aggregated min/max temperature and representative condition for one
/// calendar day
///
/// Derived from the feed on every aggregation call and never persisted.
/// `min_temp` and `max_temp` bound every sample temperature of the day;
/// `condition` is the label of the chronologically first sample observed
/// for the day, which need not be the min or max sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    /// The day this summary covers
    pub day: DayKey,
    /// Lowest forecast temperature of the day, quantized to one decimal
    pub min_temp: Temperature,
    /// Highest forecast temperature of the day, quantized to one decimal
    pub max_temp: Temperature,
    /// First-observed condition label of the day
    pub condition: String,
}

impl DaySummary {
    /// The weekday label shown in the outlook table
    #[must_use]
    pub fn weekday(&self) -> &'static str {
        self.day.weekday_label()
    }

    /// One-line rendering for logs and the CLI
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: {} to {}, {}",
            self.weekday(),
            self.min_temp,
            self.max_temp,
            self.condition
        )
    }
}
