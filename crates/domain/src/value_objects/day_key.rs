//! Day key value object
//!
//! The calendar-day identifier used to group forecast samples. A day key is
//! always derived in an explicit timezone; two samples straddling midnight
//! in the configured zone land in different buckets regardless of where the
//! process runs.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;
use crate::value_objects::Timezone;

/// A calendar day in the feed's configured timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Derive the day key for a UTC instant in the given zone
    #[must_use]
    pub fn from_datetime(at: DateTime<Utc>, zone: &Timezone) -> Self {
        Self(zone.localize(at).date_naive())
    }

    /// Derive the day key for a Unix timestamp (seconds) in the given zone
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateTime` if the timestamp is outside
    /// the representable range.
    pub fn from_timestamp(unix_secs: i64, zone: &Timezone) -> Result<Self, DomainError> {
        Utc.timestamp_opt(unix_secs, 0)
            .single()
            .map(|at| Self::from_datetime(at, zone))
            .ok_or_else(|| DomainError::InvalidDateTime(format!("timestamp {unix_secs}")))
    }

    /// Wrap an already-resolved calendar date
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The calendar date
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// The weekday label shown in the outlook table (e.g. "Monday")
    #[must_use]
    pub fn weekday_label(self) -> &'static str {
        match self.0.weekday() {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
