//! Plain-text rendering of the dashboard
//!
//! The real renderer is an external widget; this module prints the same
//! records as aligned text for inspection from a terminal.

use application::services::{Dashboard, TemperatureTrend};
use domain::entities::{CurrentConditions, DaySummary};
use domain::value_objects::{AqiLevel, Language};

/// The current-conditions metrics row
#[must_use]
pub fn render_current(current: &CurrentConditions) -> String {
    format!(
        "Temperature  {}\nHumidity     {}\nWind         {:.1} m/s\nCondition    {}\n",
        current.temperature, current.humidity, current.wind_speed, current.condition
    )
}

/// The 5-day outlook as a Day / Min / Max / Condition table
#[must_use]
pub fn render_outlook_table(outlook: &[DaySummary]) -> String {
    let mut out = String::from("Day        Min (°C)  Max (°C)  Condition\n");
    for day in outlook {
        out.push_str(&format!(
            "{:<10} {:>8.1} {:>9.1}  {}\n",
            day.weekday(),
            day.min_temp.celsius(),
            day.max_temp.celsius(),
            day.condition
        ));
    }
    out
}

/// The temperature trend extremes line
#[must_use]
pub fn render_trend_extremes(trend: &TemperatureTrend) -> String {
    match (&trend.peak, &trend.trough) {
        (Some(peak), Some(trough)) => format!(
            "Next 24h: high {:.1}°C at {}, low {:.1}°C at {}\n",
            peak.value, peak.label, trough.value, trough.label
        ),
        _ => "Next 24h: no forecast samples\n".to_string(),
    }
}

/// The air-quality line
#[must_use]
pub fn render_air_quality(level: AqiLevel) -> String {
    format!("{} {} - {}\n", level.emoji(), level.description(), level.advisory())
}

/// The full dashboard as plain text sections
#[must_use]
pub fn render_dashboard(dashboard: &Dashboard, language: Language, narration: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("Current weather in {}\n\n", dashboard.city));
    out.push_str(&render_current(&dashboard.current));
    out.push('\n');
    out.push_str(&render_trend_extremes(&dashboard.temperature_trend));
    out.push('\n');
    out.push_str("5-day outlook\n");
    out.push_str(&render_outlook_table(&dashboard.outlook));
    out.push('\n');
    out.push_str("Air quality\n");
    out.push_str(&render_air_quality(dashboard.air_quality));
    out.push('\n');
    out.push_str(&format!("Summary\n{}\n\n", dashboard.summary));
    out.push_str(&format!("Advice\n{}\n\n", dashboard.advice));
    out.push_str(&format!("Voice script ({})\n{narration}\n", language.name()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use application::services::{TrendPoint, TrendSeries};
    use chrono::{TimeZone, Utc};
    use domain::value_objects::{DayKey, Humidity, Temperature};

    fn outlook() -> Vec<DaySummary> {
        let monday = chrono::NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date");
        vec![
            DaySummary {
                day: DayKey::from_date(monday),
                min_temp: Temperature::new(10.0),
                max_temp: Temperature::new(15.0),
                condition: "Clear".to_string(),
            },
            DaySummary {
                day: DayKey::from_date(monday.succ_opt().expect("valid date")),
                min_temp: Temperature::new(8.0),
                max_temp: Temperature::new(20.0),
                condition: "Rain".to_string(),
            },
        ]
    }

    #[test]
    fn outlook_table_has_header_and_rows() {
        let table = render_outlook_table(&outlook());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Day"));
        assert!(lines[1].starts_with("Monday"));
        assert!(lines[1].contains("10.0"));
        assert!(lines[1].contains("15.0"));
        assert!(lines[1].ends_with("Clear"));
        assert!(lines[2].starts_with("Tuesday"));
        assert!(lines[2].ends_with("Rain"));
    }

    #[test]
    fn outlook_table_with_no_days_is_just_the_header() {
        let table = render_outlook_table(&[]);
        assert_eq!(table.lines().count(), 1);
    }

    #[test]
    fn current_metrics_are_listed() {
        let current = CurrentConditions {
            observed_at: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).single().expect("valid"),
            temperature: Temperature::new(22.3),
            humidity: Humidity::clamped(65),
            wind_speed: 3.4,
            condition: "Clouds".to_string(),
            description: "scattered clouds".to_string(),
        };

        let text = render_current(&current);
        assert!(text.contains("22.3°C"));
        assert!(text.contains("65%"));
        assert!(text.contains("3.4 m/s"));
        assert!(text.contains("Clouds"));
    }

    #[test]
    fn trend_extremes_name_peak_and_trough() {
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).single().expect("valid");
        let trend = TemperatureTrend {
            series: TrendSeries::default(),
            peak: Some(TrendPoint { at, label: "12:00".to_string(), value: 18.0 }),
            trough: Some(TrendPoint { at, label: "03:00".to_string(), value: 7.5 }),
        };

        let line = render_trend_extremes(&trend);
        assert!(line.contains("high 18.0°C at 12:00"));
        assert!(line.contains("low 7.5°C at 03:00"));
    }

    #[test]
    fn empty_trend_renders_a_placeholder() {
        let line = render_trend_extremes(&TemperatureTrend::default());
        assert!(line.contains("no forecast samples"));
    }

    #[test]
    fn air_quality_line_carries_emoji_and_advisory() {
        let line = render_air_quality(AqiLevel::Poor);
        assert!(line.contains("🔴"));
        assert!(line.contains("Poor"));
        assert!(line.contains("mask"));
    }
}
