//! Insight service
//!
//! Produces the dashboard's natural-language summary and safety-advice
//! texts. A two-variant summarizer is selected once at startup: model-backed
//! when an inference collaborator is available, static templates otherwise.
//! Insight calls never fail the dashboard; an engine error degrades to the
//! deterministic texts.

use std::fmt;
use std::sync::Arc;

use domain::entities::CurrentConditions;
use domain::value_objects::AqiLevel;
use tracing::{debug, info, warn};

use crate::ports::InferencePort;

/// The summarizer variant chosen at startup
#[derive(Clone)]
pub enum Summarizer {
    /// Forward weather data to the injected inference collaborator
    ModelBacked(Arc<dyn InferencePort>),
    /// Deterministic texts derived from the weather data
    StaticTemplate,
}

impl fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelBacked(_) => write!(f, "Summarizer::ModelBacked"),
            Self::StaticTemplate => write!(f, "Summarizer::StaticTemplate"),
        }
    }
}

impl Summarizer {
    /// Select the variant from collaborator availability
    ///
    /// The selection happens once; both variants answer the same calls.
    #[must_use]
    pub fn select(engine: Option<Arc<dyn InferencePort>>) -> Self {
        match engine {
            Some(port) => {
                info!(model = %port.current_model(), "Insight summarizer: model-backed");
                Self::ModelBacked(port)
            },
            None => {
                info!("Insight summarizer: static templates (no model credential)");
                Self::StaticTemplate
            },
        }
    }

    /// Whether the model-backed variant was selected
    #[must_use]
    pub const fn is_model_backed(&self) -> bool {
        matches!(self, Self::ModelBacked(_))
    }
}

/// Produces summary and advice texts for the dashboard
#[derive(Debug, Clone)]
pub struct InsightService {
    summarizer: Summarizer,
}

impl InsightService {
    /// Create an insight service around a selected summarizer
    #[must_use]
    pub const fn new(summarizer: Summarizer) -> Self {
        Self { summarizer }
    }

    /// Create an insight service that only uses the static templates
    #[must_use]
    pub const fn with_static_templates() -> Self {
        Self {
            summarizer: Summarizer::StaticTemplate,
        }
    }

    /// The selected summarizer
    #[must_use]
    pub const fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    /// A short, human-friendly description of the current weather
    ///
    /// Never fails: without a model the static template answers, and a
    /// model error degrades to the deterministic text.
    pub async fn weather_summary(&self, current: &CurrentConditions) -> String {
        match &self.summarizer {
            Summarizer::StaticTemplate => Self::summary_template(current),
            Summarizer::ModelBacked(port) => {
                match port.generate(&Self::conditions_digest(current)).await {
                    Ok(result) if !result.content.trim().is_empty() => {
                        debug!(model = %result.model, "Model produced weather summary");
                        result.content.trim().to_string()
                    },
                    Ok(_) => {
                        warn!("Model returned an empty summary, using degraded text");
                        Self::summary_degraded(current)
                    },
                    Err(e) => {
                        warn!(error = %e, "Model summary failed, using degraded text");
                        Self::summary_degraded(current)
                    },
                }
            },
        }
    }

    /// Health and travel advice from current weather and air quality
    ///
    /// Never fails; degrades like [`Self::weather_summary`].
    pub async fn safety_advice(&self, current: &CurrentConditions, aqi: AqiLevel) -> String {
        match &self.summarizer {
            Summarizer::StaticTemplate => Self::advice_template().to_string(),
            Summarizer::ModelBacked(port) => {
                match port.generate(&Self::advice_digest(current, aqi)).await {
                    Ok(result) if !result.content.trim().is_empty() => {
                        debug!(model = %result.model, "Model produced safety advice");
                        result.content.trim().to_string()
                    },
                    Ok(_) => {
                        warn!("Model returned empty advice, using degraded text");
                        Self::advice_degraded().to_string()
                    },
                    Err(e) => {
                        warn!(error = %e, "Model advice failed, using degraded text");
                        Self::advice_degraded().to_string()
                    },
                }
            },
        }
    }

    /// Data handed to the model collaborator for the summary; prompting is
    /// the collaborator's concern
    fn conditions_digest(current: &CurrentConditions) -> String {
        format!(
            "Temperature: {:.1} °C\nHumidity: {} %\nWind Speed: {:.1} m/s\nCondition: {}",
            current.temperature.celsius(),
            current.humidity.value(),
            current.wind_speed,
            current.description,
        )
    }

    /// Data handed to the model collaborator for the advice
    fn advice_digest(current: &CurrentConditions, aqi: AqiLevel) -> String {
        let index = aqi
            .index()
            .map_or_else(|| "unknown".to_string(), |i| i.to_string());
        format!(
            "{}\nAir Quality Index (AQI): {index}",
            Self::conditions_digest(current)
        )
    }

    fn summary_template(current: &CurrentConditions) -> String {
        format!(
            "Currently it is {:.1}°C with {}. Humidity is around {}%. Plan your day accordingly.",
            current.temperature.celsius(),
            current.description,
            current.humidity.value(),
        )
    }

    fn summary_degraded(current: &CurrentConditions) -> String {
        format!(
            "Weather is {} with temperature {:.1}°C. Stay hydrated and check updates regularly.",
            current.description,
            current.temperature.celsius(),
        )
    }

    const fn advice_template() -> &'static str {
        "Check air quality before outdoor activity. Carry water, protect yourself from heat \
         or rain, and wear a mask if pollution is high."
    }

    const fn advice_degraded() -> &'static str {
        "Air quality may affect sensitive groups. Limit long outdoor exposure and take basic \
         precautions."
    }
}
