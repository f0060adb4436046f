//! Skybrief CLI
//!
//! Assembles the weather dashboard from recorded provider payloads and
//! prints it as plain text (or JSON for piping into other tools).

#![allow(clippy::print_stdout)]

mod render;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use application::services::{
    DashboardService, ForecastService, InsightService, Summarizer, TranslationService,
};
use domain::value_objects::Timezone;
use infrastructure::{AppConfig, MokaCache};
use integration_openweather::{SnapshotFeed, decode_forecast};

/// Skybrief CLI
#[derive(Parser)]
#[command(name = "skybrief-cli")]
#[command(author, version, about = "Skybrief weather dashboard CLI", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble and print the full dashboard from recorded payloads
    Dashboard {
        /// City name to resolve
        city: String,

        /// Geocoding payload file
        #[arg(long)]
        geocode: PathBuf,

        /// Current-weather payload file
        #[arg(long)]
        current: PathBuf,

        /// Forecast payload file
        #[arg(long)]
        forecast: PathBuf,

        /// Air-pollution payload file
        #[arg(long)]
        air: Option<PathBuf>,

        /// Print the dashboard as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print only the 5-day outlook table from a forecast payload
    Outlook {
        /// Forecast payload file
        #[arg(long)]
        forecast: PathBuf,

        /// IANA timezone for day bucketing (overrides the config)
        #[arg(long)]
        timezone: Option<String>,
    },
}

fn read_payload(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read payload {}", path.display()))
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    match path {
        Some(p) => AppConfig::load(p).with_context(|| format!("cannot load {}", p.display())),
        None => Ok(AppConfig::default()),
    }
}

/// The insight summarizer this binary can offer
///
/// The inference collaborator is not linked into the CLI, so the selection
/// can only ever be the static templates; a present credential is worth a
/// warning so the user knows why the model stays silent.
fn select_insights(config: &AppConfig) -> InsightService {
    if config.insight.model_available() {
        tracing::warn!(
            model = %config.insight.model,
            "Model credential found but no inference collaborator is linked; using static templates"
        );
    }
    InsightService::new(Summarizer::select(None))
}

async fn run_dashboard(
    config: &AppConfig,
    city: &str,
    geocode: &Path,
    current: &Path,
    forecast: &Path,
    air: Option<&PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let geocode_json = read_payload(geocode)?;
    let current_json = read_payload(current)?;
    let forecast_json = read_payload(forecast)?;
    let air_json = air.map(|p| read_payload(p)).transpose()?;

    let feed = Arc::new(SnapshotFeed::from_payloads(
        &geocode_json,
        &current_json,
        &forecast_json,
        air_json.as_deref(),
    )?);

    let service = DashboardService::new(
        Arc::clone(&feed) as Arc<dyn application::ports::GeocoderPort>,
        feed as Arc<dyn application::ports::WeatherFeedPort>,
        config.timezone,
        select_insights(config),
    );

    let dashboard = service.assemble(city).await?;

    // No inference collaborator in the CLI, so translatable languages pass
    // through; the cache wiring is the same either way.
    let cache = Arc::new(MokaCache::for_translations());
    let translator = TranslationService::new(None, cache);
    let narration = translator.translate(&dashboard.voice_script, config.language).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!("{}", render::render_dashboard(&dashboard, config.language, &narration));
    }
    Ok(())
}

fn run_outlook(
    config: &AppConfig,
    forecast: &Path,
    timezone: Option<&str>,
) -> anyhow::Result<()> {
    let zone = match timezone {
        Some(name) => Timezone::new(name)?,
        None => config.timezone,
    };

    let samples = decode_forecast(&read_payload(forecast)?)?;
    let outlook = ForecastService::new(zone).daily_outlook(&samples);

    print!("{}", render::render_outlook_table(&outlook));
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match &cli.command {
        Commands::Dashboard {
            city,
            geocode,
            current,
            forecast,
            air,
            json,
        } => {
            run_dashboard(
                &config,
                city,
                geocode,
                current,
                forecast,
                air.as_ref(),
                *json,
            )
            .await
        },
        Commands::Outlook { forecast, timezone } => {
            run_outlook(&config, forecast, timezone.as_deref())
        },
    }
}
