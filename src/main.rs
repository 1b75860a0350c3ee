use chrono::Utc;
use clap::Parser;
use job_match::cli::Cli;
use job_match::config::{LoggingSettings, Settings};
use job_match::{AppError, Matcher, RecommendJobsRequest};
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use validator::Validate;

fn main() -> Result<(), AppError> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Logging settings are unknown at this point, fall back to defaults
            init_tracing(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    init_tracing(&settings.logging);

    if let Err(e) = run(&cli, &settings) {
        error!("job-match failed: {}", e);
        return Err(e);
    }
    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<Settings, AppError> {
    let settings = match path {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    settings.validate()?;
    Ok(settings)
}

fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn run(cli: &Cli, settings: &Settings) -> Result<(), AppError> {
    let request = match cli.input.as_deref() {
        Some(path) => RecommendJobsRequest::from_reader(std::fs::File::open(path)?)?,
        None => RecommendJobsRequest::from_reader(std::io::stdin().lock())?,
    };
    let now = cli.now.unwrap_or_else(Utc::now);

    let matcher = Matcher::new(settings.ranking_limits());

    info!(
        "Scoring {} postings (limits: {:?}, all: {})",
        request.postings.len(),
        matcher.limits(),
        cli.all
    );

    let response = matcher.respond_at(&request, now, cli.all);

    info!("Returning {} jobs", response.jobs.len());

    serde_json::to_writer_pretty(std::io::stdout().lock(), &response)?;
    println!();
    Ok(())
}
