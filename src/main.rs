// src/main.rs
use clap::Parser;
use github_activity::{
    api::GithubClient,
    cache::{Cache, EventCache},
    config::{Cli, Config},
    error::ActivityError,
    fetch::EventFetcher,
    output, pipeline,
    utils::setup_logging,
};
use log::{error, info};
use std::{process::ExitCode, sync::Arc, time::Instant};

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging().expect("Failed to initialize logging");

    let cli = Cli::parse();
    let config = match Config::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };
    config.validate_and_log();

    let time_start = Instant::now();
    match run(&config).await {
        Ok(rendered) => {
            print!("{}", rendered);
            info!("Result in {:?}", time_start.elapsed());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            if e.is_terminal_input() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run(config: &Config) -> Result<String, ActivityError> {
    let cache: Option<Arc<dyn EventCache>> = match &config.redis_url {
        Some(redis_url) => {
            let cache = Cache::new(redis_url)
                .await
                .map_err(|e| ActivityError::CacheError(e.to_string()))?;
            Some(Arc::new(cache))
        }
        None => None,
    };

    let fetcher = EventFetcher::new(
        Arc::new(GithubClient::new()),
        cache,
        config.cache_ttl_secs,
    );

    let activities = pipeline::run(&fetcher, &config.username, config.event_type.as_deref()).await?;
    output::render(&activities, config.format)
}
