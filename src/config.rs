use crate::cache::DEFAULT_TTL_SECS;
use crate::error::{ActivityError, Result};
use crate::output::OutputFormat;
use clap::Parser;
use std::env;

/// Fetch and summarize a GitHub user's recent public activity.
#[derive(Debug, Parser)]
#[command(name = "github-activity", version, about)]
pub struct Cli {
    /// GitHub username to look up
    pub username: String,

    /// Only show events of this exact type, e.g. PushEvent
    #[arg(long = "event")]
    pub event_type: Option<String>,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Rows)]
    pub format: OutputFormat,

    /// Redis host for caching; caching is disabled when absent
    #[arg(long = "redis-host")]
    pub redis_host: Option<String>,

    /// Redis port
    #[arg(long = "redis-port", default_value_t = 6379)]
    pub redis_port: u16,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub event_type: Option<String>,
    pub format: OutputFormat,
    pub redis_url: Option<String>,
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Merges CLI arguments with env fallbacks. `REDIS_HOST`/`REDIS_PORT`
    /// apply only when the flags are absent; `CACHE_TTL_SECS` overrides the
    /// fixed 5 minute expiry.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let redis_host = cli
            .redis_host
            .or_else(|| env::var("REDIS_HOST").ok().filter(|h| !h.is_empty()));
        let redis_port = match env::var("REDIS_PORT") {
            Ok(port) if cli.redis_port == 6379 => port.parse().map_err(|_| {
                ActivityError::ConfigError(format!("invalid REDIS_PORT value: {}", port))
            })?,
            _ => cli.redis_port,
        };

        let cache_ttl_secs = env::var("CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TTL_SECS);

        if cli.username.is_empty() {
            return Err(ActivityError::ConfigError(
                "username must not be empty".to_string(),
            ));
        }

        Ok(Config {
            username: cli.username,
            event_type: cli.event_type,
            format: cli.format,
            redis_url: redis_host.map(|host| format!("redis://{}:{}", host, redis_port)),
            cache_ttl_secs,
        })
    }

    pub fn validate_and_log(&self) {
        log::info!("Application configuration loaded: {:?}", self);
        if self.redis_url.is_none() {
            log::info!("No Redis host configured, caching disabled");
        }
    }
}
