//! GitHub events API client. One fetch per call, no retries.

use crate::error::{ActivityError, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, StatusCode};
use std::time::Duration;

const GITHUB_API_BASE: &str = "https://api.github.com";
const REQUEST_TIMEOUT_MS: u64 = 10_000;

// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("github-activity/", env!("CARGO_PKG_VERSION"));

/// Authoritative source of a user's raw event feed.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetches the full response body for one user's event list.
    async fn fetch_events(&self, username: &str) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct GithubClient {
    http_client: Client,
    base_url: String,
}

impl GithubClient {
    pub fn new() -> Self {
        Self::with_base_url(GITHUB_API_BASE)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventSource for GithubClient {
    async fn fetch_events(&self, username: &str) -> Result<Vec<u8>> {
        let url = format!("{}/users/{}/events", self.base_url, username);
        debug!("Fetching events from {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ActivityError::NetworkError(format!("failed to get events: {}", e)))?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(ActivityError::UserNotFound(username.to_string()));
            }
            status if !status.is_success() => {
                return Err(ActivityError::NetworkError(format!(
                    "origin returned status {} for {}",
                    status, url
                )));
            }
            _ => {}
        }

        // The whole body is read before any parsing happens.
        let body = response
            .bytes()
            .await
            .map_err(|e| ActivityError::NetworkError(format!("failed to read body: {}", e)))?;
        info!("Fetched {} bytes of events for {}", body.len(), username);

        Ok(body.to_vec())
    }
}
