//! Hiscore lookup for the `runescape` command
//!
//! Fetching and parsing are kept apart so each can fail in its own way:
//! [`FetchError`] when no proxy delivered a payload, [`ParseError`] when the
//! payload does not match the skill schema.

pub mod fetcher;
pub mod parser;

pub use fetcher::{
    first_success, AttemptError, AttemptFailure, FetchError, HttpTextFetcher, ProxyEndpoint,
    TextFetcher,
};
pub use parser::{parse_stats, ParseError};

use std::time::Duration;
use tracing::{info, warn};

use crate::config::StatsConfig;
use crate::models::StatRecord;

/// Failure of the whole lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("could not fetch stats: {0}")]
    Fetch(#[from] FetchError),

    #[error("could not parse stats: {0}")]
    Parse(#[from] ParseError),
}

/// Fetches and parses one player's hiscore entry
#[derive(Debug, Clone)]
pub struct StatsClient<F = HttpTextFetcher> {
    fetcher: F,
    endpoints: Vec<ProxyEndpoint>,
    target: String,
    attempt_timeout: Duration,
}

impl StatsClient<HttpTextFetcher> {
    /// Client that talks HTTP through the configured proxies
    pub fn from_config(config: &StatsConfig) -> Self {
        let fetcher = HttpTextFetcher::new(config.request_timeout());
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: TextFetcher> StatsClient<F> {
    /// Client using a custom request implementation
    pub fn with_fetcher(config: &StatsConfig, fetcher: F) -> Self {
        Self {
            fetcher,
            endpoints: config.proxies.iter().map(ProxyEndpoint::new).collect(),
            target: config.target(),
            attempt_timeout: config.request_timeout(),
        }
    }

    /// URL of the hiscore page, before any proxy prefix
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn endpoints(&self) -> &[ProxyEndpoint] {
        &self.endpoints
    }

    /// Raw payload from the first proxy that answers
    pub async fn fetch_raw(&self) -> Result<String, FetchError> {
        first_success(&self.fetcher, &self.endpoints, &self.target, self.attempt_timeout).await
    }

    /// Fetch and parse the player's skills
    pub async fn fetch_stats(&self) -> Result<Vec<StatRecord>, StatsError> {
        let payload = self.fetch_raw().await?;
        match parse_stats(&payload) {
            Ok(records) => {
                info!("Loaded {} skills for {}", records.len(), self.target);
                Ok(records)
            }
            Err(e) => {
                warn!("Hiscore payload rejected: {}", e);
                Err(e.into())
            }
        }
    }
}
