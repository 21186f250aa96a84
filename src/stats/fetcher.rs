//! Proxy fallback fetching
//!
//! The hiscore service does not allow cross-origin requests, so the lookup
//! goes through a list of public proxies. Proxies are tried strictly in
//! order, one at a time; the first successful response wins.

use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Header the CORS proxies require on forwarded requests
pub const REQUESTED_WITH_HEADER: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// Single request capability used by [`first_success`]
#[async_trait]
pub trait TextFetcher: Send + Sync {
    /// GET `url` and return the body of a successful response
    async fn get_text(&self, url: &str) -> Result<String, AttemptError>;
}

/// Why one proxy attempt failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttemptError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// A failed attempt and the endpoint it was made against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptFailure {
    pub url: String,
    pub error: AttemptError,
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.url, self.error)
    }
}

/// Every proxy failed, or there was none to try
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("no proxy endpoints configured")]
    NoProxies,

    #[error("all {} proxies failed", .attempts.len())]
    AllProxiesFailed { attempts: Vec<AttemptFailure> },
}

/// A proxy that forwards to whatever URL is appended to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyEndpoint {
    prefix: String,
}

impl ProxyEndpoint {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Full request URL for `target`
    pub fn build(&self, target: &str) -> String {
        format!("{}{}", self.prefix, target)
    }
}

/// Try each endpoint in order and return the first successful body
///
/// Attempts are sequential. Each one is bounded by `attempt_timeout`; a
/// timed-out attempt counts as a failure and the next endpoint is tried.
pub async fn first_success<F>(
    fetcher: &F,
    endpoints: &[ProxyEndpoint],
    target: &str,
    attempt_timeout: Duration,
) -> Result<String, FetchError>
where
    F: TextFetcher + ?Sized,
{
    if endpoints.is_empty() {
        return Err(FetchError::NoProxies);
    }

    let mut attempts = Vec::with_capacity(endpoints.len());
    for endpoint in endpoints {
        let url = endpoint.build(target);
        debug!("Requesting {}", url);

        let outcome = match tokio::time::timeout(attempt_timeout, fetcher.get_text(&url)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(AttemptError::Timeout(attempt_timeout)),
        };

        match outcome {
            Ok(body) => {
                info!("Fetched {} bytes through {}", body.len(), endpoint.prefix());
                return Ok(body);
            }
            Err(error) => {
                warn!("Proxy {} failed: {}", endpoint.prefix(), error);
                attempts.push(AttemptFailure { url, error });
            }
        }
    }

    warn!("All {} proxies failed", attempts.len());
    Err(FetchError::AllProxiesFailed { attempts })
}

/// [`TextFetcher`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTextFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpTextFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            timeout,
        }
    }
}

#[async_trait]
impl TextFetcher for HttpTextFetcher {
    async fn get_text(&self, url: &str) -> Result<String, AttemptError> {
        let (header, value) = REQUESTED_WITH_HEADER;
        let response = self
            .client
            .get(url)
            .header(header, value)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AttemptError::Timeout(self.timeout)
                } else {
                    AttemptError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        debug!("{} answered {}", url, status);
        if !status.is_success() {
            return Err(AttemptError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| AttemptError::Transport(e.to_string()))
    }
}
