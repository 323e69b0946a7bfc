//! HTTP client for the two licensing feeds.
//!
//! Retrieval is deliberately simple: GET the feed URL, optionally with basic
//! auth, retry a bounded number of times with a short pause between rounds,
//! and hand the decoded JSON tree to the model crate untouched. Non-success
//! status codes count as failed attempts, the same as transport errors.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while fetching a feed.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed at {url} still unavailable after {attempts} attempts")]
    Exhausted { url: String, attempts: u32 },
}

/// Pause between fetch rounds.
const RETRY_DELAY: Duration = Duration::from_millis(100);

/// Feed fetcher with bounded retries.
pub struct FeedClient {
    http: reqwest::Client,
    credentials: Option<(String, String)>,
    max_attempts: u32,
}

impl FeedClient {
    /// Create a client that gives up after `max_attempts` rounds per feed.
    /// An attempt budget of zero is treated as one.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials: None,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Attach basic-auth credentials to every request.
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    /// Fetch one feed payload, retrying until the attempt budget runs out.
    pub async fn fetch(&self, url: &str) -> Result<Value, FeedError> {
        for attempt in 1..=self.max_attempts {
            info!("Attempt {attempt}/{}: fetching {url}", self.max_attempts);
            match self.try_fetch(url).await {
                Ok(payload) => return Ok(payload),
                Err(error) => warn!("Attempt {attempt} failed: {error}"),
            }
            if attempt < self.max_attempts {
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
        Err(FeedError::Exhausted {
            url: url.to_string(),
            attempts: self.max_attempts,
        })
    }

    async fn try_fetch(&self, url: &str) -> Result<Value, reqwest::Error> {
        let mut request = self.http.get(url);
        if let Some((username, password)) = &self.credentials {
            request = request.basic_auth(username, Some(password));
        }
        let response = request.send().await?.error_for_status()?;
        response.json().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_budget_has_a_floor() {
        let client = FeedClient::new(0);
        assert_eq!(client.max_attempts, 1);
    }
}
