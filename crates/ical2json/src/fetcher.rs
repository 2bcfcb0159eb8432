//! reqwest-backed [`CalendarFetcher`].

use async_trait::async_trait;
use ical2json_core::source::{CalendarFetcher, FetchError};

use crate::config::Config;

/// Fetches source calendars over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher using the configured timeout and user agent.
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl CalendarFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "Source returned an error status");
            return Err(FetchError::UpstreamStatus {
                status: Some(status.as_u16()),
            });
        }

        let body = response.bytes().await.map_err(body_error)?;
        Ok(body.to_vec())
    }
}

/// Classifies a failure to send the request.
fn request_error(error: reqwest::Error) -> FetchError {
    if error.is_builder() {
        FetchError::InvalidUrl(error.to_string())
    } else if error.is_status() {
        FetchError::UpstreamStatus {
            status: error.status().map(|s| s.as_u16()),
        }
    } else {
        FetchError::Unreachable(error.to_string())
    }
}

/// Classifies a failure while reading the response body.
fn body_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Unreachable(error.to_string())
    } else {
        FetchError::Body(error.to_string())
    }
}
