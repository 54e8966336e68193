//! Read-only JSON sources with fallback.
//!
//! [`DataSourceClient::fetch_json_or_default`] never fails: a network error,
//! a non-success status or a body that does not parse all yield the
//! caller-supplied default. One attempt per call, no retries.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::RequestCredentials;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Minimal `GET` transport. Futures are not `Send`: browser fetch lives on
/// the main thread.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Body of a successful response
    async fn get_text(&self, url: &str) -> Result<String, SourceError>;
}

/// `fetch` with `credentials: include`, so the session cookie goes along
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn get_text(&self, url: &str) -> Result<String, SourceError> {
        let response = Request::get(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;

        if !response.ok() {
            return Err(SourceError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))
    }
}

pub struct DataSourceClient<T> {
    transport: T,
}

impl<T: HttpTransport> DataSourceClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn fetch_json<R>(&self, url: &str) -> Result<R, SourceError>
    where
        R: DeserializeOwned,
    {
        let body = self.transport.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `fetch_json`, with every failure replaced by `default`
    pub async fn fetch_json_or_default<R>(&self, url: &str, default: R) -> R
    where
        R: DeserializeOwned,
    {
        self.fetch_json(url).await.unwrap_or(default)
    }
}
