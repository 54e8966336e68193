//! API utilities for frontend-backend communication
//!
//! Resolves the backend root that every dashboard request is sent to.

use thiserror::Error;

/// Port the GestPro backend listens on when it shares the page's host
const DEFAULT_API_PORT: u16 = 8080;

/// Base URL configured at build time, e.g. `GESTPRO_API_BASE_URL=https://api.gestpro.com.br`
const BUILD_BASE_URL: Option<&str> = option_env!("GESTPRO_API_BASE_URL");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid API base URL: {0:?}")]
pub struct InvalidBaseUrl(pub String);

/// Where the backend lives.
///
/// An empty `base_url` sends requests to the page's own origin.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Build-time base URL when present, otherwise the page host on the
    /// backend port.
    pub fn from_environment() -> Self {
        match BUILD_BASE_URL {
            Some(url) => Self::new(url),
            None => Self::new(api_base()),
        }
    }

    /// Join the base URL with an absolute API path (`/api/...`)
    pub fn url(&self, path: &str) -> Result<String, InvalidBaseUrl> {
        let base = self.base_url.trim().trim_end_matches('/');
        let accepted = base.is_empty()
            || base.starts_with("http://")
            || base.starts_with("https://")
            || base.starts_with('/');
        if !accepted {
            return Err(InvalidBaseUrl(self.base_url.clone()));
        }
        Ok(format!("{}{}", base, path))
    }
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:8080" or "https://example.com:8080"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}
