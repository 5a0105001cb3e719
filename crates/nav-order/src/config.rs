//! Order API Configuration
//!
//! Endpoint and CSRF settings handed over by the page shell.

use reqwest::header::HeaderName;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "/admin/navigation/order/";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid order endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("invalid CSRF header name {0:?}")]
    InvalidCsrfHeader(String),
    #[error("no CSRF token available")]
    MissingCsrfToken,
}

/// Raw settings as read from the page (endpoint may be relative)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderApiConfig {
    pub endpoint: String,
    pub csrf_header: String,
    pub csrf_token: String,
}

impl Default for OrderApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            csrf_header: DEFAULT_CSRF_HEADER.to_string(),
            csrf_token: String::new(),
        }
    }
}

/// Validated settings with an absolute endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub endpoint: Url,
    pub csrf_header: String,
    pub csrf_token: String,
}

impl OrderApiConfig {
    pub fn new(endpoint: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            csrf_token: csrf_token.into(),
            ..Default::default()
        }
    }

    /// Resolve `endpoint` against `base_url` (usually the page origin).
    /// An absolute endpoint ignores the base.
    pub fn resolve(&self, base_url: &str) -> Result<ResolvedConfig, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason,
        };

        let endpoint = match Url::parse(&self.endpoint) {
            Ok(url) => url,
            Err(_) => Url::parse(base_url)
                .and_then(|base| base.join(&self.endpoint))
                .map_err(|e| invalid(e.to_string()))?,
        };
        if endpoint.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }

        HeaderName::from_bytes(self.csrf_header.as_bytes())
            .map_err(|_| ConfigError::InvalidCsrfHeader(self.csrf_header.clone()))?;

        let csrf_token = self.csrf_token.trim();
        if csrf_token.is_empty() {
            return Err(ConfigError::MissingCsrfToken);
        }

        Ok(ResolvedConfig {
            endpoint,
            csrf_header: self.csrf_header.clone(),
            csrf_token: csrf_token.to_string(),
        })
    }
}
