// Shared transport configuration for building reqwest::Client instances.
//
// The control-plane and object-store clients share timeout and header
// settings through this module, avoiding duplicated builder logic. Retry,
// backoff, and credential injection are deliberately absent: they belong
// to the surrounding transport, not to this crate.

use std::time::Duration;

use reqwest::header::HeaderMap;

use crate::error::ApiError;

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub default_headers: HeaderMap,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            default_headers: HeaderMap::new(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("gatesync/", env!("CARGO_PKG_VERSION")))
            .default_headers(self.default_headers.clone())
            .build()?;
        Ok(client)
    }

    /// Replace the default header set (e.g. to inject an API key header).
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }
}
