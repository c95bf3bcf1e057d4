//! # Jupiter Aggregator Client
//!
//! Integration with Jupiter Aggregator V6 for swap quotes and swap
//! transaction builds.

// region: --- Modules
pub mod types;
pub mod quote;
pub mod swap;
// endregion: --- Modules

use reqwest::Client;
use std::time::Duration;

const QUOTE_API_BASE: &str = "https://quote-api.jup.ag/v6";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builder for configuring [`JupiterClient`].
#[derive(Debug, Clone)]
pub struct JupiterClientBuilder {
    timeout: Duration,
    api_base: String,
}

impl Default for JupiterClientBuilder {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            api_base: QUOTE_API_BASE.to_string(),
        }
    }
}

impl JupiterClientBuilder {
    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the quote API base URL (used by tests to point at a stub server).
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Build the client with configured settings.
    pub fn build(self) -> anyhow::Result<JupiterClient> {
        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(JupiterClient {
            http,
            api_base: self.api_base,
        })
    }
}

/// Client for the Jupiter Aggregator V6 HTTP API.
#[derive(Debug, Clone)]
pub struct JupiterClient {
    pub(crate) http: Client,
    pub(crate) api_base: String,
}

impl JupiterClient {
    /// Create a new Jupiter API client with default settings.
    pub fn new() -> anyhow::Result<Self> {
        Self::builder().build()
    }

    /// Create a new Jupiter client using a builder for configuration.
    pub fn builder() -> JupiterClientBuilder {
        JupiterClientBuilder::default()
    }
}

// Re-export commonly used types
pub use types::{QuoteResponse, SwapTransactionResponse};
