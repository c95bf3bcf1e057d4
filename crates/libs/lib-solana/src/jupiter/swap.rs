//! # Jupiter Swap Transaction Building
//!
//! Swap-build requests: turn a stored quote into an unsigned serialized
//! transaction for the connected wallet.

use super::types::{QuoteResponse, SwapRequest, SwapTransactionResponse};
use super::JupiterClient;
use tracing::debug;

impl JupiterClient {
    /// Build an unsigned swap transaction from a quote.
    ///
    /// The full quote object is posted back; wrap/unwrap of native SOL is
    /// always enabled so SOL legs behave like any SPL token.
    pub async fn get_swap_transaction(
        &self,
        quote_response: &QuoteResponse,
        user_public_key: &str,
    ) -> anyhow::Result<SwapTransactionResponse> {
        let url = format!("{}/swap", self.api_base);

        let request_body = SwapRequest {
            quote_response: quote_response.clone(),
            user_public_key: user_public_key.to_string(),
            wrap_and_unwrap_sol: true,
        };

        debug!("Jupiter swap build request for user: {}", user_public_key);

        let response = self.http.post(&url).json(&request_body).send().await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow::anyhow!("Jupiter swap build failed: {}", error_text));
        }

        let swap_response: SwapTransactionResponse = response.json().await?;

        debug!("Jupiter swap transaction received");

        Ok(swap_response)
    }
}
