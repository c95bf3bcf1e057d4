//! # Service Traits
//!
//! The aggregator API seam, as a trait so tasks can be exercised against
//! an in-memory mock in tests.

use async_trait::async_trait;
use lib_solana::jupiter::{JupiterClient, QuoteResponse, SwapTransactionResponse};

/// Quote and swap-build operations against the liquidity aggregator.
#[async_trait]
pub trait SwapApi: Send + Sync {
    /// Get a swap quote for an exact-in trade in smallest units.
    async fn get_swap_quote(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: u64,
        slippage_bps: u16,
    ) -> Result<QuoteResponse, String>;

    /// Build an unsigned swap transaction from a stored quote.
    async fn get_swap_transaction(
        &self,
        quote: &QuoteResponse,
        user_public_key: &str,
    ) -> Result<SwapTransactionResponse, String>;
}

#[async_trait]
impl SwapApi for JupiterClient {
    async fn get_swap_quote(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: u64,
        slippage_bps: u16,
    ) -> Result<QuoteResponse, String> {
        JupiterClient::get_swap_quote(self, input_mint, output_mint, amount, slippage_bps)
            .await
            .map_err(|e| e.to_string())
    }

    async fn get_swap_transaction(
        &self,
        quote: &QuoteResponse,
        user_public_key: &str,
    ) -> Result<SwapTransactionResponse, String> {
        JupiterClient::get_swap_transaction(self, quote, user_public_key)
            .await
            .map_err(|e| e.to_string())
    }
}
