//! # Jupiter Quote API
//!
//! Quote fetching from the Jupiter Aggregator V6 quote endpoint.

use super::types::QuoteResponse;
use super::JupiterClient;
use tracing::debug;

impl JupiterClient {
    /// Get a swap quote for an exact-in trade.
    ///
    /// `amount` is in the sell token's smallest units, `slippage_bps` in
    /// hundredths of a percent.
    pub async fn get_swap_quote(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: u64,
        slippage_bps: u16,
    ) -> anyhow::Result<QuoteResponse> {
        let url = format!(
            "{}/quote?inputMint={}&outputMint={}&amount={}&slippageBps={}",
            self.api_base, input_mint, output_mint, amount, slippage_bps
        );

        debug!("Jupiter swap quote request: {}", url);

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow::anyhow!("Jupiter quote failed: {}", error_text));
        }

        let quote: QuoteResponse = response.json().await?;

        debug!(
            "Jupiter quote: {} -> {} base units (impact: {})",
            quote.in_amount, quote.out_amount, quote.price_impact_pct
        );

        Ok(quote)
    }
}
