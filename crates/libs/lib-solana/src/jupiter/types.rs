//! # Jupiter API Types
//!
//! Type definitions for Jupiter Aggregator V6 API requests and responses.

use serde::{Deserialize, Serialize};

/// Response from the Jupiter quote endpoint.
///
/// Only the fields the terminal inspects are typed; everything else the
/// aggregator returns (route plan, thresholds, swap mode, ...) is kept in
/// `extra` so the quote can be posted back to the swap-build endpoint
/// byte-for-byte complete. Jupiter treats its own quote as opaque input
/// and rejects builds from truncated quotes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    #[serde(rename = "inputMint")]
    pub input_mint: String,
    #[serde(rename = "outputMint")]
    pub output_mint: String,
    #[serde(rename = "inAmount")]
    pub in_amount: String,
    #[serde(rename = "outAmount")]
    pub out_amount: String,
    /// Price impact as a decimal fraction, string-encoded on the wire.
    #[serde(rename = "priceImpactPct")]
    pub price_impact_pct: String,
    /// Remainder of the quote object, preserved verbatim for the swap build.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl QuoteResponse {
    /// Output amount in the buy token's smallest units, if it parses.
    pub fn out_amount_units(&self) -> Option<u64> {
        self.out_amount.parse().ok()
    }

    /// Price impact as a fraction (0.0013 = 0.13%), zero if unparseable.
    pub fn price_impact(&self) -> f64 {
        self.price_impact_pct.parse().unwrap_or(0.0)
    }
}

/// Request body for the Jupiter swap-build endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub quote_response: QuoteResponse,
    pub user_public_key: String,
    pub wrap_and_unwrap_sol: bool,
}

/// Response from the Jupiter swap-build endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapTransactionResponse {
    /// Base64-encoded serialized versioned transaction.
    pub swap_transaction: String,
    /// Block height after which the transaction is invalid.
    #[serde(default)]
    pub last_valid_block_height: u64,
    #[serde(default)]
    pub prioritization_fee_lamports: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_preserves_unknown_fields() {
        let raw = serde_json::json!({
            "inputMint": "So11111111111111111111111111111111111111112",
            "outputMint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
            "inAmount": "1500000000",
            "outAmount": "212340000",
            "priceImpactPct": "0.0013",
            "otherAmountThreshold": "211278300",
            "swapMode": "ExactIn",
            "routePlan": [{"swapInfo": {"ammKey": "abc"}}]
        });

        let quote: QuoteResponse = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(quote.out_amount_units(), Some(212_340_000));
        assert!((quote.price_impact() - 0.0013).abs() < 1e-9);

        // Round-tripping must reproduce the full object, route plan included
        let back = serde_json::to_value(&quote).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_quote_with_junk_amounts() {
        let quote = QuoteResponse {
            input_mint: String::new(),
            output_mint: String::new(),
            in_amount: "abc".into(),
            out_amount: "not-a-number".into(),
            price_impact_pct: "??".into(),
            extra: serde_json::Map::new(),
        };
        assert_eq!(quote.out_amount_units(), None);
        assert_eq!(quote.price_impact(), 0.0);
    }
}
