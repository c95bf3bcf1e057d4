//! # Price Feed
//!
//! USD prices for the catalog tokens from the CoinGecko simple-price API,
//! with a fixed fallback table so the terminal never shows empty prices.

use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

const PRICE_API_BASE: &str = "https://api.coingecko.com/api/v3";

/// (symbol, coingecko id, stable-value) for the catalog tokens.
const COIN_IDS: &[(&str, &str, bool)] = &[
    ("SOL", "solana", false),
    ("USDC", "usd-coin", true),
    ("USDT", "tether", true),
    ("BONK", "bonk", false),
];

/// USD price and 24-hour percent change for one token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub price_usd: f64,
    pub change_24h: f64,
}

#[derive(Debug, Deserialize)]
struct CoinEntry {
    usd: Option<f64>,
    usd_24h_change: Option<f64>,
}

/// Client for the external price API.
#[derive(Debug, Clone)]
pub struct PriceFeed {
    http: Client,
    api_base: String,
}

impl PriceFeed {
    pub fn new() -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            api_base: PRICE_API_BASE.to_string(),
        })
    }

    /// Override the API base URL (used by tests to point at a stub server).
    pub fn with_api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Fetch USD prices for all catalog tokens.
    ///
    /// Any failure (network, HTTP status, parse) degrades to the fallback
    /// table; the caller always receives a complete price map.
    pub async fn fetch_prices(&self) -> HashMap<String, PriceQuote> {
        match self.try_fetch().await {
            Ok(prices) => prices,
            Err(e) => {
                warn!("Price fetch failed, using fallback table: {}", e);
                fallback_price_map()
            }
        }
    }

    async fn try_fetch(&self) -> anyhow::Result<HashMap<String, PriceQuote>> {
        let ids: Vec<&str> = COIN_IDS.iter().map(|(_, id, _)| *id).collect();
        let url = format!(
            "{}/simple/price?ids={}&vs_currencies=usd&include_24hr_change=true",
            self.api_base,
            ids.join(",")
        );

        debug!("Fetching prices for {} tokens", ids.len());

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(anyhow::anyhow!("price API returned {}", response.status()));
        }

        let data: HashMap<String, CoinEntry> = response.json().await?;
        Ok(map_price_response(&data))
    }
}

/// Map a coin-id keyed response into a symbol keyed price map.
///
/// Missing price fields default to 0, or 1 for the stable-value tokens;
/// missing change fields default to 0.
fn map_price_response(data: &HashMap<String, CoinEntry>) -> HashMap<String, PriceQuote> {
    COIN_IDS
        .iter()
        .map(|(symbol, id, stable)| {
            let entry = data.get(*id);
            let default_price = if *stable { 1.0 } else { 0.0 };
            let quote = PriceQuote {
                price_usd: entry.and_then(|e| e.usd).unwrap_or(default_price),
                change_24h: entry.and_then(|e| e.usd_24h_change).unwrap_or(0.0),
            };
            (symbol.to_string(), quote)
        })
        .collect()
}

/// Fixed fallback prices used when the external API is unavailable.
pub fn fallback_price_map() -> HashMap<String, PriceQuote> {
    let table = [
        ("SOL", 142.0),
        ("USDC", 1.0),
        ("USDT", 1.0),
        ("BONK", 0.000027),
    ];
    table
        .into_iter()
        .map(|(symbol, price_usd)| {
            (
                symbol.to_string(),
                PriceQuote {
                    price_usd,
                    change_24h: 0.0,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenCatalog;

    #[test]
    fn test_fallback_covers_every_catalog_token() {
        let map = fallback_price_map();
        for token in TokenCatalog::all() {
            assert!(map.contains_key(token.symbol), "missing {}", token.symbol);
            assert_eq!(map[token.symbol].change_24h, 0.0);
        }
        assert_eq!(map["SOL"].price_usd, 142.0);
        assert_eq!(map["USDC"].price_usd, 1.0);
        assert_eq!(map["USDT"].price_usd, 1.0);
        assert_eq!(map["BONK"].price_usd, 0.000027);
    }

    #[test]
    fn test_map_price_response_defaults() {
        // Only solana present, all other entries absent
        let mut data = HashMap::new();
        data.insert(
            "solana".to_string(),
            CoinEntry {
                usd: Some(150.5),
                usd_24h_change: None,
            },
        );

        let map = map_price_response(&data);
        assert_eq!(map["SOL"].price_usd, 150.5);
        assert_eq!(map["SOL"].change_24h, 0.0);
        // Stables default to 1, others to 0
        assert_eq!(map["USDC"].price_usd, 1.0);
        assert_eq!(map["USDT"].price_usd, 1.0);
        assert_eq!(map["BONK"].price_usd, 0.0);
    }

    #[tokio::test]
    async fn test_fetch_falls_back_on_unreachable_api() {
        // Nothing listens on this port; the request errors and the
        // fallback table must come back intact.
        let feed = PriceFeed::new().unwrap().with_api_base("http://127.0.0.1:9");
        let map = feed.fetch_prices().await;
        assert_eq!(map, fallback_price_map());
    }
}
