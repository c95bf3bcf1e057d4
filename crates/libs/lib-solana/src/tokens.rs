//! # Token Catalog
//!
//! The fixed set of tokens the terminal trades, plus amount conversions
//! between display units and on-chain base units.

/// A tradeable token: symbol, display name, mint address, decimal precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub symbol: &'static str,
    pub name: &'static str,
    pub mint: &'static str,
    pub decimals: u8,
}

/// The four tokens the terminal supports. Static and immutable.
pub const CATALOG: &[Token] = &[
    Token {
        symbol: "SOL",
        name: "Solana",
        mint: "So11111111111111111111111111111111111111112",
        decimals: 9,
    },
    Token {
        symbol: "USDC",
        name: "USD Coin",
        mint: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
        decimals: 6,
    },
    Token {
        symbol: "USDT",
        name: "Tether USD",
        mint: "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB",
        decimals: 6,
    },
    Token {
        symbol: "BONK",
        name: "Bonk",
        mint: "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263",
        decimals: 5,
    },
];

/// Lookup helpers over the static catalog.
pub struct TokenCatalog;

impl TokenCatalog {
    /// All known tokens in display order.
    pub fn all() -> &'static [Token] {
        CATALOG
    }

    /// Find a token by its symbol (case-sensitive, catalog symbols are uppercase).
    pub fn by_symbol(symbol: &str) -> Option<&'static Token> {
        CATALOG.iter().find(|t| t.symbol == symbol)
    }

    /// Map a mint address back to a known token. Unknown mints return `None`.
    pub fn by_mint(mint: &str) -> Option<&'static Token> {
        CATALOG.iter().find(|t| t.mint == mint)
    }
}

/// Convert a display amount to the token's smallest integer unit, flooring.
///
/// `1.5` SOL at 9 decimals is `1_500_000_000` lamports.
pub fn to_base_units(amount: f64, decimals: u8) -> u64 {
    (amount * 10f64.powi(decimals as i32)).floor() as u64
}

/// Convert a smallest-unit integer back to display units.
pub fn from_base_units(units: u64, decimals: u8) -> f64 {
    units as f64 / 10f64.powi(decimals as i32)
}

/// Slippage tolerance percent to basis points, flooring. `0.5` -> `50`.
pub fn slippage_bps(percent: f64) -> u16 {
    (percent * 100.0).floor() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let sol = TokenCatalog::by_symbol("SOL").unwrap();
        assert_eq!(sol.decimals, 9);
        assert_eq!(sol.mint, "So11111111111111111111111111111111111111112");

        let bonk = TokenCatalog::by_mint("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263").unwrap();
        assert_eq!(bonk.symbol, "BONK");
        assert_eq!(bonk.decimals, 5);

        assert!(TokenCatalog::by_symbol("DOGE").is_none());
        assert!(TokenCatalog::by_mint("1111").is_none());
    }

    #[test]
    fn test_to_base_units() {
        assert_eq!(to_base_units(1.5, 9), 1_500_000_000);
        assert_eq!(to_base_units(1.0, 6), 1_000_000);
        assert_eq!(to_base_units(0.000001, 6), 1);
        // Flooring, never rounding up
        assert_eq!(to_base_units(0.9999999, 6), 999_999);
    }

    #[test]
    fn test_display_round_trip() {
        // Display -> base units -> display must survive 6-decimal precision
        for amount in [1.5f64, 0.25, 142.0, 0.000027] {
            let units = to_base_units(amount, 9);
            let back = from_base_units(units, 9);
            assert!(
                (back - amount).abs() < 1e-6,
                "round trip lost precision: {} -> {} -> {}",
                amount,
                units,
                back
            );
        }
    }

    #[test]
    fn test_slippage_bps() {
        assert_eq!(slippage_bps(0.5), 50);
        assert_eq!(slippage_bps(1.0), 100);
        assert_eq!(slippage_bps(0.1), 10);
        // Floored, not rounded
        assert_eq!(slippage_bps(0.159), 15);
    }
}
