//! Display formatting helpers.

/// USD price for display. Sub-cent prices keep enough precision to be
/// meaningful for meme tokens.
pub fn format_usd(value: f64) -> String {
    if value > 0.0 && value < 0.01 {
        format!("${:.6}", value)
    } else {
        format!("${:.2}", value)
    }
}

/// Token balance for display.
pub fn format_balance(amount: f64) -> String {
    format!("{:.4}", amount)
}

/// 24h change with an explicit sign.
pub fn format_change(percent: f64) -> String {
    format!("{:+.2}%", percent)
}

/// Abbreviated public key, first and last four characters.
pub fn short_pubkey(pubkey: &str) -> String {
    if pubkey.len() <= 8 {
        return pubkey.to_string();
    }
    format!("{}...{}", &pubkey[..4], &pubkey[pubkey.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(142.3567), "$142.36");
        assert_eq!(format_usd(1.0), "$1.00");
        assert_eq!(format_usd(0.000027), "$0.000027");
        assert_eq!(format_usd(0.0), "$0.00");
    }

    #[test]
    fn test_format_change_sign() {
        assert_eq!(format_change(2.5), "+2.50%");
        assert_eq!(format_change(-1.25), "-1.25%");
    }

    #[test]
    fn test_short_pubkey() {
        assert_eq!(
            short_pubkey("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU"),
            "7xKX...gAsU"
        );
        assert_eq!(short_pubkey("short"), "short");
    }
}
