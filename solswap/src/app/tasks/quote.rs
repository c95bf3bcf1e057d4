//! Debounced quote fetch task.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::{AppError, SwapApi};
use async_channel::Sender;
use lib_solana::tokens::{self, TokenCatalog};
use parking_lot::RwLock;
use std::sync::Arc;

/// Everything a quote request needs, resolved from the form.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub input_mint: String,
    pub output_mint: String,
    pub amount_units: u64,
    pub slippage_bps: u16,
}

/// Resolve the form into a request, or `None` when the sell amount is
/// empty, unparseable, or not positive.
pub fn prepare_quote_request(state: &AppState) -> Option<QuoteRequest> {
    let amount: f64 = state.swap.sell_amount.trim().parse().ok()?;
    // "nan" and "inf" parse successfully; only finite positive amounts
    // are quotable.
    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }
    let sell = TokenCatalog::by_symbol(&state.swap.sell_token)?;
    let buy = TokenCatalog::by_symbol(&state.swap.buy_token)?;
    Some(QuoteRequest {
        input_mint: sell.mint.to_string(),
        output_mint: buy.mint.to_string(),
        amount_units: tokens::to_base_units(amount, sell.decimals),
        slippage_bps: tokens::slippage_bps(state.settings.slippage_pct),
    })
}

/// Run one quote round. Invalid input clears the buy side; valid input
/// flips the loading flag and asks the aggregator, reporting the result
/// tagged with the debounce generation that produced it.
pub async fn fetch_quote(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    generation: u64,
) {
    let prepared: Option<(QuoteRequest, Arc<dyn SwapApi>)> = {
        let mut state = state.write();
        match prepare_quote_request(&state) {
            Some(request) => {
                state.swap.quote_loading = true;
                Some((request, Arc::clone(&state.swap_api)))
            }
            None => {
                state.swap.buy_amount.clear();
                state.swap.quote = None;
                state.swap.quote_loading = false;
                None
            }
        }
    };
    let Some((request, api)) = prepared else {
        return;
    };

    tracing::debug!(
        input = %request.input_mint,
        output = %request.output_mint,
        amount = request.amount_units,
        generation,
        "fetching quote"
    );
    let result = api
        .get_swap_quote(
            &request.input_mint,
            &request.output_mint,
            request.amount_units,
            request.slippage_bps,
        )
        .await
        .map_err(AppError::Api);
    let _ = event_tx
        .send(AppEvent::QuoteResult { generation, result })
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{test_state, test_state_with_api, MockSwapApi};

    #[test]
    fn test_prepare_converts_to_base_units() {
        let mut state = test_state();
        state.swap.sell_amount = "1.5".to_string();
        let request = prepare_quote_request(&state).unwrap();
        assert_eq!(request.amount_units, 1_500_000_000); // SOL has 9 decimals
        assert_eq!(request.slippage_bps, 50); // default 0.5%
        assert_eq!(
            request.input_mint,
            "So11111111111111111111111111111111111111112"
        );
    }

    #[test]
    fn test_prepare_rejects_invalid_amounts() {
        let mut state = test_state();
        for bad in ["", "abc", "0", "-1", "0.0", "nan", "NaN", "inf", "-inf"] {
            state.swap.sell_amount = bad.to_string();
            assert!(prepare_quote_request(&state).is_none(), "accepted {bad:?}");
        }
    }

    #[tokio::test]
    async fn test_invalid_input_clears_buy_side_without_request() {
        let api = Arc::new(MockSwapApi::default());
        let state = Arc::new(RwLock::new(test_state_with_api(api.clone())));
        let (tx, rx) = async_channel::unbounded();

        for bad in ["abc", "nan"] {
            {
                let mut s = state.write();
                s.swap.sell_amount = bad.to_string();
                s.swap.buy_amount = "12.000000".to_string();
            }
            fetch_quote(Arc::clone(&state), tx.clone(), 1).await;

            assert!(rx.try_recv().is_err(), "no event expected for {bad:?}");
            assert_eq!(api.quote_calls(), 0, "request issued for {bad:?}");
            let s = state.read();
            assert!(s.swap.buy_amount.is_empty());
            assert!(s.swap.quote.is_none());
        }
    }

    #[tokio::test]
    async fn test_valid_input_reports_tagged_result() {
        let api = Arc::new(MockSwapApi::default());
        let state = Arc::new(RwLock::new(test_state_with_api(api.clone())));
        state.write().swap.sell_amount = "1".to_string();

        let (tx, rx) = async_channel::unbounded();
        fetch_quote(Arc::clone(&state), tx, 7).await;

        assert_eq!(api.quote_calls(), 1);
        match rx.try_recv().unwrap() {
            AppEvent::QuoteResult { generation, result } => {
                assert_eq!(generation, 7);
                assert!(result.is_ok());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
