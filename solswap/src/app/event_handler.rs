//! Applies background-task events to the state on the UI thread.

use crate::app::events::AppEvent;
use crate::app::tasks;
use crate::app::App;
use lib_solana::tokens::{self, TokenCatalog};
use std::time::Instant;

pub(crate) fn apply(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::QuoteResult { generation, result } => {
            // Stale responses belong to a superseded input; drop them.
            if generation != app.debouncer.current_generation() {
                tracing::debug!(generation, "dropping stale quote response");
                return;
            }
            let mut state = app.state.write();
            state.swap.quote_loading = false;
            match result {
                Ok(quote) => {
                    let decimals = TokenCatalog::by_symbol(&state.swap.buy_token)
                        .map(|t| t.decimals)
                        .unwrap_or(6);
                    match quote.out_amount_units() {
                        Some(units) => {
                            state.swap.buy_amount =
                                format!("{:.6}", tokens::from_base_units(units, decimals));
                            state.swap.quote = Some(quote);
                        }
                        None => {
                            tracing::warn!("quote had unparseable out amount");
                            state.swap.buy_amount.clear();
                            state.swap.quote = None;
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "quote fetch failed");
                    state.swap.buy_amount.clear();
                    state.swap.quote = None;
                }
            }
        }
        AppEvent::PricesUpdated(prices) => {
            let mut state = app.state.write();
            state.prices = prices;
            state.fetching_prices = false;
            state.last_price_update = Instant::now();
        }
        AppEvent::BalancesUpdated(balances) => {
            let mut state = app.state.write();
            state.balances = balances;
            state.fetching_balances = false;
            state.last_balance_update = Instant::now();
        }
        AppEvent::SwapFinished(Ok(signature)) => {
            {
                let mut state = app.state.write();
                state.swap.swapping = false;
                state.swap.tx_signature = Some(signature);
                state.swap.sell_amount.clear();
                state.swap.buy_amount.clear();
                state.swap.quote = None;
                if state.settings.sound_effects {
                    tracing::debug!("sound: swap success");
                }
            }
            // One immediate refresh so the new balances show up.
            tasks::refresh::fetch_balances(&app.state, &app.event_tx, &app.handle);
        }
        AppEvent::SwapFinished(Err(message)) => {
            tracing::error!(error = %message, "swap failed");
            let mut state = app.state.write();
            state.swap.swapping = false;
            state.swap_error = Some(message.to_string());
        }
    }
}
