//! Swap form handlers.

use crate::app::state::AppState;

/// Clear the quote and stop showing the loading indicator. Called on
/// every input change so a stale quote can never be executed.
fn invalidate_quote(state: &mut AppState) {
    state.swap.quote = None;
    state.swap.quote_loading = false;
}

/// The user edited the sell amount. The caller reschedules the quote
/// debounce afterwards.
pub fn sell_amount_changed(state: &mut AppState, value: String) {
    state.swap.sell_amount = value;
    invalidate_quote(state);
}

/// The user picked a new sell-side token.
pub fn sell_token_selected(state: &mut AppState, symbol: &str) {
    if state.swap.sell_token == symbol {
        return;
    }
    state.swap.sell_token = symbol.to_string();
    invalidate_quote(state);
}

/// The user picked a new buy-side token.
pub fn buy_token_selected(state: &mut AppState, symbol: &str) {
    if state.swap.buy_token == symbol {
        return;
    }
    state.swap.buy_token = symbol.to_string();
    invalidate_quote(state);
}

/// Flip the pair. The quoted buy amount becomes the new sell amount so
/// the user can immediately quote the reverse direction.
pub fn flip_pair(state: &mut AppState) {
    std::mem::swap(&mut state.swap.sell_token, &mut state.swap.buy_token);
    state.swap.sell_amount = std::mem::take(&mut state.swap.buy_amount);
    invalidate_quote(state);
}

/// Fill the sell amount with the full balance of the sell token.
pub fn max_clicked(state: &mut AppState) {
    if !state.is_connected() {
        return;
    }
    let balance = state
        .balances
        .get(&state.swap.sell_token)
        .copied()
        .unwrap_or(0.0);
    if balance > 0.0 {
        state.swap.sell_amount = balance.to_string();
        invalidate_quote(state);
    }
}
