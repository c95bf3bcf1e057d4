//! Settings window handlers.

use crate::app::state::{AppState, RpcEndpoint};
use lib_solana::rpc::SolanaRpc;

/// Change slippage tolerance. A changed tolerance invalidates the
/// current quote since it was requested with the old value.
pub fn set_slippage(state: &mut AppState, percent: f64) {
    let before = state.settings.slippage_pct;
    state.settings.set_slippage(percent);
    if state.settings.slippage_pct != before {
        state.swap.quote = None;
    }
}

pub fn set_deadline(state: &mut AppState, minutes: u32) {
    state.settings.set_deadline(minutes);
}

/// Switch RPC endpoint and rebuild the client against it.
pub fn set_rpc_endpoint(state: &mut AppState, endpoint: RpcEndpoint) {
    if state.settings.rpc_endpoint == endpoint {
        return;
    }
    state.settings.rpc_endpoint = endpoint;
    state.rpc = SolanaRpc::new(endpoint.url());
    tracing::info!(endpoint = endpoint.name(), "rpc endpoint changed");
}

pub fn toggle_auto_refresh(state: &mut AppState) {
    state.settings.auto_refresh = !state.settings.auto_refresh;
}

pub fn toggle_sound_effects(state: &mut AppState) {
    state.settings.sound_effects = !state.settings.sound_effects;
}

pub fn reset(state: &mut AppState) {
    let endpoint_before = state.settings.rpc_endpoint;
    state.settings.reset();
    if state.settings.rpc_endpoint != endpoint_before {
        state.rpc = SolanaRpc::new(state.settings.rpc_endpoint.url());
    }
    state.swap.quote = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_state;
    use crate::app::state::Settings;

    #[test]
    fn test_out_of_range_slippage_is_ignored() {
        let mut state = test_state();
        set_slippage(&mut state, 99.0);
        assert_eq!(state.settings.slippage_pct, 0.5);
    }

    #[test]
    fn test_slippage_change_invalidates_quote() {
        let mut state = test_state();
        state.swap.quote = Some(
            serde_json::from_value(serde_json::json!({
                "inputMint": "So11111111111111111111111111111111111111112",
                "outputMint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
                "inAmount": "1000000000",
                "outAmount": "142000000",
                "priceImpactPct": "0.01"
            }))
            .unwrap(),
        );
        set_slippage(&mut state, 1.0);
        assert!(state.swap.quote.is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = test_state();
        set_slippage(&mut state, 3.0);
        set_deadline(&mut state, 5);
        toggle_auto_refresh(&mut state);
        set_rpc_endpoint(&mut state, RpcEndpoint::Helius);
        reset(&mut state);
        assert_eq!(state.settings, Settings::default());
    }
}
