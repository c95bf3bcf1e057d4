//! Swap execution task: build, sign, submit, confirm.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::{AppError, SwapApi};
use async_channel::Sender;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use lib_solana::jupiter::QuoteResponse;
use lib_solana::rpc::SolanaRpc;
use lib_solana::wallet::WalletSigner;
use parking_lot::RwLock;
use solana_sdk::transaction::VersionedTransaction;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Everything the execution task needs, captured under one short lock.
pub(crate) struct SwapContext {
    pub quote: QuoteResponse,
    pub pubkey: String,
    pub signer: Arc<WalletSigner>,
    pub api: Arc<dyn SwapApi>,
    pub rpc: SolanaRpc,
    pub deadline: Duration,
}

/// Capture the context for a swap, or `None` when the guard fails:
/// no wallet, no quote, or a swap already in flight.
pub(crate) fn prepare_swap(state: &AppState) -> Option<SwapContext> {
    if state.swap.swapping {
        return None;
    }
    let pubkey = state.wallet.clone()?;
    let signer = state.wallet_signer.clone()?;
    let quote = state.swap.quote.clone()?;
    Some(SwapContext {
        quote,
        pubkey,
        signer,
        api: Arc::clone(&state.swap_api),
        rpc: state.rpc.clone(),
        deadline: Duration::from_secs(u64::from(state.settings.deadline_mins) * 60),
    })
}

/// Kick off the swap if the guard passes. Marks the state as swapping
/// before spawning so the button disables on the same frame.
pub fn execute_swap(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    handle: &Handle,
) {
    let context = {
        let mut state = state.write();
        let Some(context) = prepare_swap(&state) else {
            return;
        };
        state.swap.swapping = true;
        context
    };

    let event_tx = event_tx.clone();
    handle.spawn(async move {
        let result = run_swap(context).await;
        let _ = event_tx.send(AppEvent::SwapFinished(result)).await;
    });
}

async fn run_swap(ctx: SwapContext) -> Result<String, AppError> {
    let built = ctx
        .api
        .get_swap_transaction(&ctx.quote, &ctx.pubkey)
        .await
        .map_err(AppError::Api)?;

    let tx_bytes = BASE64
        .decode(&built.swap_transaction)
        .map_err(|e| AppError::Api(format!("Invalid transaction encoding: {e}")))?;
    let transaction: VersionedTransaction = bincode::deserialize(&tx_bytes)
        .map_err(|e| AppError::Api(format!("Invalid transaction payload: {e}")))?;

    let signed = ctx.signer.sign_transaction(transaction)?;

    let signature = ctx
        .rpc
        .send_swap_transaction(&signed)
        .await
        .map_err(|e| AppError::Rpc(e.to_string()))?;

    ctx.rpc
        .confirm_transaction(&signature, ctx.deadline)
        .await
        .map_err(|e| AppError::Rpc(e.to_string()))?;

    Ok(signature.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{test_state_with_api, MockSwapApi};

    fn dummy_quote() -> QuoteResponse {
        serde_json::from_value(serde_json::json!({
            "inputMint": "So11111111111111111111111111111111111111112",
            "outputMint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
            "inAmount": "1000000000",
            "outAmount": "142000000",
            "priceImpactPct": "0.01"
        }))
        .unwrap()
    }

    #[test]
    fn test_guard_requires_wallet_and_quote() {
        let api = Arc::new(MockSwapApi::default());
        let mut state = test_state_with_api(api);
        assert!(prepare_swap(&state).is_none(), "disconnected");

        state.wallet = Some(WalletSigner::generate().public_key());
        state.wallet_signer = Some(Arc::new(WalletSigner::generate()));
        assert!(prepare_swap(&state).is_none(), "no quote");

        state.swap.quote = Some(dummy_quote());
        assert!(prepare_swap(&state).is_some());

        state.swap.swapping = true;
        assert!(prepare_swap(&state).is_none(), "already in flight");
    }

    #[test]
    fn test_deadline_follows_setting() {
        let api = Arc::new(MockSwapApi::default());
        let mut state = test_state_with_api(api);
        state.wallet = Some(WalletSigner::generate().public_key());
        state.wallet_signer = Some(Arc::new(WalletSigner::generate()));
        state.swap.quote = Some(dummy_quote());
        state.settings.set_deadline(3);

        let ctx = prepare_swap(&state).unwrap();
        assert_eq!(ctx.deadline, Duration::from_secs(180));
    }

    #[tokio::test]
    async fn test_guard_failure_spawns_nothing() {
        let api = Arc::new(MockSwapApi::default());
        let state = Arc::new(RwLock::new(test_state_with_api(api.clone())));
        let (tx, rx) = async_channel::unbounded();

        execute_swap(&state, &tx, &Handle::current());

        assert!(!state.read().swap.swapping);
        assert!(rx.try_recv().is_err());
        assert_eq!(api.swap_calls(), 0);
    }
}
