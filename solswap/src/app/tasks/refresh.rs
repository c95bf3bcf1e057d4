//! Price and balance polling tasks.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use async_channel::Sender;
use lib_solana::rpc;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Fetch the price map. Skipped when a fetch is already in flight so a
/// slow API cannot stack up requests.
pub fn fetch_prices(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>, handle: &Handle) {
    let feed = {
        let mut state = state.write();
        if state.fetching_prices {
            return;
        }
        state.fetching_prices = true;
        Arc::clone(&state.price_feed)
    };

    let event_tx = event_tx.clone();
    handle.spawn(async move {
        let prices = feed.fetch_prices().await;
        let _ = event_tx.send(AppEvent::PricesUpdated(prices)).await;
    });
}

/// Fetch SOL and token balances for the connected wallet and rebuild the
/// balance map wholesale. On RPC failure the last known map is kept and
/// the next attempt waits for the regular poll interval: the poll
/// timestamp is stamped at spawn, not on completion, and the in-flight
/// flag keeps the frame loop from stacking queries behind a slow RPC.
pub fn fetch_balances(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>, handle: &Handle) {
    let (owner, client) = {
        let mut state = state.write();
        if state.fetching_balances {
            return;
        }
        let Some(owner) = state.wallet.clone() else {
            return;
        };
        state.fetching_balances = true;
        state.last_balance_update = std::time::Instant::now();
        (owner, state.rpc.clone())
    };

    let state = Arc::clone(state);
    let event_tx = event_tx.clone();
    handle.spawn(async move {
        let result = query_balances(&client, &owner).await;
        match result {
            Ok(balances) => {
                let _ = event_tx.send(AppEvent::BalancesUpdated(balances)).await;
            }
            Err(e) => {
                tracing::warn!(%e, "balance refresh failed");
                state.write().fetching_balances = false;
            }
        }
    });
}

async fn query_balances(
    client: &lib_solana::rpc::SolanaRpc,
    owner: &str,
) -> anyhow::Result<std::collections::HashMap<String, f64>> {
    let sol = client.get_sol_balance(owner).await?;
    let accounts = client.get_token_accounts(owner).await?;
    Ok(rpc::rebuild_balances(sol, &accounts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_state;

    #[tokio::test]
    async fn test_price_fetch_is_single_flight() {
        let state = Arc::new(RwLock::new(test_state()));
        let (tx, _rx) = async_channel::unbounded();

        fetch_prices(&state, &tx, &Handle::current());
        assert!(state.read().fetching_prices);

        // A second call while the first is in flight is a no-op.
        fetch_prices(&state, &tx, &Handle::current());
        assert!(state.read().fetching_prices);
    }

    #[tokio::test]
    async fn test_balance_fetch_requires_wallet() {
        let state = Arc::new(RwLock::new(test_state()));
        let (tx, rx) = async_channel::unbounded();

        fetch_balances(&state, &tx, &Handle::current());
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
        assert!(!state.read().fetching_balances);
    }

    #[tokio::test]
    async fn test_balance_fetch_is_single_flight() {
        let state = Arc::new(RwLock::new(test_state()));
        state.write().wallet = Some("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU".to_string());
        let (tx, _rx) = async_channel::unbounded();

        fetch_balances(&state, &tx, &Handle::current());
        assert!(state.read().fetching_balances);

        // Re-entry while the first query is in flight is a no-op.
        fetch_balances(&state, &tx, &Handle::current());
        assert!(state.read().fetching_balances);
    }

    #[tokio::test]
    async fn test_balance_fetch_failure_keeps_poll_cadence() {
        // The test RPC endpoint refuses connections, so the query fails.
        let state = Arc::new(RwLock::new(test_state()));
        state.write().wallet = Some("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU".to_string());
        let (tx, rx) = async_channel::unbounded();

        fetch_balances(&state, &tx, &Handle::current());
        let stamped = state.read().last_balance_update;

        // Wait for the failed query to release the in-flight flag.
        for _ in 0..200 {
            if !state.read().fetching_balances {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }

        let s = state.read();
        assert!(!s.fetching_balances);
        // No event, last known balances kept, and the poll timestamp was
        // stamped at spawn so the next attempt waits the full interval.
        assert!(rx.try_recv().is_err());
        assert_eq!(s.last_balance_update, stamped);
    }
}
