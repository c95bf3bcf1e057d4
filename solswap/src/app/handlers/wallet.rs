//! Wallet connect / disconnect handlers.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use async_channel::Sender;
use lib_solana::wallet::WalletProvider;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Where to send users who have no local signer configured.
const WALLET_SETUP_URL: &str = "https://docs.solanalabs.com/cli/wallets/file-system";

/// Connect the local wallet. If no keypair is available the system
/// browser is pointed at setup instructions instead, mirroring the
/// install prompt a browser extension wallet would show.
pub fn connect(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>, handle: &Handle) {
    match WalletProvider::detect() {
        WalletProvider::Available(signer) => {
            let pubkey = signer.public_key();
            tracing::info!(wallet = %pubkey, "wallet connected");
            {
                let mut state = state.write();
                state.wallet = Some(pubkey);
                state.wallet_signer = Some(Arc::new(signer));
                if state.settings.sound_effects {
                    tracing::debug!("sound: connect chime");
                }
            }
            tasks::refresh::fetch_balances(state, event_tx, handle);
        }
        WalletProvider::Unavailable => {
            tracing::warn!("no wallet keypair found, opening setup instructions");
            if let Err(err) = open::that(WALLET_SETUP_URL) {
                tracing::error!(%err, "failed to open browser");
            }
        }
    }
}

/// Disconnect: forget the session and everything derived from it.
pub fn disconnect(state: &Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.wallet = None;
    state.wallet_signer = None;
    state.balances.clear();
    state.swap.tx_signature = None;
    tracing::info!("wallet disconnected");
}
