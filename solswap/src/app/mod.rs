//! # Application Driver
//!
//! [`App`] owns the shared state, the event channel, and the quote
//! debouncer. The UI calls the `on_*` methods; background tasks report
//! back through [`AppEvent`]s drained once per frame in [`App::on_tick`].

pub mod debounce;
pub mod event_handler;
pub mod events;
pub mod handlers;
pub mod state;
pub mod tasks;

pub use events::AppEvent;
pub use state::AppState;

use crate::utils::runtime;
use async_channel::{Receiver, Sender};
use debounce::Debouncer;
use lib_solana::jupiter::JupiterClient;
use lib_solana::prices::PriceFeed;
use lib_solana::rpc::SolanaRpc;
use parking_lot::RwLock;
use state::RpcEndpoint;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Quote debounce delay after the last keystroke.
const QUOTE_DEBOUNCE: Duration = Duration::from_millis(500);
/// How often prices are re-polled while auto-refresh is on.
const PRICE_POLL_INTERVAL: Duration = Duration::from_secs(60);
/// How often balances are re-polled while connected and auto-refresh is on.
const BALANCE_POLL_INTERVAL: Duration = Duration::from_secs(30);

pub struct App {
    pub(crate) state: Arc<RwLock<AppState>>,
    pub(crate) event_tx: Sender<AppEvent>,
    event_rx: Receiver<AppEvent>,
    pub(crate) debouncer: Debouncer,
    pub(crate) handle: Handle,
}

impl App {
    /// Build the app with live services and kick off the first price poll.
    pub fn new() -> anyhow::Result<Self> {
        let swap_api = Arc::new(JupiterClient::new()?);
        let price_feed = Arc::new(PriceFeed::new()?);
        let rpc = SolanaRpc::new(RpcEndpoint::Mainnet.url());
        let handle = runtime::handle();

        let state = Arc::new(RwLock::new(AppState::new(swap_api, price_feed, rpc)));
        let (event_tx, event_rx) = async_channel::unbounded();
        let debouncer = Debouncer::new(QUOTE_DEBOUNCE, handle.clone());

        let app = Self {
            state,
            event_tx,
            event_rx,
            debouncer,
            handle,
        };
        // Prices load once at startup regardless of the auto-refresh setting.
        tasks::refresh::fetch_prices(&app.state, &app.event_tx, &app.handle);
        Ok(app)
    }

    pub fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    /// Drain task events and drive the periodic refresh timers. Called
    /// once per frame.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            event_handler::apply(self, event);
        }
        self.maybe_refresh();
    }

    fn maybe_refresh(&mut self) {
        let (price_due, balance_due) = {
            let state = self.state.read();
            if !state.settings.auto_refresh {
                return;
            }
            (
                state.last_price_update.elapsed() >= PRICE_POLL_INTERVAL,
                state.is_connected()
                    && state.last_balance_update.elapsed() >= BALANCE_POLL_INTERVAL,
            )
        };
        if price_due {
            tasks::refresh::fetch_prices(&self.state, &self.event_tx, &self.handle);
        }
        if balance_due {
            tasks::refresh::fetch_balances(&self.state, &self.event_tx, &self.handle);
        }
    }

    /// Re-arm the quote debounce for the current form contents.
    fn schedule_quote(&mut self) {
        let state = Arc::clone(&self.state);
        let event_tx = self.event_tx.clone();
        self.debouncer.schedule(move |generation| async move {
            tasks::quote::fetch_quote(state, event_tx, generation).await;
        });
    }

    // Swap form actions.

    pub fn on_sell_amount_changed(&mut self, value: String) {
        handlers::swap::sell_amount_changed(&mut self.state.write(), value);
        self.schedule_quote();
    }

    pub fn on_sell_token_selected(&mut self, symbol: &str) {
        handlers::swap::sell_token_selected(&mut self.state.write(), symbol);
        self.schedule_quote();
    }

    pub fn on_buy_token_selected(&mut self, symbol: &str) {
        handlers::swap::buy_token_selected(&mut self.state.write(), symbol);
        self.schedule_quote();
    }

    pub fn on_flip_pair(&mut self) {
        handlers::swap::flip_pair(&mut self.state.write());
        self.schedule_quote();
    }

    pub fn on_max_clicked(&mut self) {
        handlers::swap::max_clicked(&mut self.state.write());
        self.schedule_quote();
    }

    pub fn on_execute_swap(&mut self) {
        tasks::swap::execute_swap(&self.state, &self.event_tx, &self.handle);
    }

    pub fn on_dismiss_error(&mut self) {
        self.state.write().swap_error = None;
    }

    // Wallet actions.

    pub fn on_connect_wallet(&mut self) {
        handlers::wallet::connect(&self.state, &self.event_tx, &self.handle);
    }

    pub fn on_disconnect_wallet(&mut self) {
        handlers::wallet::disconnect(&self.state);
    }

    // Settings actions.

    pub fn on_toggle_settings(&mut self) {
        let mut state = self.state.write();
        state.show_settings = !state.show_settings;
    }

    pub fn on_set_slippage(&mut self, percent: f64) {
        handlers::settings::set_slippage(&mut self.state.write(), percent);
        self.schedule_quote();
    }

    pub fn on_set_deadline(&mut self, minutes: u32) {
        handlers::settings::set_deadline(&mut self.state.write(), minutes);
    }

    pub fn on_set_rpc_endpoint(&mut self, endpoint: RpcEndpoint) {
        handlers::settings::set_rpc_endpoint(&mut self.state.write(), endpoint);
    }

    pub fn on_toggle_auto_refresh(&mut self) {
        handlers::settings::toggle_auto_refresh(&mut self.state.write());
    }

    pub fn on_toggle_sound_effects(&mut self) {
        handlers::settings::toggle_sound_effects(&mut self.state.write());
    }

    pub fn on_reset_settings(&mut self) {
        handlers::settings::reset(&mut self.state.write());
        self.schedule_quote();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::core::SwapApi;
    use async_trait::async_trait;
    use lib_solana::jupiter::{QuoteResponse, SwapTransactionResponse};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory aggregator returning canned responses and counting calls.
    #[derive(Default)]
    pub struct MockSwapApi {
        quotes: AtomicUsize,
        swaps: AtomicUsize,
    }

    impl MockSwapApi {
        pub fn quote_calls(&self) -> usize {
            self.quotes.load(Ordering::SeqCst)
        }

        pub fn swap_calls(&self) -> usize {
            self.swaps.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SwapApi for MockSwapApi {
        async fn get_swap_quote(
            &self,
            input_mint: &str,
            output_mint: &str,
            amount: u64,
            _slippage_bps: u16,
        ) -> Result<QuoteResponse, String> {
            self.quotes.fetch_add(1, Ordering::SeqCst);
            Ok(serde_json::from_value(serde_json::json!({
                "inputMint": input_mint,
                "outputMint": output_mint,
                "inAmount": amount.to_string(),
                "outAmount": "142000000",
                "priceImpactPct": "0.01"
            }))
            .unwrap())
        }

        async fn get_swap_transaction(
            &self,
            _quote: &QuoteResponse,
            _user_public_key: &str,
        ) -> Result<SwapTransactionResponse, String> {
            self.swaps.fetch_add(1, Ordering::SeqCst);
            Ok(SwapTransactionResponse {
                swap_transaction: String::new(),
                last_valid_block_height: 0,
                prioritization_fee_lamports: None,
            })
        }
    }

    pub fn test_state() -> AppState {
        test_state_with_api(Arc::new(MockSwapApi::default()))
    }

    pub fn test_state_with_api(api: Arc<MockSwapApi>) -> AppState {
        let feed = PriceFeed::new()
            .expect("http client")
            .with_api_base("http://127.0.0.1:9");
        AppState::new(api, Arc::new(feed), SolanaRpc::new("http://127.0.0.1:9"))
    }

    /// App wired to a mock aggregator on the current test runtime.
    pub fn test_app(api: Arc<MockSwapApi>) -> App {
        let (event_tx, event_rx) = async_channel::unbounded();
        App {
            state: Arc::new(RwLock::new(test_state_with_api(api))),
            event_tx,
            event_rx,
            debouncer: Debouncer::new(QUOTE_DEBOUNCE, Handle::current()),
            handle: Handle::current(),
        }
    }
}
