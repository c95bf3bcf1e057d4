//! # Application State Types
//!
//! All state for the terminal: swap form, wallet session, balance and
//! price maps, and the in-memory settings.

use crate::core::SwapApi;
use lib_solana::jupiter::QuoteResponse;
use lib_solana::prices::{PriceFeed, PriceQuote};
use lib_solana::rpc::SolanaRpc;
use lib_solana::wallet::WalletSigner;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Selectable RPC endpoints for the settings window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcEndpoint {
    Mainnet,
    QuickNode,
    Helius,
}

impl RpcEndpoint {
    /// All endpoints in display order.
    pub fn all() -> &'static [RpcEndpoint] {
        &[RpcEndpoint::Mainnet, RpcEndpoint::QuickNode, RpcEndpoint::Helius]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RpcEndpoint::Mainnet => "Solana Mainnet",
            RpcEndpoint::QuickNode => "QuickNode (Faster)",
            RpcEndpoint::Helius => "Helius (Premium)",
        }
    }

    pub fn speed(&self) -> &'static str {
        match self {
            RpcEndpoint::Mainnet => "Standard",
            RpcEndpoint::QuickNode => "Fast",
            RpcEndpoint::Helius => "Ultra Fast",
        }
    }

    /// Endpoint URL. All three currently resolve to the public cluster;
    /// the premium entries are placeholders until API keys are wired in.
    pub fn url(&self) -> &'static str {
        "https://api.mainnet-beta.solana.com"
    }
}

/// In-memory settings. Reset to defaults on request; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Slippage tolerance in percent (0.1 - 50).
    pub slippage_pct: f64,
    /// Transaction confirmation deadline in minutes (1 - 60).
    pub deadline_mins: u32,
    pub rpc_endpoint: RpcEndpoint,
    pub auto_refresh: bool,
    pub sound_effects: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            slippage_pct: 0.5,
            deadline_mins: 20,
            rpc_endpoint: RpcEndpoint::Mainnet,
            auto_refresh: true,
            sound_effects: false,
        }
    }
}

impl Settings {
    /// Apply a slippage change; out-of-range values are ignored.
    pub fn set_slippage(&mut self, percent: f64) {
        if (0.1..=50.0).contains(&percent) {
            self.slippage_pct = percent;
        }
    }

    /// Apply a deadline change; out-of-range values are ignored.
    pub fn set_deadline(&mut self, minutes: u32) {
        if (1..=60).contains(&minutes) {
            self.deadline_mins = minutes;
        }
    }

    pub fn reset(&mut self) {
        *self = Settings::default();
    }
}

/// Swap form state.
#[derive(Debug, Clone)]
pub struct SwapState {
    /// Sell-side token symbol.
    pub sell_token: String,
    /// Buy-side token symbol.
    pub buy_token: String,
    /// Amount to sell, as typed (string for input handling).
    pub sell_amount: String,
    /// Quoted buy amount, display formatted.
    pub buy_amount: String,
    /// Current quote; valid only for the exact (sell_token, buy_token,
    /// sell_amount) triple that produced it.
    pub quote: Option<QuoteResponse>,
    /// Quote request in flight; the buy field renders a placeholder.
    pub quote_loading: bool,
    /// Swap execution in flight.
    pub swapping: bool,
    /// Signature of the last successful swap.
    pub tx_signature: Option<String>,
}

impl Default for SwapState {
    fn default() -> Self {
        Self {
            sell_token: "SOL".to_string(),
            buy_token: "USDC".to_string(),
            sell_amount: String::new(),
            buy_amount: String::new(),
            quote: None,
            quote_loading: false,
            swapping: false,
            tx_signature: None,
        }
    }
}

/// Global application state.
pub struct AppState {
    /// Swap form state.
    pub swap: SwapState,
    /// Connected wallet public key; `None` means disconnected everywhere.
    pub wallet: Option<String>,
    /// Wallet signer, present only while connected. Arc so the swap task
    /// can sign without holding the state lock across an await.
    pub wallet_signer: Option<Arc<WalletSigner>>,
    /// Symbol -> balance, rebuilt wholesale on each refresh.
    pub balances: HashMap<String, f64>,
    /// Symbol -> USD price, rebuilt wholesale on each poll.
    pub prices: HashMap<String, PriceQuote>,
    /// In-memory settings.
    pub settings: Settings,
    /// Settings window visibility.
    pub show_settings: bool,
    /// Blocking error dialog text (swap failures only).
    pub swap_error: Option<String>,
    /// Flag to prevent concurrent price fetches (prevents task pileup).
    pub fetching_prices: bool,
    /// Same guard for the balance poll; cleared on success and failure.
    pub fetching_balances: bool,
    /// Last price poll timestamp.
    pub last_price_update: Instant,
    /// Last balance poll timestamp.
    pub last_balance_update: Instant,
    /// Aggregator API client (trait object for testability).
    pub swap_api: Arc<dyn SwapApi>,
    /// External price API client.
    pub price_feed: Arc<PriceFeed>,
    /// Blockchain RPC client; rebuilt when the endpoint setting changes.
    pub rpc: SolanaRpc,
}

impl AppState {
    pub fn new(swap_api: Arc<dyn SwapApi>, price_feed: Arc<PriceFeed>, rpc: SolanaRpc) -> Self {
        Self {
            swap: SwapState::default(),
            wallet: None,
            wallet_signer: None,
            balances: HashMap::new(),
            prices: HashMap::new(),
            settings: Settings::default(),
            show_settings: false,
            swap_error: None,
            fetching_prices: false,
            fetching_balances: false,
            last_price_update: Instant::now(),
            last_balance_update: Instant::now(),
            swap_api,
            price_feed,
            rpc,
        }
    }

    /// Whether a wallet is connected.
    pub fn is_connected(&self) -> bool {
        self.wallet.is_some()
    }
}
