//! # Solana Library
//!
//! Solana blockchain integration for the swap terminal: token catalog,
//! Jupiter aggregator client, CoinGecko price feed, RPC wrapper, and
//! keypair wallet signing.

// Declare all modules
pub mod jupiter;
pub mod prices;
pub mod rpc;
pub mod tokens;
pub mod wallet;

// Re-export commonly used types from root for convenience
pub use jupiter::JupiterClient;
pub use prices::{PriceFeed, PriceQuote};
pub use rpc::SolanaRpc;
pub use tokens::{Token, TokenCatalog};
pub use wallet::{WalletProvider, WalletSigner};
