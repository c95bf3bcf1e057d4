//! # Common Error Types
//!
//! Consolidated error handling for the swap terminal.
//!
//! Errors are categorized by their source:
//! - **Api**: aggregator / price API communication (network, HTTP, JSON)
//! - **Wallet**: keypair loading and transaction signing
//! - **Rpc**: blockchain submission and confirmation
//!
//! Nothing here is fatal to the process; every failure degrades one
//! feature and leaves the rest of the terminal usable.

use thiserror::Error;

/// Application-wide error type. Clone so task results can travel
/// through the event channel.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Aggregator or price API communication error.
    #[error("API error: {0}")]
    Api(String),

    /// Wallet keypair or signing error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Blockchain RPC error (submission, confirmation, balance query).
    #[error("RPC error: {0}")]
    Rpc(String),
}

/// Convenience alias used throughout the app crate.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<lib_solana::wallet::WalletError> for AppError {
    fn from(err: lib_solana::wallet::WalletError) -> Self {
        AppError::Wallet(err.to_string())
    }
}
