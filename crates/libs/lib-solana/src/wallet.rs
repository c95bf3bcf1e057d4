//! # Wallet Signer
//!
//! Local keypair wallet: loading from the standard Solana CLI location,
//! capability-style detection, and versioned-transaction signing.

use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::VersionedTransaction;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Wallet operation errors.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Keypair load error: {0}")]
    KeypairLoad(String),
    #[error("Invalid keypair: {0}")]
    InvalidKeypair(String),
    #[error("Signing error: {0}")]
    Signing(String),
}

/// Wallet capability, resolved once at connect time.
///
/// `Unavailable` is the native analog of the browser extension being
/// absent; the caller decides how to direct the user to setup.
pub enum WalletProvider {
    Available(WalletSigner),
    Unavailable,
}

impl WalletProvider {
    /// Probe the standard keypair location (or `SOLSWAP_KEYPAIR` override)
    /// and resolve the capability.
    pub fn detect() -> Self {
        let path = default_keypair_path();
        match WalletSigner::from_file(&path) {
            Ok(signer) => {
                info!("Wallet keypair loaded from {:?}", path);
                WalletProvider::Available(signer)
            }
            Err(e) => {
                info!("No usable wallet keypair at {:?}: {}", path, e);
                WalletProvider::Unavailable
            }
        }
    }
}

/// Path to the wallet keypair file: `SOLSWAP_KEYPAIR` if set, otherwise
/// the Solana CLI default `~/.config/solana/id.json`.
pub fn default_keypair_path() -> PathBuf {
    if let Ok(path) = std::env::var("SOLSWAP_KEYPAIR") {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".config").join("solana").join("id.json")
}

/// A loaded keypair capable of signing swap transactions.
pub struct WalletSigner {
    keypair: Keypair,
}

impl WalletSigner {
    /// Load a keypair from a file.
    ///
    /// Accepts the Solana CLI JSON array format (64 bytes, secret followed
    /// by public key), a bare 32-byte secret array, or a base58 string.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WalletError> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| WalletError::KeypairLoad(format!("Failed to read file: {}", e)))?;

        if contents.trim().starts_with('[') {
            let bytes: Vec<u8> = serde_json::from_str(contents.trim())
                .map_err(|e| WalletError::InvalidKeypair(format!("Invalid JSON format: {}", e)))?;
            Self::from_secret_bytes(&bytes)
        } else {
            Self::from_base58(contents.trim())
        }
    }

    /// Load a keypair from a base58-encoded secret.
    pub fn from_base58(encoded: &str) -> Result<Self, WalletError> {
        let bytes = bs58::decode(encoded.trim())
            .into_vec()
            .map_err(|e| WalletError::InvalidKeypair(format!("Invalid base58: {}", e)))?;
        Self::from_secret_bytes(&bytes)
    }

    fn from_secret_bytes(bytes: &[u8]) -> Result<Self, WalletError> {
        // 64-byte keypairs carry the public key in the tail; only the
        // leading 32-byte secret is needed.
        if bytes.len() != 32 && bytes.len() != 64 {
            return Err(WalletError::InvalidKeypair(format!(
                "Expected 32 or 64 bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes[..32]);

        Ok(Self {
            keypair: Keypair::new_from_array(arr),
        })
    }

    /// Generate a fresh random keypair (testing and first-run flows).
    pub fn generate() -> Self {
        Self {
            keypair: Keypair::new(),
        }
    }

    /// Public key of the wallet as a base58 string.
    pub fn public_key(&self) -> String {
        self.keypair.pubkey().to_string()
    }

    /// Sign an aggregator-built versioned transaction.
    ///
    /// The message (blockhash included) comes from the swap build; signing
    /// replaces the signature set without touching the message.
    pub fn sign_transaction(
        &self,
        transaction: VersionedTransaction,
    ) -> Result<VersionedTransaction, WalletError> {
        VersionedTransaction::try_new(transaction.message, &[&self.keypair])
            .map_err(|e| WalletError::Signing(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_has_pubkey() {
        let signer = WalletSigner::generate();
        let pubkey = signer.public_key();
        assert!(!pubkey.is_empty());
        // Base58 pubkeys decode to 32 bytes
        assert_eq!(bs58::decode(&pubkey).into_vec().unwrap().len(), 32);
    }

    #[test]
    fn test_from_secret_bytes_lengths() {
        let bytes32 = [7u8; 32];
        assert!(WalletSigner::from_secret_bytes(&bytes32).is_ok());

        let bytes64 = [7u8; 64];
        assert!(WalletSigner::from_secret_bytes(&bytes64).is_ok());

        let bad = [7u8; 31];
        assert!(matches!(
            WalletSigner::from_secret_bytes(&bad),
            Err(WalletError::InvalidKeypair(_))
        ));
    }

    #[test]
    fn test_base58_round_trip() {
        let signer = WalletSigner::generate();
        let encoded = bs58::encode(signer.keypair.to_bytes()).into_string();
        let reloaded = WalletSigner::from_base58(&encoded).unwrap();
        assert_eq!(signer.public_key(), reloaded.public_key());
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = WalletSigner::from_file("/nonexistent/keypair.json");
        assert!(matches!(err, Err(WalletError::KeypairLoad(_))));
    }
}
