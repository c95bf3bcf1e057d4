//! # Solana RPC Wrapper
//!
//! High-level wrapper around the nonblocking Solana RPC client: wallet
//! balance queries, parsed token-account scans, transaction submission,
//! and confirmation polling at the `confirmed` commitment level.

use crate::tokens::TokenCatalog;
use solana_account_decoder::UiAccountData;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcSendTransactionConfig;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::VersionedTransaction;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// SPL Token program id; token accounts are scanned under this owner.
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;
const CONFIRM_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// One token account returned by the owner scan, reduced to what the
/// balance map needs.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenAccountBalance {
    pub mint: String,
    pub ui_amount: f64,
}

/// High-level Solana RPC client wrapper.
#[derive(Clone)]
pub struct SolanaRpc {
    rpc: Arc<RpcClient>,
}

impl SolanaRpc {
    /// Create a client against the given RPC endpoint URL.
    pub fn new(rpc_url: impl Into<String>) -> Self {
        let url = rpc_url.into();
        info!("Connecting to Solana RPC: {}", url);
        Self {
            rpc: Arc::new(RpcClient::new(url)),
        }
    }

    /// Native SOL balance of a wallet, in display units.
    pub async fn get_sol_balance(&self, owner: &str) -> anyhow::Result<f64> {
        let pubkey = Pubkey::from_str(owner)
            .map_err(|e| anyhow::anyhow!("Invalid wallet address: {}", e))?;
        let lamports = self
            .rpc
            .get_balance(&pubkey)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to get balance: {}", e))?;
        Ok(lamports as f64 / LAMPORTS_PER_SOL)
    }

    /// All SPL token accounts owned by the wallet, reduced to
    /// (mint, ui amount) pairs. Accounts the RPC cannot parse are skipped.
    pub async fn get_token_accounts(&self, owner: &str) -> anyhow::Result<Vec<TokenAccountBalance>> {
        let owner_pubkey = Pubkey::from_str(owner)
            .map_err(|e| anyhow::anyhow!("Invalid wallet address: {}", e))?;
        let program_id = Pubkey::from_str(TOKEN_PROGRAM_ID)
            .map_err(|e| anyhow::anyhow!("Invalid token program id: {}", e))?;

        let accounts = self
            .rpc
            .get_token_accounts_by_owner(&owner_pubkey, TokenAccountsFilter::ProgramId(program_id))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to get token accounts: {}", e))?;

        let mut balances = Vec::with_capacity(accounts.len());
        for keyed in accounts {
            let UiAccountData::Json(parsed) = keyed.account.data else {
                continue;
            };
            let info = &parsed.parsed["info"];
            let Some(mint) = info["mint"].as_str() else {
                continue;
            };
            let ui_amount = info["tokenAmount"]["uiAmount"].as_f64().unwrap_or(0.0);
            balances.push(TokenAccountBalance {
                mint: mint.to_string(),
                ui_amount,
            });
        }

        debug!("Owner {} has {} token accounts", owner, balances.len());
        Ok(balances)
    }

    /// Submit a signed transaction with preflight skipped and a transport
    /// retry budget of 2, matching the aggregator's recommendation.
    pub async fn send_swap_transaction(
        &self,
        transaction: &VersionedTransaction,
    ) -> anyhow::Result<Signature> {
        let config = RpcSendTransactionConfig {
            skip_preflight: true,
            max_retries: Some(2),
            ..Default::default()
        };

        let signature = self
            .rpc
            .send_transaction_with_config(transaction, config)
            .await
            .map_err(|e| anyhow::anyhow!("Transaction submission failed: {}", e))?;

        info!("Transaction submitted: {}", signature);
        Ok(signature)
    }

    /// Poll until the transaction reaches the `confirmed` commitment level,
    /// fails on-chain, or the deadline elapses.
    pub async fn confirm_transaction(
        &self,
        signature: &Signature,
        deadline: Duration,
    ) -> anyhow::Result<()> {
        let started = std::time::Instant::now();
        loop {
            let status = self
                .rpc
                .get_signature_status_with_commitment(signature, CommitmentConfig::confirmed())
                .await
                .map_err(|e| anyhow::anyhow!("Confirmation query failed: {}", e))?;

            match status {
                Some(Ok(())) => {
                    info!("Transaction confirmed: {}", signature);
                    return Ok(());
                }
                Some(Err(e)) => {
                    warn!("Transaction failed on-chain: {}", e);
                    return Err(anyhow::anyhow!("Transaction failed on-chain: {}", e));
                }
                None => {
                    if started.elapsed() > deadline {
                        return Err(anyhow::anyhow!(
                            "Transaction not confirmed within {:?}: {}",
                            deadline,
                            signature
                        ));
                    }
                    tokio::time::sleep(CONFIRM_POLL_INTERVAL).await;
                }
            }
        }
    }
}

/// Rebuild the symbol-keyed balance map wholesale from an on-chain scan.
///
/// Unmapped mints are ignored; every catalog symbol is present, defaulting
/// to zero when the chain returned nothing for it.
pub fn rebuild_balances(
    sol_balance: f64,
    token_accounts: &[TokenAccountBalance],
) -> HashMap<String, f64> {
    let mut balances: HashMap<String, f64> = TokenCatalog::all()
        .iter()
        .map(|t| (t.symbol.to_string(), 0.0))
        .collect();

    balances.insert("SOL".to_string(), sol_balance);

    for account in token_accounts {
        if let Some(token) = TokenCatalog::by_mint(&account.mint) {
            balances.insert(token.symbol.to_string(), account.ui_amount);
        }
    }

    balances
}
