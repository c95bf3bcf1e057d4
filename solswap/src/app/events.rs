//! Events sent from background tasks back to the UI thread.
//!
//! Tasks never mutate quote or balance state directly; they send one of
//! these over the app channel and the tick handler applies the result.

use crate::core::AppError;
use lib_solana::jupiter::QuoteResponse;
use lib_solana::prices::PriceQuote;
use std::collections::HashMap;

/// Messages emitted by background tasks and drained each frame.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A quote request finished. The generation ties the response to the
    /// debounce round that issued it; stale generations are dropped.
    QuoteResult {
        generation: u64,
        result: Result<QuoteResponse, AppError>,
    },
    /// Fresh price map from the price poller.
    PricesUpdated(HashMap<String, PriceQuote>),
    /// Fresh balance map from the balance poller.
    BalancesUpdated(HashMap<String, f64>),
    /// Swap execution finished with a signature or an error.
    SwapFinished(Result<String, AppError>),
}
