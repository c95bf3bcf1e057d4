//! # SolSwap - Library Root
//!
//! A native desktop swap terminal for Solana. Connect a local wallet,
//! pick a token pair, get a Jupiter quote, sign and submit the swap.
//!
//! ## Architecture
//!
//! Event-driven, single render thread:
//! - **app**: state, user-action handlers, async tasks, quote debouncer
//! - **core**: error type and the swap API seam
//! - **ui**: egui rendering (swap screen, settings window)
//! - **utils**: tokio bridge runtime, display formatting
//!
//! The egui thread never blocks on I/O. Tasks run on a shared tokio
//! runtime and report back through an `AppEvent` channel drained once
//! per frame in [`app::App::on_tick`]. State lives in
//! `Arc<parking_lot::RwLock<AppState>>`; locks are held briefly and
//! never across an `.await`.

pub mod app;
pub mod core;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState};
pub use crate::core::{AppError, Result};
