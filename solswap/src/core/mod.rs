//! # Core Types
//!
//! Error handling and the service seam shared across the app.

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::SwapApi;
