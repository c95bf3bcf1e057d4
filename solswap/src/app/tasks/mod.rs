//! Background tasks spawned onto the tokio runtime.
//!
//! Each task reads what it needs under a short lock, does its I/O with no
//! lock held, and reports back through the event channel.

pub mod quote;
pub mod refresh;
pub mod swap;
