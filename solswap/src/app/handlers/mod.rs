//! Synchronous state-mutation handlers for user actions.
//!
//! Handlers take the state lock, mutate, and return. Anything involving
//! I/O is spawned from `app/tasks` instead.

pub mod settings;
pub mod swap;
pub mod wallet;
