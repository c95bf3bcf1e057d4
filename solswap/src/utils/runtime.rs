//! Shared tokio runtime for bridging async tasks from the GUI thread.

use once_cell::sync::Lazy;
use tokio::runtime::{Handle, Runtime};

static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime")
});

/// Handle to the shared runtime, initializing it on first use.
pub fn handle() -> Handle {
    TOKIO_RT.handle().clone()
}
