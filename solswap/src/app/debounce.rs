//! Generation-keyed debouncer for quote fetches.
//!
//! Each call to [`Debouncer::schedule`] aborts the pending timer and bumps
//! the generation counter. The scheduled closure only runs if its
//! generation is still current when the delay elapses, and the generation
//! is handed to the closure so late responses can be matched against
//! [`Debouncer::current_generation`] and dropped.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub struct Debouncer {
    delay: Duration,
    handle: Handle,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration, handle: Handle) -> Self {
        Self {
            delay,
            handle,
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    /// Schedule `f` to run after the delay, superseding any pending run.
    pub fn schedule<F, Fut>(&mut self, f: F)
    where
        F: FnOnce(u64) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let counter = Arc::clone(&self.generation);
        let delay = self.delay;
        self.pending = Some(self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if counter.load(Ordering::SeqCst) != generation {
                return;
            }
            f(generation).await;
        }));
    }

    /// Generation of the most recently scheduled run.
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
