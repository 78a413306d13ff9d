//! Trailing-edge debounce

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Lets through only the last of a burst of calls.
///
/// Each call to [`Debouncer::debounce`] waits out the quiet period and then
/// reports whether it is still the most recent call.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: AtomicU64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: AtomicU64::new(0),
        }
    }

    /// Wait for the quiet period. Returns `false` if a newer call arrived in
    /// the meantime.
    pub async fn debounce(&self) -> bool {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.generation.load(Ordering::SeqCst) == ticket
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}
