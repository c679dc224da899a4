//! Debounce for search-input-driven refetches.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Default delay before a search query triggers a refetch.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Collapses bursts of input events into the final one.
///
/// Each call to [`ready`](Debouncer::ready) registers a new event and waits
/// out the delay; only the call belonging to the newest event reports ready.
/// Callers invoke it per keystroke and refetch only when it returns `true`,
/// so a burst of typing issues a single read.
///
/// Writes are never debounced; only reads go through this.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    epoch: Arc<AtomicU64>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Debouncer {
    /// Creates a debouncer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Returns the configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Registers an input event and waits out the delay.
    ///
    /// Returns `true` when no newer event arrived in the meantime.
    pub async fn ready(&self) -> bool {
        let ticket = self.epoch.fetch_add(1, Ordering::AcqRel) + 1;
        tokio::time::sleep(self.delay).await;
        self.epoch.load(Ordering::Acquire) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_single_event_fires() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        assert!(debouncer.ready().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_event_supersedes_older() {
        let debouncer = Debouncer::new(Duration::from_millis(300));

        let older = debouncer.clone();
        let first = tokio::spawn(async move { older.ready().await });

        // Let the first call register before superseding it.
        tokio::time::sleep(Duration::from_millis(50)).await;
        let second = debouncer.ready().await;

        assert!(second);
        assert!(!first.await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_events_each_fire() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        assert!(debouncer.ready().await);
        assert!(debouncer.ready().await);
    }
}
