//! Thread-safe counter for per-call correlation ids.
//!
//! Every `invoke` is stamped with a monotonically increasing id so that the
//! caller's log line and the host loop's log line for the same request can
//! be matched up. The id has no routing role: correlation of the actual
//! reply happens through the per-call reply channel.

use std::sync::atomic::{AtomicU64, Ordering};

/// A thread-safe, monotonically increasing call-id counter.
///
/// Ids start at 0 and wrap around at `u64::MAX` without panicking.
/// `Ordering::Relaxed` is sufficient: ids are labels, not synchronization.
#[derive(Debug, Default)]
pub struct CallIdCounter {
    inner: AtomicU64,
}

impl CallIdCounter {
    /// Creates a new counter starting at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id and advances the counter.
    pub fn next(&self) -> u64 {
        self.inner.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_counter_starts_at_zero_and_increments() {
        let counter = CallIdCounter::new();
        assert_eq!(counter.next(), 0);
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.next(), 2);
    }

    #[test]
    fn test_counter_wraps_at_u64_max() {
        let counter = CallIdCounter {
            inner: AtomicU64::new(u64::MAX),
        };
        assert_eq!(counter.next(), u64::MAX);
        assert_eq!(counter.next(), 0);
    }

    #[test]
    fn test_counter_never_hands_out_duplicates_across_threads() {
        let counter = Arc::new(CallIdCounter::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let c = Arc::clone(&counter);
                thread::spawn(move || (0..1000).map(|_| c.next()).collect::<Vec<u64>>())
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().expect("thread panicked"))
            .collect();

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8 * 1000, "every call id must be unique");
    }
}
