use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out row indices to worker threads on demand.
///
/// Each index in `[0, height)` is claimed by exactly one caller exactly once,
/// no matter how many threads claim concurrently.
pub struct RowScheduler {
    next: AtomicUsize,
    height: usize,
}

impl RowScheduler {
    pub fn new(height: usize) -> Self {
        Self {
            next: AtomicUsize::new(0),
            height,
        }
    }

    /// Claim the next unclaimed row, or `None` when every row has been
    /// handed out. Never blocks beyond the fetch-and-add itself.
    pub fn claim(&self) -> Option<usize> {
        let y = self.next.fetch_add(1, Ordering::Relaxed);
        (y < self.height).then_some(y)
    }
}
