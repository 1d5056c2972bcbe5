//! Loading indicator held for the duration of a load

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared visibility of the loading indicator
///
/// Visible while at least one `LoadingGuard` is alive.
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    holders: Arc<AtomicUsize>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the indicator until the returned guard is dropped
    pub fn acquire(&self) -> LoadingGuard {
        self.holders.fetch_add(1, Ordering::SeqCst);
        LoadingGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }
}

/// Hides the indicator on drop, whichever way the load ended
#[derive(Debug)]
pub struct LoadingGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
    }
}
