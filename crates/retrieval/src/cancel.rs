use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Advisory cancellation handle, checked between candidate files.
///
/// The engine performs synchronous CPU work once invoked; the only
/// cooperative checkpoints are between files. A host that owns the other
/// clone of this flag can set it from anywhere; the engine then stops taking
/// new files and returns whatever already accumulated. Never an error, never
/// partial internal state.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    inner: Arc<AtomicBool>,
}

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}
