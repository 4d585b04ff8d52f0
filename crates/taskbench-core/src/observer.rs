//! Observer seam for progress reporting.
//!
//! Kernels that report progress take a `&dyn ProgressObserver` instead of
//! printing directly, so the CLI can render updates its own way and tests
//! can record them.

use crate::progress::ProgressUpdate;

/// Observer trait for receiving progress updates.
pub trait ProgressObserver: Send + Sync {
    /// Receive a progress update.
    fn on_progress(&self, update: &ProgressUpdate);
}

/// Observer that discards all updates.
#[derive(Debug, Default)]
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}
