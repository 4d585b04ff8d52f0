//! Progress reporting types.

/// Progress update emitted by a kernel mid-computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressUpdate {
    /// Current iteration number.
    pub current_step: u64,
    /// Total number of iterations.
    pub total_steps: u64,
    /// Current partial estimate of the quantity being computed.
    pub estimate: f64,
}

impl ProgressUpdate {
    /// Create a new progress update.
    #[must_use]
    pub fn new(current_step: u64, total_steps: u64, estimate: f64) -> Self {
        Self {
            current_step,
            total_steps,
            estimate,
        }
    }

    /// Progress as a fraction in `[0.0, 1.0]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.total_steps == 0 {
            return 0.0;
        }
        self.current_step as f64 / self.total_steps as f64
    }
}
