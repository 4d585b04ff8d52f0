//! Leibniz alternating-series approximation of pi.

use tracing::debug;

use crate::constants::PROGRESS_SLICES;
use crate::error::TaskError;
use crate::observer::ProgressObserver;
use crate::progress::ProgressUpdate;

/// Approximate pi by summing the alternating series `4 * Σ (-1)^i / (2i+1)`.
///
/// Convergence is deliberately slow (error shrinks like `1/iterations`);
/// the kernel exists to burn CPU proportional to the iteration count.
/// A progress update is emitted every `iterations / 10` steps, carrying the
/// iteration index and the current partial estimate.
///
/// # Errors
///
/// Returns [`TaskError::DegenerateInput`] when `iterations < 10`, where the
/// reporting interval would truncate to zero.
#[allow(clippy::cast_precision_loss)]
pub fn approximate_pi(
    iterations: u64,
    observer: &dyn ProgressObserver,
) -> Result<f64, TaskError> {
    if iterations < PROGRESS_SLICES {
        return Err(TaskError::DegenerateInput(format!(
            "pi requires at least {PROGRESS_SLICES} iterations, got {iterations}"
        )));
    }

    let interval = iterations / PROGRESS_SLICES;
    debug!(iterations, interval, "starting pi series");

    let mut sum = 0.0_f64;
    let mut sign = 1.0_f64;
    for i in 0..iterations {
        sum += sign / (2 * i + 1) as f64;
        sign = -sign;

        if i % interval == 0 {
            observer.on_progress(&ProgressUpdate::new(i, iterations, 4.0 * sum));
        }
    }

    Ok(4.0 * sum)
}
