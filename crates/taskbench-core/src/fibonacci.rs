//! Naive recursive Fibonacci.

use crate::constants::MAX_FIB_U64;
use crate::error::TaskError;

/// Compute F(n) by naive recursion.
///
/// Exponential time on purpose: the kernel is a CPU-burn benchmark, so no
/// memoization and no iterative rewrite. Negative input is unrepresentable.
///
/// # Errors
///
/// Returns [`TaskError::InvalidInput`] when `n > 93`, the largest index
/// whose value fits in a `u64`.
pub fn fib(n: u64) -> Result<u64, TaskError> {
    if n > MAX_FIB_U64 {
        return Err(TaskError::InvalidInput(format!(
            "fib({n}) exceeds u64 range (max index {MAX_FIB_U64})"
        )));
    }
    Ok(fib_naive(n))
}

fn fib_naive(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    fib_naive(n - 1) + fib_naive(n - 2)
}
