//! # taskbench-core
//!
//! Kernels for the TaskBench micro-benchmark harness. Each kernel is a
//! standalone pure-compute function: primality counting over a range, the
//! Leibniz series approximation of pi, naive recursive Fibonacci, the trace
//! of a random matrix product, and Monte Carlo pi estimation.
//!
//! Kernels that consume randomness take a [`TaskRng`] so callers control
//! seeding; kernels that report progress take a [`ProgressObserver`].

pub mod constants;
pub mod error;
pub mod fibonacci;
pub mod matrix;
pub mod monte_carlo;
pub mod observer;
pub mod primes;
pub mod progress;
pub mod rng;
pub mod series;

// Re-exports
pub use constants::{exit_codes, MAX_FIB_U64, PROGRESS_SLICES};
pub use error::TaskError;
pub use fibonacci::fib;
pub use matrix::matrix_trace;
pub use monte_carlo::monte_carlo_pi;
pub use observer::{NoOpObserver, ProgressObserver};
pub use primes::{count_primes, is_prime};
pub use progress::ProgressUpdate;
pub use rng::TaskRng;
pub use series::approximate_pi;
