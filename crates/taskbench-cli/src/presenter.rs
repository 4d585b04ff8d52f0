//! Console presentation of progress and results.

use std::time::Duration;

use taskbench_core::observer::ProgressObserver;
use taskbench_core::progress::ProgressUpdate;

use crate::output::{format_elapsed, format_pi, format_trace};

/// Observer that prints series progress lines to stdout.
pub struct ConsoleProgressObserver {
    quiet: bool,
}

impl ConsoleProgressObserver {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ProgressObserver for ConsoleProgressObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        if self.quiet {
            return;
        }
        println!(
            "Iteration {}: pi ≈ {}",
            update.current_step,
            format_pi(update.estimate)
        );
    }
}

/// Prints each task's final result line and the trailing elapsed line.
pub struct ResultPresenter;

impl ResultPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn present_prime_count(&self, count: u64) {
        println!("discovered {count} primes");
    }

    pub fn present_pi(&self, value: f64) {
        println!("{}...", format_pi(value));
    }

    pub fn present_fib(&self, n: u64, value: u64) {
        println!("fib({n}) = {value}");
    }

    pub fn present_trace(&self, value: f64) {
        println!("trace: {}", format_trace(value));
    }

    pub fn present_monte_carlo(&self, value: f64) {
        println!("pi ≈ {value}");
    }

    pub fn present_elapsed(&self, elapsed: Duration) {
        println!("{}", format_elapsed(elapsed));
    }
}

impl Default for ResultPresenter {
    fn default() -> Self {
        Self::new()
    }
}
