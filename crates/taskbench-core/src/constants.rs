//! Constants shared across kernels and the CLI.

/// Number of progress slices for the pi series kernel.
///
/// The reporting interval is `iterations / PROGRESS_SLICES`, computed once
/// with truncating division; iteration counts below this value are rejected
/// as degenerate since the interval would be zero.
pub const PROGRESS_SLICES: u64 = 10;

/// Maximum Fibonacci index whose value fits in a `u64`.
/// F(93) = 12200160415121876738; F(94) overflows.
pub const MAX_FIB_U64: u64 = 93;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Any error: usage, unknown task, argument parse, degenerate input.
    pub const ERROR_GENERIC: i32 = 1;
}
