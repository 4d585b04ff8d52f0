//! Error type for benchmark kernels.

/// Error type for kernel execution.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// Input is outside the range the kernel can compute.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Input would produce a division by zero or an undefined result.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}
