//! CLI output formatting.

use std::time::Duration;

/// Fractional digits used when displaying the series estimate.
///
/// An `f64` holds roughly 16 true significant digits; the extra width is a
/// display convention, not an accuracy claim.
pub const PI_DISPLAY_DIGITS: usize = 48;

/// Format a pi estimate at full display width.
#[must_use]
pub fn format_pi(value: f64) -> String {
    format!("{value:.prec$}", prec = PI_DISPLAY_DIGITS)
}

/// Format a matrix trace in scientific notation with 4 decimal digits.
#[must_use]
pub fn format_trace(value: f64) -> String {
    format!("{value:.4e}")
}

/// Format the trailing elapsed-time line.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("elapsed {:.2} seconds", elapsed.as_secs_f64())
}
