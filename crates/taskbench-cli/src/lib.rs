//! # taskbench-cli
//!
//! CLI output formatting, progress display, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use presenter::{ConsoleProgressObserver, ResultPresenter};
