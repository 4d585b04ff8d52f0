//! Application configuration from CLI arguments.

use clap::Parser;

/// TaskBench — micro-benchmark harness for numeric workloads.
///
/// The task name and its arguments are free-form positionals rather than
/// clap subcommands so that unknown tasks and malformed arguments stay under
/// application control and always exit with code 1.
#[derive(Parser, Debug)]
#[command(name = "taskbench", version, about)]
pub struct AppConfig {
    /// Benchmark task to run: prime, pi, fib, matrix, or mc.
    pub task: Option<String>,

    /// Task-specific arguments (see --help for each task's shape).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Seed the random kernels for a reproducible run.
    #[arg(long, env = "TASKBENCH_SEED")]
    pub seed: Option<u64>,

    /// Suppress progress lines.
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
