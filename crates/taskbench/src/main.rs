//! TaskBench — command-line micro-benchmark harness.

use taskbench_core::exit_codes;
use taskbench_lib::{app, config};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        eprintln!("{err}");
        std::process::exit(exit_codes::ERROR_GENERIC);
    }
}
