//! Task dispatch and timing.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{anyhow, bail, Result};
use tracing::debug;

use taskbench_cli::presenter::{ConsoleProgressObserver, ResultPresenter};
use taskbench_core::rng::TaskRng;
use taskbench_core::{approximate_pi, count_primes, fib, matrix_trace, monte_carlo_pi};

use crate::config::AppConfig;

const USAGE: &str = "usage: taskbench <task> <args...>

tasks:
  prime <start> <end>   count primes in the inclusive range
  pi <iterations>       approximate pi with the Leibniz series
  fib <n>               naive recursive Fibonacci
  matrix <size>         trace of a random matrix product
  mc <samples>          Monte Carlo pi estimate";

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        taskbench_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let Some(task) = config.task.as_deref() else {
        bail!("{USAGE}");
    };

    let presenter = ResultPresenter::new();
    debug!(task, ?config.args, "dispatching task");

    // Time the kernel call only, not argument parsing or process startup.
    let started = Instant::now();
    match task {
        "prime" => {
            let start = parse_arg(config, 0, "start")?;
            let end = parse_arg(config, 1, "end")?;
            let count = count_primes(start, end);
            presenter.present_prime_count(count);
        }
        "pi" => {
            let iterations = parse_arg(config, 0, "iterations")?;
            let observer = ConsoleProgressObserver::new(config.quiet);
            let value = approximate_pi(iterations, &observer)?;
            presenter.present_pi(value);
        }
        "fib" => {
            let n = parse_arg(config, 0, "n")?;
            let value = fib(n)?;
            presenter.present_fib(n, value);
        }
        "matrix" => {
            let size = parse_arg(config, 0, "size")?;
            let mut rng = make_rng(config);
            let trace = matrix_trace(size, &mut rng);
            presenter.present_trace(trace);
        }
        "mc" => {
            let samples = parse_arg(config, 0, "samples")?;
            let mut rng = make_rng(config);
            let estimate = monte_carlo_pi(samples, &mut rng)?;
            presenter.present_monte_carlo(estimate);
        }
        other => bail!("unknown task: {other}"),
    }

    presenter.present_elapsed(started.elapsed());
    Ok(())
}

/// Construct a fresh generator for a single kernel invocation.
///
/// Kernels never share generator state; each call gets its own instance,
/// seeded from OS entropy unless `--seed` was given.
fn make_rng(config: &AppConfig) -> TaskRng {
    match config.seed {
        Some(seed) => TaskRng::from_seed(seed),
        None => TaskRng::from_entropy(),
    }
}

/// Parse the positional task argument at `index`.
fn parse_arg<T>(config: &AppConfig, index: usize, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let task = config.task.as_deref().unwrap_or_default();
    let raw = config
        .args
        .get(index)
        .ok_or_else(|| anyhow!("{task}: missing argument <{name}>\n\n{USAGE}"))?;
    raw.parse()
        .map_err(|e| anyhow!("{task}: invalid {name} '{raw}': {e}"))
}
