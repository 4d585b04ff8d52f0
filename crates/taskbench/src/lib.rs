//! TaskBench library — application logic for the benchmark harness.

pub mod app;
pub mod config;
