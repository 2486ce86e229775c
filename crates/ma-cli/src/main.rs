// File: crates/ma-cli/src/main.rs
// Summary: `ma-indicator` binary: logging setup, argument parsing, run, tail print.

use anyhow::{Context, Result};
use clap::Parser;
use ma_cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let report = cli.run().context("run failed")?;

    println!("\nLast 5 data points:");
    println!("{}", report.summary(5));
    Ok(())
}
