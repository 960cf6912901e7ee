//! Calculator demo binary. Prints `Sum: 8` and `Difference: 6`.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use fixture_demos::cli::LogArgs;
use fixture_demos::demo::calculator;
use fixture_demos::logging::init_tracing;

/// Runs the named calculator and prints its results.
#[derive(Parser, Debug)]
#[command(name = "calculator-demo")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log.level()?)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    calculator::run(&mut out).context("calculator demo failed")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
