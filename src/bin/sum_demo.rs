//! Sum demo binary. Prints `Result: 30`.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use fixture_demos::cli::LogArgs;
use fixture_demos::demo::sum;
use fixture_demos::logging::init_tracing;

/// Adds 10 and 20 and prints the result.
#[derive(Parser, Debug)]
#[command(name = "sum-demo")]
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
    sum::run(&mut out).context("sum demo failed")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
