//! Fixture Demos - Entry Point
//!
//! Runs either demo through a subcommand. Each subcommand's stdout is
//! identical to the matching standalone binary.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fixture_demos::cli::LogArgs;
use fixture_demos::demo::Demo;
use fixture_demos::logging::init_tracing;
use tracing::info;

/// Runs the sum and calculator demo programs.
#[derive(Parser, Debug)]
#[command(name = "fixture-demos")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    log: LogArgs,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Print `Result: 30`.
    Sum,
    /// Print `Sum: 8` and `Difference: 6`.
    Calculator,
}

impl From<Command> for Demo {
    fn from(command: Command) -> Self {
        match command {
            Command::Sum => Demo::Sum,
            Command::Calculator => Demo::Calculator,
        }
    }
}

/// Main entry point.
fn main() -> Result<()> {
    let args = Args::parse();

    let level = args.log.level()?;
    init_tracing(level)?;

    let demo = Demo::from(args.command);
    info!(?demo, "starting demo");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo.run(&mut out)
        .with_context(|| format!("{demo:?} demo failed"))?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
