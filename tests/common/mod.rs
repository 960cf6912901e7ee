//! Common test helpers and utilities.

#![allow(dead_code)]

use std::process::{Command, Output};

/// Path to the `sum-demo` binary built for this test run.
pub const SUM_DEMO: &str = env!("CARGO_BIN_EXE_sum-demo");

/// Path to the `calculator-demo` binary built for this test run.
pub const CALCULATOR_DEMO: &str = env!("CARGO_BIN_EXE_calculator-demo");

/// Path to the `fixture-demos` umbrella binary built for this test run.
pub const FIXTURE_DEMOS: &str = env!("CARGO_BIN_EXE_fixture-demos");

/// Runs a binary with `args` and a clean logging environment.
/// ## Panics
/// if the binary cannot be spawned
pub fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to run {bin}: {e}"))
}

/// Runs a binary and asserts it exits 0, returning stdout as a string.
/// ## Panics
/// if the process fails or stdout is not UTF-8
pub fn run_ok(bin: &str, args: &[&str]) -> String {
    let output = run(bin, args);
    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
        output.status.code(),
        stdout,
        stderr,
    );

    stdout
}
