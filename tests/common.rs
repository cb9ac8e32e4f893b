//! Test utilities for cli-starter integration tests

#![allow(dead_code)]

use assert_cmd::Command;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Command for the built binary with colors forced off
pub fn cli_starter() -> Command {
    let mut cmd = Command::cargo_bin("cli-starter").expect("binary should be built");
    cmd.env("NO_COLOR", "1");
    cmd
}
