//! CLI argument parsing and the top-level runner
//!
//! [`run`] is the single error boundary: parse outcomes and application
//! errors are mapped to exit codes here and nowhere else.

pub mod args;
pub mod common;
pub mod welcome;

// Re-export types for convenient access
pub use args::{Cli, CliOptions, ExitOutcome, parse_arguments};
pub use welcome::{WelcomeSettings, display_welcome};

use crate::config::PACKAGE;
use crate::error::AppError;
use crate::output::logger::{Logger, LoggerConfig};
use common::EXIT_SUCCESS;
use std::ffi::OsString;
use termcolor::{ColorChoice, WriteColor};

/// Run the application against the process stdout and stderr
///
/// # Returns
///
/// Exit code:
/// - 0: Success, help/version shown, or cancelled by the user
/// - 1: Parse error or fatal error
pub fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut logger = Logger::stdio(LoggerConfig::default(), ColorChoice::Auto);
    run_with(args, &mut logger, &WelcomeSettings::default())
}

/// Run the application with an explicit logger and settings
pub fn run_with<I, T, W>(args: I, logger: &mut Logger<W>, settings: &WelcomeSettings) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: WriteColor,
{
    let options = match parse_arguments(args, logger) {
        ExitOutcome::Parsed(options) => options,
        ExitOutcome::Terminate(code) => return code,
    };

    logger.set_config(LoggerConfig::from(&options));

    match run_session(&options, logger, settings) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => report_error(logger, &err),
    }
}

/// Everything that runs after a successful parse
fn run_session<W: WriteColor>(
    options: &CliOptions,
    logger: &mut Logger<W>,
    settings: &WelcomeSettings,
) -> Result<(), AppError> {
    logger.debug(&format!("Options: {:?}", options))?;
    display_welcome(logger, &PACKAGE, settings)
}

/// Reports an application error and returns its exit code
fn report_error<W: WriteColor>(logger: &mut Logger<W>, err: &AppError) -> i32 {
    // Output may already be gone; the exit code still has to be right
    let _ = match err {
        AppError::Cancelled => logger.info(&format!("\n{}", err)),
        _ => logger.error(&format!("Fatal error: {}", err)),
    };
    err.exit_code()
}
