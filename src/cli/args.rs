//! CLI argument parsing using clap
//!
//! Parsing never exits the process. Help, version and parse errors are
//! written through the logger and reported back as [`ExitOutcome::Terminate`]
//! so the caller decides when to exit.

use crate::cli::common::{EXIT_GENERAL_ERROR, EXIT_SUCCESS};
use crate::config::PACKAGE;
use crate::output::logger::Logger;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use termcolor::WriteColor;

/// Help footer listing common invocations
const EXAMPLES: &str = "\
Examples:
  $ cli-starter --help
  $ cli-starter --version
  $ cli-starter --verbose";

/// cli-starter command line
#[derive(Parser, Debug)]
#[command(name = "cli-starter")]
#[command(about = PACKAGE.description)]
#[command(version = PACKAGE.version, disable_version_flag = true, disable_help_flag = true)]
#[command(args_override_self = true)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// enable verbose output
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// display version number
    #[arg(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// show this help message
    #[arg(short = 'h', long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

/// Options for one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub verbose: bool,
}

impl From<Cli> for CliOptions {
    fn from(cli: Cli) -> Self {
        CliOptions {
            verbose: cli.verbose,
        }
    }
}

/// Result of parsing the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Continue with these options
    Parsed(CliOptions),
    /// Stop now with this exit code
    Terminate(i32),
}

/// Parse command line arguments
///
/// `args` follows the `std::env::args_os` convention: the first element is
/// the program name.
///
/// # Returns
///
/// - `Parsed` for valid input without `--help`/`--version`
/// - `Terminate(0)` after printing help or version to stdout
/// - `Terminate(1)` after printing a diagnostic and a `--help` hint to stderr
pub fn parse_arguments<I, T, W>(args: I, logger: &mut Logger<W>) -> ExitOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: WriteColor,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => ExitOutcome::Parsed(cli.into()),
        Err(err) => handle_parsing_error(&err, logger),
    }
}

/// Reports a clap error and picks the exit code
fn handle_parsing_error<W: WriteColor>(err: &clap::Error, logger: &mut Logger<W>) -> ExitOutcome {
    match err.kind() {
        // A closed stdout is not worth failing over here
        ErrorKind::DisplayHelp => {
            let _ = logger.print(&err.render().to_string());
            ExitOutcome::Terminate(EXIT_SUCCESS)
        }
        ErrorKind::DisplayVersion => {
            let _ = logger.print(&format!("{}\n", PACKAGE.version));
            ExitOutcome::Terminate(EXIT_SUCCESS)
        }
        _ => {
            let _ = logger.error(&format!(
                "Command line parsing error: {}",
                error_summary(err)
            ));
            let _ = logger.hint("Use --help for usage information");
            ExitOutcome::Terminate(EXIT_GENERAL_ERROR)
        }
    }
}

/// First line of a clap error without its `error: ` prefix
fn error_summary(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let first = rendered.lines().next().unwrap_or("Unknown error");
    first.trim_start_matches("error: ").trim().to_string()
}
