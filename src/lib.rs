#![forbid(unsafe_code)]

//! cli-starter: a minimal command-line starter
//!
//! Parses a few flags, prints a colorful welcome banner and exits. The
//! library side exposes the argument parser, the entry-point detector and
//! the console output helpers so they can be tested without spawning the
//! binary.

pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod output;

// Re-export error types for convenient access
pub use error::AppError;

// Re-export core types for convenient access
pub use cli::{CliOptions, ExitOutcome, parse_arguments};
pub use entry::{EntryPoint, is_main_module};
