//! Error types for cli-starter
//!
//! Every failure that can happen after argument parsing is funneled into
//! [`AppError`] and handled once, at the top-level runner.

use crate::cli::common::{EXIT_GENERAL_ERROR, EXIT_SUCCESS};
use std::io;

/// Top-level error type for cli-starter
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The user aborted the session (for example by closing the output pipe)
    #[error("Operation cancelled by user.")]
    Cancelled,

    /// I/O error while writing to the terminal
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
}

impl AppError {
    /// Process exit code for this error
    ///
    /// Cancellation is graceful and maps to success.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Cancelled => EXIT_SUCCESS,
            AppError::Io(_) => EXIT_GENERAL_ERROR,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::BrokenPipe {
            AppError::Cancelled
        } else {
            AppError::Io(err)
        }
    }
}
