#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use swag_replace_core::AppError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// A rewrite pipeline failure.
    #[display("{_0}")]
    App(AppError),

    /// The logger could not be installed.
    #[display("Logger setup failed: {_0}")]
    Logger(log::SetLoggerError),
}

impl CliError {
    /// Process exit status for this failure: 2 for usage errors, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::App(e) if e.is_usage() => 2,
            _ => 1,
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::App(e) => Some(e),
            CliError::Logger(e) => Some(e),
        }
    }
}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
