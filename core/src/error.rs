//! # Error Handling
//!
//! Provides the unified `AppError` enum returned by every stage of a rewrite run.
//! Each variant corresponds to one failure category; all of them are terminal.

use derive_more::{Display, From};
use std::path::PathBuf;
use std::process::ExitStatus;

/// The file a failing operation was working on.
///
/// Rendered into diagnostics as `open <role> file failed: ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FileRole {
    /// The JSON replacement configuration.
    #[display("config")]
    Config,
    /// The generated `<name>_api.go` source.
    #[display("api")]
    Api,
    /// Scratch output for the api file.
    #[display("api temp")]
    ApiTemp,
    /// The generated `configure_<name>.go` source.
    #[display("configure")]
    Configure,
    /// Scratch output for the configure file.
    #[display("configure temp")]
    ConfigureTemp,
}

/// Failures of the external source formatter.
#[derive(Debug, Display)]
pub enum FormatterError {
    /// The formatter process could not be started.
    #[display("{program} command failed: {source}")]
    Launch {
        /// Executable that was invoked.
        program: String,
        /// Underlying spawn error.
        source: std::io::Error,
    },

    /// The formatter ran but reported failure.
    #[display("{program} command failed: {status}")]
    ExitStatus {
        /// Executable that was invoked.
        program: String,
        /// Exit status reported by the process.
        status: ExitStatus,
    },
}

impl std::error::Error for FormatterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatterError::Launch { source, .. } => Some(source),
            FormatterError::ExitStatus { .. } => None,
        }
    }
}

/// The Global Error Enum.
///
/// Only `ConfigParse` and `Formatter` convert implicitly; IO failures must be
/// tagged with the file they concern so the diagnostic names it.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Invalid invocation, detected before any file is touched.
    #[display("{_0}")]
    Usage(String),

    /// The replacement configuration is not valid JSON of the expected shape.
    #[from]
    #[display("load config file failed: {_0}")]
    ConfigParse(serde_json::Error),

    /// A source could not be opened or a temp file could not be created.
    #[display("open {role} file failed: {}: {source}", path.display())]
    FileOpen {
        /// Which file was being opened.
        role: FileRole,
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Reading a source or writing its rewritten form failed mid-transform.
    #[display("rewrite {role} file failed: {source}")]
    RewriteIo {
        /// Which file was being rewritten.
        role: FileRole,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The external formatter failed to launch or exited unsuccessfully.
    #[from]
    #[display("{_0}")]
    Formatter(FormatterError),

    /// Replacing an original with its temp file failed.
    #[display("update {role} file failed: {} -> {}: {source}", from.display(), to.display())]
    Rename {
        /// Which original was being replaced.
        role: FileRole,
        /// The temp file.
        from: PathBuf,
        /// The original it should have replaced.
        to: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

impl AppError {
    /// Returns true for invocation errors raised before any I/O.
    pub fn is_usage(&self) -> bool {
        matches!(self, AppError::Usage(_))
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Usage(_) => None,
            AppError::ConfigParse(e) => Some(e),
            AppError::FileOpen { source, .. }
            | AppError::RewriteIo { source, .. }
            | AppError::Rename { source, .. } => Some(source),
            AppError::Formatter(e) => Some(e),
        }
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
