//! # Source Formatter
//!
//! Invocation of the external Go formatter on rewritten output.
//!
//! Abstracted so the pipeline can be exercised in tests without `gofmt` installed.

use crate::error::FormatterError;
use std::path::Path;
use std::process::{Command, Stdio};

/// Formats source files in place.
pub trait SourceFormatter {
    /// Formats every file in `paths` with a single invocation.
    fn format(&self, paths: &[&Path]) -> Result<(), FormatterError>;
}

/// Runs `<program> <arg> <paths...>` with inherited stdout/stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFormatter {
    /// Formatter executable (e.g. `gofmt`).
    pub program: String,
    /// Single argument placed before the paths (e.g. `-w`).
    pub arg: String,
}

impl CommandFormatter {
    /// Creates a formatter command.
    pub fn new(program: impl Into<String>, arg: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            arg: arg.into(),
        }
    }
}

impl Default for CommandFormatter {
    fn default() -> Self {
        Self::new("gofmt", "-w")
    }
}

impl SourceFormatter for CommandFormatter {
    fn format(&self, paths: &[&Path]) -> Result<(), FormatterError> {
        log::info!("Running {} {} on {:?}", self.program, self.arg, paths);

        let status = Command::new(&self.program)
            .arg(&self.arg)
            .args(paths)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| FormatterError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(FormatterError::ExitStatus {
                program: self.program.clone(),
                status,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_gofmt_write() {
        let f = CommandFormatter::default();
        assert_eq!(f.program, "gofmt");
        assert_eq!(f.arg, "-w");
    }

    #[test]
    fn test_missing_program_is_launch_error() {
        let f = CommandFormatter::new("swag-replace-no-such-formatter", "-w");
        let err = f.format(&[Path::new("a.go")]).unwrap_err();
        assert!(matches!(err, FormatterError::Launch { .. }));
        assert!(err
            .to_string()
            .starts_with("swag-replace-no-such-formatter command failed"));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_command() {
        // `true` ignores its arguments and exits 0.
        let f = CommandFormatter::new("true", "-w");
        assert!(f.format(&[Path::new("a.go"), Path::new("b.go")]).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_is_exit_status_error() {
        let f = CommandFormatter::new("false", "-w");
        let err = f.format(&[Path::new("a.go")]).unwrap_err();
        assert!(matches!(err, FormatterError::ExitStatus { .. }));
    }
}
