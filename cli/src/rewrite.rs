#![deny(missing_docs)]

//! # Rewrite Command
//!
//! Redirects go-swagger generated handlers to external packages:
//!
//! 1. **Config**: loads the ordered replacement rules.
//! 2. **Rewrite**: patches `<name>_api.go` and `configure_<name>.go` into `.tmp` siblings.
//! 3. **Format**: runs the Go formatter over both temp files.
//! 4. **Replace**: renames the temp files over the originals.

use crate::error::CliResult;
use std::path::PathBuf;
use swag_replace_core::{run, CommandFormatter, RewriteOptions, RewriteReport, SourceFormatter};

/// Banner printed before the rewritten paths.
pub const SUCCESS_BANNER: &str = "===== REWRITE SUCCESSFUL =====";

/// Arguments for the rewrite.
#[derive(clap::Args, Debug, Clone)]
pub struct RewriteArgs {
    /// Replacements configuration.
    #[clap(long, default_value = "config.json")]
    pub config: PathBuf,

    /// The base directory the files were generated into.
    #[clap(long, default_value = "./")]
    pub target: PathBuf,

    /// The package holding the server specific code.
    #[clap(long, default_value = "restapi")]
    pub server_package: String,

    /// The name of the application (required).
    #[clap(long)]
    pub name: Option<String>,

    /// The package holding the generated operations.
    #[clap(long, default_value = "operations")]
    pub api_package: String,

    /// Formatter executable location.
    #[clap(long, default_value = "gofmt")]
    pub gofmt_cmd: String,

    /// Formatter argument, passed before the file paths.
    #[clap(long, default_value = "-w", allow_hyphen_values = true)]
    pub gofmt_arg: String,
}

impl RewriteArgs {
    /// Pipeline options; an absent `--name` becomes empty and is rejected by the pipeline.
    pub fn options(&self) -> RewriteOptions {
        RewriteOptions {
            config: self.config.clone(),
            target: self.target.clone(),
            server_package: self.server_package.clone(),
            name: self.name.clone().unwrap_or_default(),
            api_package: self.api_package.clone(),
        }
    }

    /// The configured external formatter.
    pub fn formatter(&self) -> CommandFormatter {
        CommandFormatter::new(&self.gofmt_cmd, &self.gofmt_arg)
    }
}

/// Executes the rewrite.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `formatter` - The formatter applied to rewritten output (e.g. `gofmt -w`).
pub fn execute(args: &RewriteArgs, formatter: &impl SourceFormatter) -> CliResult<RewriteReport> {
    Ok(run(&args.options(), formatter)?)
}

/// Renders the success banner followed by the rewritten file paths.
pub fn render_report(report: &RewriteReport) -> String {
    format!(
        "{}\n{}\n{}",
        SUCCESS_BANNER,
        report.api_file.display(),
        report.configure_file.display()
    )
}
