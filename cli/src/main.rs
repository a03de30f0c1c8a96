#![deny(missing_docs)]

//! # Swag Replace CLI
//!
//! Rewrites a go-swagger generated server so that selected operations are
//! served by handlers from external packages, then formats and replaces the
//! generated files.
//!
//! Diagnostics go through `log`; set `RUST_LOG` or pass `-v` to see them.

use std::process::ExitCode;

use clap::Parser;

use crate::error::CliResult;
use crate::rewrite::RewriteArgs;

mod error;
mod rewrite;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Redirect go-swagger handlers to external packages")]
struct Cli {
    #[clap(flatten)]
    rewrite: RewriteArgs,

    /// Increase log verbosity (-v info, -vv debug).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) -> CliResult<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = init_logging(cli.verbose).and_then(|_| {
        let formatter = cli.rewrite.formatter();
        rewrite::execute(&cli.rewrite, &formatter)
    });

    match result {
        Ok(report) => {
            println!("{}", rewrite::render_report(&report));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
