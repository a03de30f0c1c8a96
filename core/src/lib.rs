#![deny(missing_docs)]

//! # Swag Replace Core
//!
//! Post-processing for go-swagger generated servers: redirects selected
//! operation handlers from the generated `operations` package to externally
//! maintained packages, by rewriting the generated api and configure files
//! line by line.

/// Shared error types.
pub mod error;

/// Replacement config model.
pub mod config;

/// Line rewriting for api and configure files.
pub mod rewriter;

/// External formatter invocation.
pub mod formatter;

/// Generated file locations.
pub mod paths;

/// End-to-end rewrite run.
pub mod pipeline;

pub use config::{Replacement, RewriteConfig};
pub use error::{AppError, AppResult, FileRole, FormatterError};
pub use formatter::{CommandFormatter, SourceFormatter};
pub use paths::{RewriteOptions, TargetPaths};
pub use pipeline::{run, RewriteReport};
pub use rewriter::{rewrite_api, rewrite_configure, LineRewriter};
