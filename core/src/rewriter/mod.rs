#![deny(missing_docs)]

//! # Line Rewriting
//!
//! Text-level rewriting of go-swagger generated server files. Sources are never
//! parsed; each line is matched against fixed patterns derived from the rules.
//!
//! - **api**: the `<name>_api.go` handler struct, its defaults and route table.
//! - **configure**: the `configure_<name>.go` handler assignments.
//!
//! Both variants share the driver in this module: lines are split on `\n`
//! (dropping one trailing `\r`), every output line is `\n` terminated, and an
//! `import (` line is followed by one import per rule in rule order.

use crate::config::Replacement;
use std::io::{Read, Write};

/// Api-file rewriting (`<name>_api.go`).
pub mod api;

/// Configure-file rewriting (`configure_<name>.go`).
pub mod configure;

pub use api::{rewrite_api, rewrite_api_stream, ApiRewriter};
pub use configure::{rewrite_configure, rewrite_configure_stream, ConfigureRewriter};

/// Opening line of a Go grouped import block, compared after trimming.
pub const IMPORT_BLOCK_OPENER: &str = "import (";

/// A per-file-kind substitution strategy.
///
/// Implementors rewrite a single non-import line. The shared driver takes care
/// of line splitting and import injection.
pub trait LineRewriter {
    /// Returns the rewritten form of `line`, or the line unchanged.
    fn rewrite_line(&self, line: &str) -> String;
}

/// Applies `rewriter` to every line of `source`.
pub fn rewrite_source(
    source: &str,
    rules: &[Replacement],
    rewriter: &impl LineRewriter,
) -> String {
    let mut out = String::with_capacity(source.len() + rules.len() * 64);

    for raw in source.split_terminator('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if line.trim() == IMPORT_BLOCK_OPENER {
            out.push_str(line);
            out.push('\n');
            for rule in rules {
                out.push_str(&rule.import_line());
                out.push('\n');
            }
        } else {
            out.push_str(&rewriter.rewrite_line(line));
            out.push('\n');
        }
    }

    out
}

/// Reads all of `reader`, rewrites it and writes the result to `writer` in one go.
///
/// Non UTF-8 input surfaces as an `InvalidData` error.
pub fn rewrite_stream<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    rules: &[Replacement],
    rewriter: &impl LineRewriter,
) -> std::io::Result<()> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;

    let rewritten = rewrite_source(&source, rules, rewriter);
    writer.write_all(rewritten.as_bytes())?;
    writer.flush()
}
