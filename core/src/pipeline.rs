//! # Rewrite Pipeline
//!
//! Runs one end-to-end rewrite:
//!
//! 1. Validate options and derive paths (no I/O on failure).
//! 2. Load the replacement config.
//! 3. Open both sources and create their temp files.
//! 4. Rewrite api source -> api temp, configure source -> configure temp.
//! 5. Format both temp files with one formatter invocation.
//! 6. Rename each temp file over its original.
//!
//! Every step is a hard stop. Temp files written before a later failure are
//! left on disk; originals are only touched by the final renames.

use crate::config::RewriteConfig;
use crate::error::{AppError, AppResult, FileRole};
use crate::formatter::SourceFormatter;
use crate::paths::{RewriteOptions, TargetPaths};
use crate::rewriter::{rewrite_api_stream, rewrite_configure_stream};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Files replaced by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    /// The rewritten api file.
    pub api_file: PathBuf,
    /// The rewritten configure file.
    pub configure_file: PathBuf,
}

/// Executes the rewrite pipeline.
///
/// # Arguments
///
/// * `options` - Config location and generated-tree layout.
/// * `formatter` - Applied to both temp files before they replace the originals.
pub fn run(options: &RewriteOptions, formatter: &impl SourceFormatter) -> AppResult<RewriteReport> {
    let paths = TargetPaths::derive(options)?;
    log::info!("Api file: {:?}", paths.api_file);
    log::info!("Configure file: {:?}", paths.configure_file);

    let config = RewriteConfig::load(&options.config)?;
    let rules = config.rules();

    let api_in = open_source(&paths.api_file, FileRole::Api)?;
    let api_out = create_temp(&paths.api_temp, FileRole::ApiTemp)?;
    let configure_in = open_source(&paths.configure_file, FileRole::Configure)?;
    let configure_out = create_temp(&paths.configure_temp, FileRole::ConfigureTemp)?;

    write_synced(api_out, FileRole::Api, |w| {
        rewrite_api_stream(BufReader::new(api_in), w, rules)
    })?;
    log::info!("Rewrote api file into {:?}", paths.api_temp);

    write_synced(configure_out, FileRole::Configure, |w| {
        rewrite_configure_stream(BufReader::new(configure_in), w, rules, &options.api_package)
    })?;
    log::info!("Rewrote configure file into {:?}", paths.configure_temp);

    formatter.format(&[paths.api_temp.as_path(), paths.configure_temp.as_path()])?;

    replace(&paths.api_temp, &paths.api_file, FileRole::Api)?;
    replace(&paths.configure_temp, &paths.configure_file, FileRole::Configure)?;

    Ok(RewriteReport {
        api_file: paths.api_file,
        configure_file: paths.configure_file,
    })
}

fn open_source(path: &Path, role: FileRole) -> AppResult<File> {
    File::open(path).map_err(|source| AppError::FileOpen {
        role,
        path: path.to_path_buf(),
        source,
    })
}

fn create_temp(path: &Path, role: FileRole) -> AppResult<File> {
    File::create(path).map_err(|source| AppError::FileOpen {
        role,
        path: path.to_path_buf(),
        source,
    })
}

/// Runs `write` against a buffered `file`, then flushes and syncs it to disk.
/// The handle is closed on return.
fn write_synced<F>(file: File, role: FileRole, write: F) -> AppResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let tag = |source: std::io::Error| AppError::RewriteIo { role, source };

    let mut writer = BufWriter::new(file);
    write(&mut writer).map_err(tag)?;
    writer.flush().map_err(tag)?;
    writer.get_ref().sync_all().map_err(tag)
}

fn replace(from: &Path, to: &Path, role: FileRole) -> AppResult<()> {
    fs::rename(from, to).map_err(|source| AppError::Rename {
        role,
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    log::info!("Replaced {:?}", to);
    Ok(())
}
