//! Locations of the generated files inside a go-swagger server tree.

use crate::error::{AppError, AppResult};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to an original path to name its scratch file.
pub const TEMP_SUFFIX: &str = ".tmp";

/// Settings for one rewrite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Path to the JSON replacement config.
    pub config: PathBuf,
    /// Base directory the server was generated into.
    pub target: PathBuf,
    /// Package holding server-specific code (go-swagger `--server-package`).
    pub server_package: String,
    /// Application name used in the generated file names. Required.
    pub name: String,
    /// Package holding the generated operations (go-swagger `--api-package`).
    pub api_package: String,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            config: PathBuf::from("config.json"),
            target: PathBuf::from("./"),
            server_package: "restapi".into(),
            name: String::new(),
            api_package: "operations".into(),
        }
    }
}

/// Originals and their scratch files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPaths {
    /// `<target>/<server>/<api>/<name>_api.go`
    pub api_file: PathBuf,
    /// `api_file` + `.tmp`
    pub api_temp: PathBuf,
    /// `<target>/<server>/configure_<name>.go`
    pub configure_file: PathBuf,
    /// `configure_file` + `.tmp`
    pub configure_temp: PathBuf,
}

impl TargetPaths {
    /// Derives all four paths. Fails with a usage error when `name` is empty.
    pub fn derive(options: &RewriteOptions) -> AppResult<Self> {
        if options.name.is_empty() {
            return Err(AppError::Usage("--name flag is required".into()));
        }

        let server_dir = options.target.join(&options.server_package);
        let api_file = server_dir
            .join(&options.api_package)
            .join(format!("{}_api.go", options.name));
        let configure_file = server_dir.join(format!("configure_{}.go", options.name));

        Ok(Self {
            api_temp: temp_path(&api_file),
            configure_temp: temp_path(&configure_file),
            api_file,
            configure_file,
        })
    }
}

/// Appends [`TEMP_SUFFIX`] to the full file name.
pub fn temp_path(path: &Path) -> PathBuf {
    let mut raw = OsString::from(path.as_os_str());
    raw.push(TEMP_SUFFIX);
    PathBuf::from(raw)
}
