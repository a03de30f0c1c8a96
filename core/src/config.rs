//! # Replacement Config
//!
//! The JSON document describing which generated operations are redirected to
//! which external packages:
//!
//! ```json
//! {
//!   "replacements": [
//!     {
//!       "from_operation_id": "V2Onboarding",
//!       "to_operation_id": "Onboarding",
//!       "to_package_alias": "onboarding",
//!       "to_package": "app/onboarding"
//!     }
//!   ]
//! }
//! ```
//!
//! Rule order is significant and preserved exactly as declared.

use crate::error::{AppError, AppResult, FileRole};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One renaming directive.
///
/// All four keys are required: an absent key fails the whole config instead of
/// silently becoming an empty identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Replacement {
    /// Operation id as emitted by the generator (e.g. `V2Onboarding`).
    pub from_operation_id: String,
    /// Operation id inside the replacement package (e.g. `Onboarding`).
    pub to_operation_id: String,
    /// Alias the replacement package is imported under.
    pub to_package_alias: String,
    /// Full import path of the replacement package.
    #[serde(rename = "to_package")]
    pub to_package_import_path: String,
}

impl Replacement {
    /// Renders the import-block entry binding this rule's alias.
    pub fn import_line(&self) -> String {
        format!(
            "\t{} \"{}\"",
            self.to_package_alias, self.to_package_import_path
        )
    }
}

/// The ordered rule set for a run. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RewriteConfig {
    /// Rules in declaration order.
    #[serde(default)]
    pub replacements: Vec<Replacement>,
}

impl RewriteConfig {
    /// Parses a config payload.
    pub fn from_slice(bytes: &[u8]) -> AppResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Parses a config payload from any reader.
    pub fn from_reader(reader: impl Read) -> AppResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Opens and parses the config file at `path`.
    pub fn load(path: &Path) -> AppResult<Self> {
        let file = File::open(path).map_err(|source| AppError::FileOpen {
            role: FileRole::Config,
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_reader(std::io::BufReader::new(file))?;
        log::info!(
            "Loaded {} replacement(s) from {:?}",
            config.replacements.len(),
            path
        );
        Ok(config)
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &[Replacement] {
        &self.replacements
    }
}
