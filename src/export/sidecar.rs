//! Per-folder provenance record (`LICENSE.json`)
//!
//! Every export run appends one record to the destination folder's store;
//! history is never overwritten. An unreadable or corrupt store is treated
//! as absent and a fresh one is started in its place.

use crate::io::configuration::SIDECAR_FILENAME;
use crate::io::error::{Result, SplitError};
use crate::model::license::LicenseInfo;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One export run's provenance entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidecarRecord {
    /// Filename of the source image
    pub source_file: String,
    /// Raw license text
    pub license: String,
    /// URL of the license terms
    pub license_url: String,
    /// Original author of the source artwork
    pub author: String,
    /// URL the source artwork was obtained from
    pub source_url: String,
    /// Filenames produced by the run, successful writes only
    pub tiles: Vec<String>,
}

impl SidecarRecord {
    /// Build a record for an export run
    pub fn new(source_path: Option<&Path>, license: &LicenseInfo, tiles: Vec<String>) -> Self {
        let source_file = source_path
            .and_then(|p| p.file_name())
            .map_or_else(|| "unknown".to_string(), |n| n.to_string_lossy().into_owned());

        Self {
            source_file,
            license: license.license_text.clone(),
            license_url: license.license_url.clone(),
            author: license.author.clone(),
            source_url: license.source_url.clone(),
            tiles,
        }
    }
}

/// The accumulated provenance store for one destination folder
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SidecarStore {
    /// Records in append order, oldest first
    pub sources: Vec<SidecarRecord>,
}

impl SidecarStore {
    /// Load the store from a destination folder, or start fresh
    ///
    /// A missing, unreadable, or unparseable file all yield an empty store;
    /// the data-loss tradeoff of discarding a corrupt store is deliberate.
    pub fn load_or_default(folder: &Path) -> Self {
        let path = folder.join(SIDECAR_FILENAME);
        std::fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Append one export run's record
    pub fn append(&mut self, record: SidecarRecord) {
        self.sources.push(record);
    }

    /// Persist the store into the destination folder
    ///
    /// # Errors
    ///
    /// Returns a `FileSystem` error when the file cannot be written
    pub fn save(&self, folder: &Path) -> Result<()> {
        let path = folder.join(SIDECAR_FILENAME);
        let contents =
            serde_json::to_string_pretty(self).map_err(|e| SplitError::FileSystem {
                path: path.clone(),
                operation: "serialize sidecar",
                source: std::io::Error::other(e),
            })?;
        std::fs::write(&path, contents).map_err(|e| SplitError::FileSystem {
            path,
            operation: "write sidecar",
            source: e,
        })
    }
}
