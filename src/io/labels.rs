//! Label assignment files
//!
//! A JSON array of `{"col", "row", "name"}` entries naming grid cells.
//! Labels are applied through the group-rename path, so naming one member
//! of a duplicate group labels the whole group.

use crate::io::error::{Result, SplitError};
use crate::model::tileset::Tileset;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One label assignment for a grid cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEntry {
    /// Grid column, zero-indexed
    pub col: u32,
    /// Grid row, zero-indexed
    pub row: u32,
    /// Label to assign; an empty string clears the cell's group
    pub name: String,
}

/// Load label assignments from a JSON file
///
/// # Errors
///
/// Returns `LabelFile` when the file cannot be read or parsed
pub fn load_labels(path: &Path) -> Result<Vec<LabelEntry>> {
    let contents = std::fs::read_to_string(path).map_err(|e| SplitError::LabelFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&contents).map_err(|e| SplitError::LabelFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Apply label entries to a tileset, returning (applied, skipped) counts
///
/// Entries addressing cells the grid does not contain are skipped; each
/// applied entry renames the addressed tile's whole duplicate group.
pub fn apply_labels(tileset: &mut Tileset, entries: &[LabelEntry]) -> (usize, usize) {
    let mut applied = 0;
    let mut skipped = 0;

    for entry in entries {
        match tileset.tile_index_at(entry.col, entry.row) {
            Some(index) => {
                tileset.rename_group(index, &entry.name);
                applied += 1;
            }
            None => skipped += 1,
        }
    }

    (applied, skipped)
}
