//! Tileset segmentation, deduplication, and collision-free export
//!
//! The system slices a raster image into a regular grid of tiles, detects
//! pixel-identical tiles so only one representative per unique artwork
//! needs a label, and exports the labeled set under collision-safe names
//! together with a per-folder provenance record.

#![forbid(unsafe_code)]

/// Export planning, collision resolution, and provenance records
pub mod export;
/// Input/output operations, CLI orchestration, and error handling
pub mod io;
/// Data model for tilesets, tiles, and license metadata
pub mod model;
/// Segmentation pipeline: layout, hashing, and tile extraction
pub mod segment;

pub use io::error::{Result, SplitError};
