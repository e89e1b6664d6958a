//! Export planning, filename collision resolution, and provenance records

/// Filename collision resolution and naming hygiene
pub mod collision;
/// Textual metadata fields for embeddable formats
pub mod metadata;
/// Export planning and the write pipeline
pub mod planner;
/// Per-folder provenance record
pub mod sidecar;

pub use planner::{ExportReport, TileExporter, TileWriter};
