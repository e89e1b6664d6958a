//! Segmentation pipeline: grid layout, content hashing, tile extraction
//!
//! Everything in this module is pure computation over pixel buffers and
//! settings; no input produces an error, only an empty result.

/// Content hashing for pixel-exact deduplication
pub mod hasher;
/// Grid layout computation
pub mod layout;
/// Tile extraction and duplicate grouping
pub mod segmenter;

pub use hasher::ContentDigest;
pub use segmenter::Segmentation;
