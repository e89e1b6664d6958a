//! Data model for tilesets, tiles, and license metadata

/// License metadata and static warning analysis
pub mod license;
/// Individual tile data model
pub mod tile;
/// Tileset ownership, regeneration, and duplicate-group maintenance
pub mod tileset;

pub use tile::Tile;
pub use tileset::{GridSettings, Tileset};
