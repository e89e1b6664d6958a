//! Compile-time constants controlling defaults and safety limits

/// Default tile width in pixels
pub const DEFAULT_TILE_WIDTH: i32 = 32;

/// Default tile height in pixels
pub const DEFAULT_TILE_HEIGHT: i32 = 32;

// Safety limit for filename collision resolution
/// Maximum numeric suffixes tried before giving up
pub const MAX_COLLISION_ATTEMPTS: u32 = 10_000;

/// Filename of the per-folder provenance record
pub const SIDECAR_FILENAME: &str = "LICENSE.json";

/// Software identifier embedded in exported tile metadata
pub const SOFTWARE_NAME: &str = "tilesplit";

/// UTC timestamp format for the embedded creation-time field
pub const CREATION_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Prefix used when generating default set-folder names
pub const SET_NAME_PREFIX: &str = "tileset";

/// Replacement name when sanitizing reduces a label to nothing
pub const FALLBACK_FILENAME: &str = "unnamed";
