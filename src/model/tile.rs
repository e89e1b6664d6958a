//! Individual tile data model

use crate::segment::hasher::ContentDigest;
use image::RgbaImage;

/// One rectangular sub-region of the source image
///
/// Tiles are created fresh by every regeneration and owned by exactly one
/// `Tileset`; they never survive a grid-settings or image change. The label
/// is an explicit optional so "unlabeled" and "deliberately empty" cannot
/// be confused; an empty string passed to [`Tile::set_label`] clears it.
#[derive(Debug, Clone)]
pub struct Tile {
    /// Grid column, zero-indexed
    pub grid_col: u32,
    /// Grid row, zero-indexed
    pub grid_row: u32,
    /// Left edge of the tile rectangle in source-image pixels
    pub pixel_x: u32,
    /// Top edge of the tile rectangle in source-image pixels
    pub pixel_y: u32,
    /// Tile width in pixels
    pub width: u32,
    /// Tile height in pixels
    pub height: u32,
    /// Index of the lowest-index tile sharing this tile's digest
    ///
    /// Equals the tile's own index when it is unique or has no digest.
    pub duplicate_group_id: usize,

    label: Option<String>,
    digest: Option<ContentDigest>,
    pixels: RgbaImage,
}

impl Tile {
    /// Create a tile from its grid position, rectangle, and extracted pixels
    ///
    /// The digest is computed immediately from the pixel copy; `group_id`
    /// starts as the tile's own index and is rewritten by the segmenter's
    /// grouping pass.
    pub fn new(
        grid_col: u32,
        grid_row: u32,
        pixel_x: u32,
        pixel_y: u32,
        pixels: RgbaImage,
        own_index: usize,
    ) -> Self {
        let digest = crate::segment::hasher::digest_pixels(&pixels);
        Self {
            grid_col,
            grid_row,
            pixel_x,
            pixel_y,
            width: pixels.width(),
            height: pixels.height(),
            duplicate_group_id: own_index,
            label: None,
            digest,
            pixels,
        }
    }

    /// The user-assigned label, if any
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Assign a label, treating an empty string as "clear"
    pub fn set_label(&mut self, label: &str) {
        if label.is_empty() {
            self.label = None;
        } else {
            self.label = Some(label.to_string());
        }
    }

    /// Whether the tile carries a label and is therefore export-eligible
    pub const fn is_labeled(&self) -> bool {
        self.label.is_some()
    }

    /// Content digest of the tile's pixels, absent for zero-sized buffers
    pub const fn digest(&self) -> Option<&ContentDigest> {
        self.digest.as_ref()
    }

    /// The tile's independent pixel buffer
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Export filename for a labeled tile, `None` when unlabeled
    pub fn filename(&self, extension: &str) -> Option<String> {
        let ext = extension.trim_start_matches('.');
        self.label.as_ref().map(|name| format!("{name}.{ext}"))
    }
}
