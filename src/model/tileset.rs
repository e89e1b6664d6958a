//! Tileset data model
//!
//! A `Tileset` owns the source image, the current grid settings, and the
//! tile sequence derived from them. The tile sequence and duplicate index
//! are always rebuilt together; all label mutation funnels through
//! [`Tileset::rename_group`] so every member of a duplicate group carries
//! the same label at all times.

use crate::io::formats::OutputFormat;
use crate::model::license::LicenseInfo;
use crate::model::tile::Tile;
use crate::segment::hasher::ContentDigest;
use crate::segment::layout;
use crate::segment::segmenter;
use image::RgbaImage;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::io::configuration::{DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH};

/// Settings for the tile grid overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSettings {
    /// Tile width in pixels
    pub tile_width: i32,
    /// Tile height in pixels
    pub tile_height: i32,
    /// Horizontal gap between tiles
    pub separator_x: i32,
    /// Vertical gap between tiles
    pub separator_y: i32,
    /// Starting X offset
    pub offset_x: i32,
    /// Starting Y offset
    pub offset_y: i32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            separator_x: 0,
            separator_y: 0,
            offset_x: 0,
            offset_y: 0,
        }
    }
}

/// A loaded source image with its extracted, deduplicated tiles
#[derive(Debug)]
pub struct Tileset {
    /// Human-chosen name for the exported set folder
    pub set_name: String,

    image: RgbaImage,
    source_path: Option<PathBuf>,
    source_format: Option<OutputFormat>,
    grid_settings: GridSettings,
    tiles: Vec<Tile>,
    duplicate_groups: HashMap<ContentDigest, Vec<usize>>,
    license: LicenseInfo,
    selected: Option<usize>,
}

impl Tileset {
    /// Create a tileset from a decoded image and segment it immediately
    pub fn new(image: RgbaImage, grid_settings: GridSettings) -> Self {
        let mut tileset = Self {
            set_name: String::new(),
            image,
            source_path: None,
            source_format: None,
            grid_settings,
            tiles: Vec::new(),
            duplicate_groups: HashMap::new(),
            license: LicenseInfo::default(),
            selected: None,
        };
        tileset.regenerate();
        tileset
    }

    /// Record where the source image came from and its on-disk format
    pub fn set_source(&mut self, path: PathBuf, format: OutputFormat) {
        self.source_path = Some(path);
        self.source_format = Some(format);
    }

    /// Path of the source image, if known
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// On-disk format of the source image, if known
    pub const fn source_format(&self) -> Option<OutputFormat> {
        self.source_format
    }

    /// The source image pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Current grid settings
    pub const fn grid_settings(&self) -> &GridSettings {
        &self.grid_settings
    }

    /// Apply new grid settings and regenerate the tile sequence
    pub fn set_grid_settings(&mut self, settings: GridSettings) {
        self.grid_settings = settings;
        self.regenerate();
    }

    /// Replace the source image and regenerate the tile sequence
    pub fn replace_image(&mut self, image: RgbaImage) {
        self.image = image;
        self.regenerate();
    }

    /// License metadata for the source artwork
    pub const fn license(&self) -> &LicenseInfo {
        &self.license
    }

    /// Replace the license metadata as one atomic value
    ///
    /// External lookups (metadata extraction, remote fetch) deliver a whole
    /// `LicenseInfo`; they never edit fields in place.
    pub fn set_license(&mut self, license: LicenseInfo) {
        self.license = license;
    }

    /// Tiles in row-major creation order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// A single tile by creation index
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Total number of tiles in the current generation
    pub const fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Number of labeled tiles
    pub fn labeled_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_labeled()).count()
    }

    /// Number of distinct content digests
    pub fn unique_tile_count(&self) -> usize {
        self.duplicate_groups.len()
    }

    /// Number of columns in the current grid
    pub fn grid_columns(&self) -> u32 {
        layout::column_count(self.image.width(), &self.grid_settings)
    }

    /// Number of rows in the current grid
    pub fn grid_rows(&self) -> u32 {
        layout::row_count(self.image.height(), &self.grid_settings)
    }

    /// Index of the tile occupying a grid cell, if one was emitted there
    pub fn tile_index_at(&self, col: u32, row: u32) -> Option<usize> {
        self.tiles
            .iter()
            .position(|t| t.grid_col == col && t.grid_row == row)
    }

    /// Rebuild the tile sequence and duplicate index from scratch
    ///
    /// Labels survive by grid-cell position: a new tile at (col, row)
    /// inherits the label the old tile at (col, row) had, and nothing else.
    /// This deliberately tracks cells, not artwork, across a resize. A
    /// selection pointing past the new sequence is cleared.
    pub fn regenerate(&mut self) {
        let mut old_labels: HashMap<(u32, u32), String> = HashMap::new();
        for tile in &self.tiles {
            if let Some(label) = tile.label() {
                old_labels.insert((tile.grid_col, tile.grid_row), label.to_string());
            }
        }

        let segmentation = segmenter::segment(&self.image, &self.grid_settings);
        self.tiles = segmentation.tiles;
        self.duplicate_groups = segmentation.duplicate_groups;

        for tile in &mut self.tiles {
            if let Some(label) = old_labels.get(&(tile.grid_col, tile.grid_row)) {
                tile.set_label(label);
            }
        }

        if let Some(index) = self.selected {
            if index >= self.tiles.len() {
                self.selected = None;
            }
        }
    }

    /// Every tile index sharing the queried tile's digest, in creation order
    ///
    /// A tile without a digest belongs only to itself; an invalid index
    /// yields an empty list.
    pub fn duplicates_of(&self, index: usize) -> Vec<usize> {
        let Some(tile) = self.tiles.get(index) else {
            return Vec::new();
        };
        tile.digest()
            .and_then(|digest| self.duplicate_groups.get(digest))
            .cloned()
            .unwrap_or_else(|| vec![index])
    }

    /// Number of tiles in the queried tile's duplicate group, itself included
    pub fn duplicate_count(&self, index: usize) -> usize {
        self.duplicates_of(index).len()
    }

    /// Apply a label to a tile and every duplicate of it
    ///
    /// The single label-mutation point: callers observe either all group
    /// members renamed or none. An empty name clears the label across the
    /// group. Returns the indices that were modified.
    pub fn rename_group(&mut self, index: usize, name: &str) -> Vec<usize> {
        let members = self.duplicates_of(index);
        for &member in &members {
            if let Some(tile) = self.tiles.get_mut(member) {
                tile.set_label(name);
            }
        }
        members
    }

    /// Currently selected tile index, if any
    pub const fn selected_tile_index(&self) -> Option<usize> {
        self.selected
    }

    /// Select a tile by index; out-of-range indices clear the selection
    pub fn set_selection(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.tiles.len());
    }

    /// The selected tile's whole duplicate group, empty without a selection
    pub fn selected_group_indices(&self) -> Vec<usize> {
        self.selected
            .map(|index| self.duplicates_of(index))
            .unwrap_or_default()
    }

    /// Select the tile under a pixel position in source-image space
    ///
    /// Clicks in separator space, outside the grid, or over a skipped cell
    /// leave the selection untouched and return `None`.
    pub fn select_at_pixel(&mut self, pixel_x: i32, pixel_y: i32) -> Option<usize> {
        let gs = &self.grid_settings;
        if pixel_x < gs.offset_x || pixel_y < gs.offset_y {
            return None;
        }

        let step_x = gs.tile_width + gs.separator_x;
        let step_y = gs.tile_height + gs.separator_y;
        if step_x <= 0 || step_y <= 0 {
            return None;
        }

        let rel_x = pixel_x - gs.offset_x;
        let rel_y = pixel_y - gs.offset_y;

        if rel_x % step_x >= gs.tile_width || rel_y % step_y >= gs.tile_height {
            return None;
        }

        let col = (rel_x / step_x) as u32;
        let row = (rel_y / step_y) as u32;

        let index = self.tile_index_at(col, row)?;
        self.selected = Some(index);
        Some(index)
    }

    /// Indices of exportable tiles: labeled, one representative per group
    ///
    /// The representative is the lowest-index labeled member, walked in
    /// creation order. Group-wide label synchronization keeps that choice
    /// unambiguous.
    pub fn exportable_tiles(&self) -> Vec<usize> {
        let mut seen: HashSet<&ContentDigest> = HashSet::new();
        let mut exportable = Vec::new();

        for (index, tile) in self.tiles.iter().enumerate() {
            if !tile.is_labeled() {
                continue;
            }
            if let Some(digest) = tile.digest() {
                if !seen.insert(digest) {
                    continue;
                }
            }
            exportable.push(index);
        }

        exportable
    }
}
