//! Tile extraction and duplicate grouping
//!
//! Walks the grid row-major (rows outer, columns inner), copies each cell's
//! pixel region into an independent buffer, digests it, and builds the
//! digest-to-indices duplicate index in a second pass. The whole result is
//! rebuilt on every call; nothing is patched incrementally.

use crate::model::tile::Tile;
use crate::model::tileset::GridSettings;
use crate::segment::hasher::ContentDigest;
use crate::segment::layout;
use image::RgbaImage;
use image::imageops;
use std::collections::HashMap;

/// Ordered tile sequence plus the duplicate index built from it
#[derive(Debug, Default)]
pub struct Segmentation {
    /// Tiles in row-major creation order
    pub tiles: Vec<Tile>,
    /// Content digest to tile indices, indices in creation order
    pub duplicate_groups: HashMap<ContentDigest, Vec<usize>>,
}

/// Segment a source image under the given grid settings
///
/// Cells whose rectangle would overflow the image are skipped rather than
/// cropped or padded, even though the layout calculation should never
/// produce one.
pub fn segment(image: &RgbaImage, settings: &GridSettings) -> Segmentation {
    let (cols, rows) = layout::grid_dimensions(image.width(), image.height(), settings);

    let step_x = i64::from(settings.tile_width) + i64::from(settings.separator_x);
    let step_y = i64::from(settings.tile_height) + i64::from(settings.separator_y);

    let mut segmentation = Segmentation::default();

    for row in 0..rows {
        for col in 0..cols {
            let origin_x = i64::from(settings.offset_x) + i64::from(col) * step_x;
            let origin_y = i64::from(settings.offset_y) + i64::from(row) * step_y;

            let Some((x, y)) = validate_origin(
                origin_x,
                origin_y,
                settings.tile_width as u32,
                settings.tile_height as u32,
                image.width(),
                image.height(),
            ) else {
                continue;
            };

            let pixels = imageops::crop_imm(
                image,
                x,
                y,
                settings.tile_width as u32,
                settings.tile_height as u32,
            )
            .to_image();

            let index = segmentation.tiles.len();
            let tile = Tile::new(col, row, x, y, pixels, index);

            if let Some(digest) = tile.digest() {
                segmentation
                    .duplicate_groups
                    .entry(*digest)
                    .or_default()
                    .push(index);
            }
            segmentation.tiles.push(tile);
        }
    }

    assign_group_ids(&mut segmentation);
    segmentation
}

// Rejects any cell whose body would leave the image, including cells pushed
// left or above the origin by a negative offset.
const fn validate_origin(
    origin_x: i64,
    origin_y: i64,
    width: u32,
    height: u32,
    image_width: u32,
    image_height: u32,
) -> Option<(u32, u32)> {
    if origin_x < 0 || origin_y < 0 {
        return None;
    }
    if origin_x + width as i64 > image_width as i64 {
        return None;
    }
    if origin_y + height as i64 > image_height as i64 {
        return None;
    }
    Some((origin_x as u32, origin_y as u32))
}

// Every member of a group gets the group's lowest creation index. Tiles
// without a digest keep their own index from construction.
fn assign_group_ids(segmentation: &mut Segmentation) {
    for indices in segmentation.duplicate_groups.values() {
        let Some(&group_id) = indices.first() else {
            continue;
        };
        for &index in indices {
            if let Some(tile) = segmentation.tiles.get_mut(index) {
                tile.duplicate_group_id = group_id;
            }
        }
    }
}
