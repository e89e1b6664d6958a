//! Grid layout computation
//!
//! Pure functions mapping image dimensions and grid settings to column and
//! row counts. Every counted cell is guaranteed to fit entirely inside the
//! image; degenerate settings (non-positive tile size or step, offset past
//! the image edge) resolve to an empty grid rather than an error.

use crate::model::tileset::GridSettings;

/// Number of tile columns that fit across the image width
pub const fn column_count(image_width: u32, settings: &GridSettings) -> u32 {
    axis_count(
        image_width,
        settings.tile_width,
        settings.separator_x,
        settings.offset_x,
    )
}

/// Number of tile rows that fit down the image height
pub const fn row_count(image_height: u32, settings: &GridSettings) -> u32 {
    axis_count(
        image_height,
        settings.tile_height,
        settings.separator_y,
        settings.offset_y,
    )
}

/// Full grid dimensions as (columns, rows)
pub const fn grid_dimensions(
    image_width: u32,
    image_height: u32,
    settings: &GridSettings,
) -> (u32, u32) {
    (
        column_count(image_width, settings),
        row_count(image_height, settings),
    )
}

// A cell fits when its body (not the trailing separator) stays inside the
// image: n cells need offset + n * step - separator <= span, hence
// n = (span - offset + separator) / step.
const fn axis_count(span: u32, tile: i32, separator: i32, offset: i32) -> u32 {
    if tile <= 0 {
        return 0;
    }

    let step = tile as i64 + separator as i64;
    if step <= 0 {
        return 0;
    }

    let available = span as i64 - offset as i64;
    if available < 0 {
        return 0;
    }

    let count = (available + separator as i64) / step;
    if count < 0 { 0 } else { count as u32 }
}
