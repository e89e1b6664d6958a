//! Tests for grid layout computation across varied settings

use tilesplit::model::tileset::GridSettings;
use tilesplit::segment::layout::{column_count, grid_dimensions, row_count};

#[test]
fn test_offset_consumes_span() {
    let settings = GridSettings {
        offset_x: 10,
        offset_y: 40,
        ..GridSettings::default()
    };
    // 100 - 10 = 90 leaves two 32px columns; 64 - 40 = 24 leaves no row
    assert_eq!(column_count(100, &settings), 2);
    assert_eq!(row_count(64, &settings), 0);
}

#[test]
fn test_asymmetric_axes_are_independent() {
    let settings = GridSettings {
        tile_width: 16,
        tile_height: 48,
        separator_x: 2,
        separator_y: 0,
        offset_x: 0,
        offset_y: 0,
    };
    // 16+2 steps across 100: floor((100 + 2) / 18) = 5
    assert_eq!(grid_dimensions(100, 100, &settings), (5, 2));
}

#[test]
fn test_single_pixel_tiles() {
    let settings = GridSettings {
        tile_width: 1,
        tile_height: 1,
        ..GridSettings::default()
    };
    assert_eq!(grid_dimensions(7, 3, &settings), (7, 3));
}

#[test]
fn test_tile_larger_than_image() {
    let settings = GridSettings {
        tile_width: 128,
        tile_height: 128,
        ..GridSettings::default()
    };
    assert_eq!(grid_dimensions(64, 64, &settings), (0, 0));
}

#[test]
fn test_negative_tile_size_is_degenerate() {
    let settings = GridSettings {
        tile_width: -5,
        tile_height: -5,
        ..GridSettings::default()
    };
    assert_eq!(grid_dimensions(64, 64, &settings), (0, 0));
}

#[test]
fn test_zero_sized_image() {
    assert_eq!(grid_dimensions(0, 0, &GridSettings::default()), (0, 0));
}

// Every counted cell must fit; checked across a sweep of images and steps
#[test]
fn test_counted_cells_always_fit() {
    for image_w in [1_u32, 16, 31, 32, 33, 64, 100, 255] {
        for tile_w in [1_i32, 7, 16, 32, 64] {
            for sep in [0_i32, 1, 3, 8] {
                for offset in [0_i32, 1, 5, 16] {
                    let settings = GridSettings {
                        tile_width: tile_w,
                        separator_x: sep,
                        offset_x: offset,
                        ..GridSettings::default()
                    };
                    let cols = column_count(image_w, &settings);
                    if cols > 0 {
                        let last_start =
                            offset as i64 + i64::from(cols - 1) * (tile_w + sep) as i64;
                        assert!(
                            last_start + tile_w as i64 <= i64::from(image_w),
                            "cell overflows: image {image_w}, tile {tile_w}, sep {sep}, offset {offset}"
                        );
                    }
                }
            }
        }
    }
}
