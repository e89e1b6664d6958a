//! Tests for tile extraction, digesting, and duplicate grouping

use image::{Rgba, RgbaImage};
use tilesplit::model::tileset::GridSettings;
use tilesplit::segment::layout;
use tilesplit::segment::segmenter::segment;

fn checkerboard(width: u32, height: u32, cell: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dark = ((x / cell) + (y / cell)) % 2 == 0;
        *pixel = if dark {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        };
    }
    img
}

#[test]
fn test_tile_count_matches_layout() {
    let image = checkerboard(96, 64, 8);
    let settings = GridSettings::default();
    let (cols, rows) = layout::grid_dimensions(96, 64, &settings);

    let segmentation = segment(&image, &settings);
    assert_eq!(segmentation.tiles.len(), (cols * rows) as usize);
}

#[test]
fn test_extracted_pixels_match_source_region() {
    let image = checkerboard(64, 64, 32);
    let segmentation = segment(&image, &GridSettings::default());

    let tile = segmentation.tiles.first().unwrap();
    assert_eq!(tile.pixels().get_pixel(0, 0), image.get_pixel(0, 0));
    assert_eq!(tile.pixels().get_pixel(31, 31), image.get_pixel(31, 31));
}

#[test]
fn test_checkerboard_collapses_to_two_groups() {
    // 32px cells and 32px tiles: every tile is either all-dark or all-light
    let image = checkerboard(128, 128, 32);
    let segmentation = segment(&image, &GridSettings::default());

    assert_eq!(segmentation.tiles.len(), 16);
    assert_eq!(segmentation.duplicate_groups.len(), 2);

    // Groups anchor at the two first-seen tiles
    let ids: Vec<usize> = segmentation
        .tiles
        .iter()
        .map(|t| t.duplicate_group_id)
        .collect();
    assert_eq!(ids.first(), Some(&0));
    assert_eq!(ids.get(1), Some(&1));
    assert!(ids.iter().all(|&id| id == 0 || id == 1));
}

#[test]
fn test_separator_shifts_origins() {
    let image = checkerboard(100, 32, 4);
    let settings = GridSettings {
        separator_x: 4,
        offset_x: 2,
        ..GridSettings::default()
    };
    let segmentation = segment(&image, &settings);

    let origins: Vec<u32> = segmentation.tiles.iter().map(|t| t.pixel_x).collect();
    assert_eq!(origins, vec![2, 38]);
}

#[test]
fn test_digest_differs_between_distinct_tiles() {
    let image = checkerboard(64, 32, 32);
    let segmentation = segment(&image, &GridSettings::default());

    let first = segmentation.tiles.first().unwrap();
    let second = segmentation.tiles.get(1).unwrap();
    assert_ne!(first.digest(), second.digest());
    assert_eq!(first.duplicate_group_id, 0);
    assert_eq!(second.duplicate_group_id, 1);
}

#[test]
fn test_degenerate_settings_produce_empty_segmentation() {
    let image = checkerboard(64, 64, 8);
    let settings = GridSettings {
        tile_width: 0,
        ..GridSettings::default()
    };
    let segmentation = segment(&image, &settings);
    assert!(segmentation.tiles.is_empty());
    assert!(segmentation.duplicate_groups.is_empty());
}
