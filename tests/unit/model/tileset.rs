//! Tests for tileset regeneration, label synchronization, and selection

use image::{Rgba, RgbaImage};
use tilesplit::model::tileset::{GridSettings, Tileset};

// 96x32 strip of three tiles: ends identical, middle distinct
fn strip_image() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(96, 32, Rgba([5, 5, 5, 255]));
    for x in 32..64 {
        for y in 0..32 {
            img.put_pixel(x, y, Rgba([250, 250, 250, 255]));
        }
    }
    img
}

#[test]
fn test_rename_updates_whole_group_and_nothing_else() {
    let mut tileset = Tileset::new(strip_image(), GridSettings::default());
    assert_eq!(tileset.tile_count(), 3);

    let renamed = tileset.rename_group(2, "edge");
    assert_eq!(renamed, vec![0, 2]);
    assert_eq!(tileset.tile(0).unwrap().label(), Some("edge"));
    assert_eq!(tileset.tile(1).unwrap().label(), None);
    assert_eq!(tileset.tile(2).unwrap().label(), Some("edge"));
}

#[test]
fn test_rename_to_empty_clears_whole_group() {
    let mut tileset = Tileset::new(strip_image(), GridSettings::default());
    tileset.rename_group(0, "edge");
    assert_eq!(tileset.labeled_count(), 2);

    tileset.rename_group(2, "");
    assert_eq!(tileset.labeled_count(), 0);
    assert!(tileset.exportable_tiles().is_empty());
}

#[test]
fn test_duplicates_of_includes_self_in_creation_order() {
    let tileset = Tileset::new(strip_image(), GridSettings::default());
    assert_eq!(tileset.duplicates_of(0), vec![0, 2]);
    assert_eq!(tileset.duplicates_of(1), vec![1]);
    assert_eq!(tileset.duplicate_count(2), 2);
    assert!(tileset.duplicates_of(99).is_empty());
}

#[test]
fn test_exportable_set_is_one_per_group() {
    let mut tileset = Tileset::new(strip_image(), GridSettings::default());
    tileset.rename_group(0, "edge");
    tileset.rename_group(1, "center");

    assert_eq!(tileset.labeled_count(), 3);
    assert_eq!(tileset.exportable_tiles(), vec![0, 1]);
}

#[test]
fn test_regeneration_rebuilds_groups_completely() {
    let mut tileset = Tileset::new(strip_image(), GridSettings::default());
    assert_eq!(tileset.unique_tile_count(), 2);

    // 16px tiles split each 32px cell; halves of identical cells still match
    tileset.set_grid_settings(GridSettings {
        tile_width: 16,
        tile_height: 16,
        ..GridSettings::default()
    });
    assert_eq!(tileset.tile_count(), 12);
    for (index, tile) in tileset.tiles().iter().enumerate() {
        assert!(tile.duplicate_group_id <= index);
    }
}

#[test]
fn test_select_at_pixel_rejects_separator_space() {
    let image = RgbaImage::from_pixel(68, 32, Rgba([1, 1, 1, 255]));
    let settings = GridSettings {
        separator_x: 4,
        ..GridSettings::default()
    };
    let mut tileset = Tileset::new(image, settings);
    assert_eq!(tileset.tile_count(), 2);

    assert_eq!(tileset.select_at_pixel(10, 10), Some(0));
    assert_eq!(tileset.selected_tile_index(), Some(0));

    // x in [32, 36) is separator; selection stays put
    assert_eq!(tileset.select_at_pixel(33, 10), None);
    assert_eq!(tileset.selected_tile_index(), Some(0));

    assert_eq!(tileset.select_at_pixel(40, 10), Some(1));
}

#[test]
fn test_selected_group_follows_duplicates() {
    let mut tileset = Tileset::new(strip_image(), GridSettings::default());
    tileset.set_selection(Some(2));
    assert_eq!(tileset.selected_group_indices(), vec![0, 2]);

    tileset.set_selection(None);
    assert!(tileset.selected_group_indices().is_empty());
}

#[test]
fn test_out_of_range_selection_is_ignored() {
    let mut tileset = Tileset::new(strip_image(), GridSettings::default());
    tileset.set_selection(Some(17));
    assert_eq!(tileset.selected_tile_index(), None);
}

#[test]
fn test_replace_image_regenerates() {
    let mut tileset = Tileset::new(strip_image(), GridSettings::default());
    assert_eq!(tileset.tile_count(), 3);

    tileset.replace_image(RgbaImage::from_pixel(32, 32, Rgba([9, 9, 9, 255])));
    assert_eq!(tileset.tile_count(), 1);
    assert_eq!(tileset.unique_tile_count(), 1);
}
