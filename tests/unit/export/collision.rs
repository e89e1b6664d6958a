//! Tests for collision resolution limits and set-folder naming

use std::collections::HashSet;
use tilesplit::SplitError;
use tilesplit::export::collision::{
    default_set_name, next_set_index, resolve_collision, sanitize_filename,
};

#[test]
fn test_same_base_twice_yields_numbered_second() {
    let mut used = HashSet::new();

    let first = resolve_collision("grass", &used, "png").unwrap();
    assert_eq!(first, "grass.png");
    used.insert(first);

    let second = resolve_collision("grass", &used, "png").unwrap();
    assert_eq!(second, "grass_1.png");
}

#[test]
fn test_resolution_never_returns_used_name() {
    let mut used = HashSet::new();
    for _ in 0..50 {
        let name = resolve_collision("tile", &used, "png").unwrap();
        assert!(!used.contains(&name));
        used.insert(name);
    }
    assert_eq!(used.len(), 50);
}

#[test]
fn test_exhaustion_reported_after_cap() {
    let mut used: HashSet<String> = HashSet::from(["x.png".to_string()]);
    for counter in 1..=10_000_u32 {
        used.insert(format!("x_{counter}.png"));
    }

    match resolve_collision("x", &used, "png") {
        Err(SplitError::CollisionExhausted { base_name, .. }) => assert_eq!(base_name, "x"),
        other => unreachable!("Expected CollisionExhausted, got {other:?}"),
    }
}

#[test]
fn test_next_set_index_scans_existing_folders() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(next_set_index(dir.path(), "tileset"), 0);

    std::fs::create_dir(dir.path().join("tileset_0")).unwrap();
    std::fs::create_dir(dir.path().join("tileset_7")).unwrap();
    std::fs::create_dir(dir.path().join("unrelated")).unwrap();
    // Plain files with matching names do not count
    std::fs::write(dir.path().join("tileset_99"), b"").unwrap();

    assert_eq!(next_set_index(dir.path(), "tileset"), 8);
    assert_eq!(default_set_name(dir.path(), "tileset"), "tileset_8");
}

#[test]
fn test_missing_folder_starts_at_zero() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert_eq!(next_set_index(&missing, "tileset"), 0);
}

#[test]
fn test_sanitized_label_stays_importable_as_filename() {
    assert_eq!(sanitize_filename("grass?top"), "grass_top");
    assert_eq!(sanitize_filename("  spaced  "), "  spaced");
    assert_eq!(sanitize_filename(""), "unnamed");
}
