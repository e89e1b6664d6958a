//! Filename collision resolution and naming hygiene

use crate::io::configuration::{FALLBACK_FILENAME, MAX_COLLISION_ATTEMPTS};
use crate::io::error::{Result, SplitError};
use std::collections::HashSet;
use std::path::Path;

const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

// Reserved device names on Windows; a tile labeled "con" must not try to
// become con.png.
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Resolve a desired base name against the names already used in this run
///
/// Returns `base.ext` when unused, otherwise `base_1.ext`, `base_2.ext`, …
/// The suffix counter is capped; hitting the cap means thousands of export
/// candidates share one base name, which is reported rather than looped on.
///
/// # Errors
///
/// Returns `CollisionExhausted` when no unused name is found within the cap
pub fn resolve_collision(
    base_name: &str,
    used_names: &HashSet<String>,
    extension: &str,
) -> Result<String> {
    let candidate = format!("{base_name}.{extension}");
    if !used_names.contains(&candidate) {
        return Ok(candidate);
    }

    for counter in 1..=MAX_COLLISION_ATTEMPTS {
        let numbered = format!("{base_name}_{counter}.{extension}");
        if !used_names.contains(&numbered) {
            return Ok(numbered);
        }
    }

    Err(SplitError::CollisionExhausted {
        base_name: base_name.to_string(),
        attempts: MAX_COLLISION_ATTEMPTS,
    })
}

/// Whether a proposed filename (without extension) is safe on every platform
pub fn is_valid_filename(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if name.contains(INVALID_CHARS) {
        return false;
    }
    if RESERVED_NAMES.contains(&name.to_uppercase().as_str()) {
        return false;
    }
    if name.ends_with(' ') || name.ends_with('.') {
        return false;
    }
    true
}

/// Replace invalid filename characters and trim trailing dots and spaces
///
/// A name that sanitizes away entirely becomes the fallback name.
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '_' } else { c })
        .collect();

    let trimmed = replaced.trim_end_matches([' ', '.']);
    if trimmed.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Next free index for `prefix_N` sub-folders of an output folder
///
/// Unreadable directories count as empty; the scan never fails.
pub fn next_set_index(output_folder: &Path, prefix: &str) -> u32 {
    let Ok(entries) = std::fs::read_dir(output_folder) else {
        return 0;
    };

    let mut max_index: Option<u32> = None;
    for entry in entries.flatten() {
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(suffix) = name.strip_prefix(prefix).and_then(|s| s.strip_prefix('_')) {
            if let Ok(index) = suffix.parse::<u32>() {
                max_index = Some(max_index.map_or(index, |m| m.max(index)));
            }
        }
    }

    max_index.map_or(0, |m| m + 1)
}

/// Default set-folder name such as `tileset_0`
pub fn default_set_name(output_folder: &Path, prefix: &str) -> String {
    format!("{prefix}_{}", next_set_index(output_folder, prefix))
}
