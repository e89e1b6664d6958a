//! Source image loading

use crate::io::error::{Result, SplitError};
use crate::io::formats::OutputFormat;
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// A decoded source image with its origin and on-disk format
#[derive(Debug)]
pub struct LoadedImage {
    /// Pixels, canonicalized to 8-bit RGBA
    pub pixels: RgbaImage,
    /// Format implied by the file extension
    pub format: OutputFormat,
    /// Path the image was loaded from
    pub path: PathBuf,
}

/// Decode a source image from disk
///
/// The extension is checked against the supported set before decoding, and
/// the result is always converted to RGBA8 so that downstream hashing sees
/// one canonical channel layout no matter the decode path.
///
/// # Errors
///
/// Returns `UnsupportedFormat` for an unknown extension or `ImageLoad`
/// when decoding fails
pub fn load_source_image(path: &Path) -> Result<LoadedImage> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let format = OutputFormat::from_extension(extension)?;

    let decoded = image::open(path).map_err(|e| SplitError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(LoadedImage {
        pixels: decoded.to_rgba8(),
        format,
        path: path.to_path_buf(),
    })
}
