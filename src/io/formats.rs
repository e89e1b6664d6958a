//! Supported image formats and their capabilities

use crate::io::error::{Result, SplitError};
use image::ImageFormat;

/// Image formats the splitter reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG
    Jpg,
    /// Graphics Interchange Format
    Gif,
    /// Windows Bitmap
    Bmp,
    /// WebP
    WebP,
}

impl OutputFormat {
    /// Parse a file extension, with or without a leading dot
    ///
    /// `jpeg` normalizes to `jpg`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for extensions outside the supported set
    pub fn from_extension(extension: &str) -> Result<Self> {
        let ext = extension.trim_start_matches('.').to_lowercase();
        match ext.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "gif" => Ok(Self::Gif),
            "bmp" => Ok(Self::Bmp),
            "webp" => Ok(Self::WebP),
            _ => Err(SplitError::UnsupportedFormat { extension: ext }),
        }
    }

    /// Canonical file extension, without dot
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::WebP => "webp",
        }
    }

    /// Whether the format can carry embedded text metadata
    pub const fn supports_metadata(self) -> bool {
        matches!(self, Self::Png | Self::WebP)
    }

    /// The corresponding `image` crate format identifier
    pub const fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpg => ImageFormat::Jpeg,
            Self::Gif => ImageFormat::Gif,
            Self::Bmp => ImageFormat::Bmp,
            Self::WebP => ImageFormat::WebP,
        }
    }
}
