//! Error types for segmentation and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all splitter operations
#[derive(Debug)]
pub enum SplitError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode a tile to disk
    ImageExport {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to encode a PNG tile with metadata chunks
    PngEncode {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying PNG encoding error
        source: png::EncodingError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Source or output format is not in the supported set
    UnsupportedFormat {
        /// The offending file extension
        extension: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Collision resolution exceeded its attempt cap
    ///
    /// Indicates a pathological naming scenario: thousands of export
    /// candidates sharing one base name.
    CollisionExhausted {
        /// Base name that could not be made unique
        base_name: String,
        /// Number of suffixes tried before giving up
        attempts: u32,
    },

    /// Label assignment file could not be read or parsed
    LabelFile {
        /// Path to the label file
        path: PathBuf,
        /// Description of the failure
        reason: String,
    },

    /// Export was requested but no tile is labeled
    NoExportableTiles,
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export tile to '{}': {source}",
                    path.display()
                )
            }
            Self::PngEncode { path, source } => {
                write!(f, "Failed to encode PNG '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::UnsupportedFormat { extension } => {
                write!(f, "Unsupported image format '{extension}'")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CollisionExhausted {
                base_name,
                attempts,
            } => {
                write!(
                    f,
                    "Could not resolve filename collision for '{base_name}' after {attempts} attempts"
                )
            }
            Self::LabelFile { path, reason } => {
                write!(
                    f,
                    "Failed to read label file '{}': {reason}",
                    path.display()
                )
            }
            Self::NoExportableTiles => {
                write!(f, "No labeled tiles to export")
            }
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::PngEncode { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for splitter results
pub type Result<T> = std::result::Result<T, SplitError>;

impl From<image::ImageError> for SplitError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SplitError {
    SplitError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
