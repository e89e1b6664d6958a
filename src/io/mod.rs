//! Input/output operations, CLI orchestration, and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Compile-time constants controlling defaults and safety limits
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Supported image formats and their capabilities
pub mod formats;
/// Source image loading
pub mod image;
/// Label assignment files
pub mod labels;
/// Progress display for export runs
pub mod progress;
