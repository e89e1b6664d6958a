//! Export planning and the write pipeline
//!
//! Selects the exportable set (labeled, one representative per duplicate
//! group), resolves collision-safe filenames, writes tiles sequentially,
//! and appends the run to the destination folder's provenance sidecar.
//! Per-tile write failures are aggregated, never fatal; only a failure to
//! create the destination folder aborts before any write.

use crate::export::collision;
use crate::export::metadata;
use crate::export::sidecar::{SidecarRecord, SidecarStore};
use crate::io::configuration::{SET_NAME_PREFIX, SIDECAR_FILENAME};
use crate::io::error::{Result, SplitError};
use crate::io::formats::OutputFormat;
use crate::model::tileset::Tileset;
use chrono::Utc;
use image::{DynamicImage, RgbaImage};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Destination for a single exportable tile
#[derive(Debug, Clone)]
pub struct PlannedTile {
    /// Creation index of the tile in its tileset
    pub tile_index: usize,
    /// Collision-resolved filename
    pub filename: String,
    /// Full destination path
    pub path: PathBuf,
}

/// A resolved export plan, produced without touching the filesystem
#[derive(Debug)]
pub struct ExportPlan {
    /// Folder the tiles will be written into
    pub set_folder: PathBuf,
    /// Output format for every tile in the run
    pub format: OutputFormat,
    /// Planned tiles in creation order
    pub tiles: Vec<PlannedTile>,
}

/// One tile that could not be written
#[derive(Debug)]
pub struct ExportFailure {
    /// Filename the write was attempted under
    pub filename: String,
    /// Description of what went wrong
    pub reason: String,
}

/// Aggregate outcome of an export run
#[derive(Debug)]
pub struct ExportReport {
    /// Folder the tiles were written into
    pub set_folder: PathBuf,
    /// Filenames written successfully, in export order
    pub exported: Vec<String>,
    /// Per-file failures, empty on a clean run
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    /// Whether every planned tile was written
    pub const fn success(&self) -> bool {
        self.failures.is_empty()
    }

    /// One-line human-readable summary of the run
    pub fn summary(&self) -> String {
        if self.success() {
            format!(
                "Exported {} tiles to {}",
                self.exported.len(),
                self.set_folder.display()
            )
        } else {
            format!(
                "Exported {} tiles to {} with {} errors",
                self.exported.len(),
                self.set_folder.display(),
                self.failures.len()
            )
        }
    }
}

/// External file-writing capability for a single tile
///
/// The exporter hands over an independent pixel buffer, a destination, and
/// the text metadata the format should carry. Implementations that cannot
/// embed text silently omit it.
pub trait TileWriter {
    /// Persist one tile
    ///
    /// # Errors
    ///
    /// Returns an error when the tile cannot be encoded or written
    fn write_tile(
        &self,
        pixels: &RgbaImage,
        path: &Path,
        format: OutputFormat,
        text_metadata: &[(String, String)],
    ) -> Result<()>;
}

/// Default writer backed by the `png` and `image` encoders
///
/// PNG output carries tEXt chunks; other formats drop the metadata since
/// the encoders expose no text fields for them.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageWriter;

impl TileWriter for ImageWriter {
    fn write_tile(
        &self,
        pixels: &RgbaImage,
        path: &Path,
        format: OutputFormat,
        text_metadata: &[(String, String)],
    ) -> Result<()> {
        match format {
            OutputFormat::Png => write_png(pixels, path, text_metadata),
            OutputFormat::Jpg => {
                // JPEG has no alpha channel
                let rgb = DynamicImage::ImageRgba8(pixels.clone()).to_rgb8();
                rgb.save_with_format(path, format.image_format())
                    .map_err(|e| SplitError::ImageExport {
                        path: path.to_path_buf(),
                        source: e,
                    })
            }
            _ => pixels
                .save_with_format(path, format.image_format())
                .map_err(|e| SplitError::ImageExport {
                    path: path.to_path_buf(),
                    source: e,
                }),
        }
    }
}

fn write_png(pixels: &RgbaImage, path: &Path, text_metadata: &[(String, String)]) -> Result<()> {
    let file = File::create(path).map_err(|e| SplitError::FileSystem {
        path: path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let mut encoder = png::Encoder::new(BufWriter::new(file), pixels.width(), pixels.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let as_encode_error = |e: png::EncodingError| SplitError::PngEncode {
        path: path.to_path_buf(),
        source: e,
    };

    for (keyword, value) in text_metadata {
        encoder
            .add_text_chunk(keyword.clone(), value.clone())
            .map_err(as_encode_error)?;
    }

    let mut writer = encoder.write_header().map_err(as_encode_error)?;
    writer
        .write_image_data(pixels.as_raw())
        .map_err(as_encode_error)?;
    writer.finish().map_err(as_encode_error)
}

/// Runs the export pipeline against a pluggable tile writer
#[derive(Debug, Default)]
pub struct TileExporter<W: TileWriter = ImageWriter> {
    writer: W,
}

impl TileExporter<ImageWriter> {
    /// Exporter with the default image-encoder writer
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: TileWriter> TileExporter<W> {
    /// Exporter with a custom writer
    pub const fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Resolve the export plan without writing anything
    ///
    /// The plan walks exportable tiles in creation order, sanitizes each
    /// label into a base name, and resolves collisions against the names
    /// already planned for this run.
    ///
    /// # Errors
    ///
    /// Returns `NoExportableTiles` when no tile is labeled, or
    /// `CollisionExhausted` when a name cannot be made unique
    pub fn plan(
        &self,
        tileset: &Tileset,
        output_folder: &Path,
        format: Option<OutputFormat>,
    ) -> Result<ExportPlan> {
        let format = resolve_format(tileset, format);
        let set_folder = resolve_set_folder(tileset, output_folder);

        let exportable = tileset.exportable_tiles();
        if exportable.is_empty() {
            return Err(SplitError::NoExportableTiles);
        }

        let mut used_names: HashSet<String> = HashSet::new();
        let mut planned = Vec::with_capacity(exportable.len());

        for tile_index in exportable {
            let Some(tile) = tileset.tile(tile_index) else {
                continue;
            };
            let Some(label) = tile.label() else {
                continue;
            };

            let base_name = collision::sanitize_filename(label);
            let filename =
                collision::resolve_collision(&base_name, &used_names, format.extension())?;
            used_names.insert(filename.clone());

            let path = set_folder.join(&filename);
            planned.push(PlannedTile {
                tile_index,
                filename,
                path,
            });
        }

        Ok(ExportPlan {
            set_folder,
            format,
            tiles: planned,
        })
    }

    /// Export every exportable tile and update the provenance sidecar
    ///
    /// # Errors
    ///
    /// Returns an error when there is nothing to export, a filename cannot
    /// be resolved, or the destination folder cannot be created. Individual
    /// write failures do not fail the call; they are aggregated in the
    /// report and the sidecar records only the files actually written.
    pub fn export(
        &self,
        tileset: &Tileset,
        output_folder: &Path,
        format: Option<OutputFormat>,
    ) -> Result<ExportReport> {
        self.export_with(tileset, output_folder, format, |_| {})
    }

    /// Export with a per-tile observer, called after each attempted write
    ///
    /// # Errors
    ///
    /// Same conditions as [`TileExporter::export`]
    pub fn export_with<F>(
        &self,
        tileset: &Tileset,
        output_folder: &Path,
        format: Option<OutputFormat>,
        mut on_tile: F,
    ) -> Result<ExportReport>
    where
        F: FnMut(&PlannedTile),
    {
        let plan = self.plan(tileset, output_folder, format)?;

        std::fs::create_dir_all(&plan.set_folder).map_err(|e| SplitError::FileSystem {
            path: plan.set_folder.clone(),
            operation: "create directory",
            source: e,
        })?;

        let text_metadata = if plan.format.supports_metadata() {
            metadata::text_fields(tileset.license(), Utc::now())
        } else {
            Vec::new()
        };

        let mut report = ExportReport {
            set_folder: plan.set_folder.clone(),
            exported: Vec::new(),
            failures: Vec::new(),
        };

        for planned in &plan.tiles {
            let Some(tile) = tileset.tile(planned.tile_index) else {
                continue;
            };

            match self
                .writer
                .write_tile(tile.pixels(), &planned.path, plan.format, &text_metadata)
            {
                Ok(()) => report.exported.push(planned.filename.clone()),
                Err(e) => report.failures.push(ExportFailure {
                    filename: planned.filename.clone(),
                    reason: e.to_string(),
                }),
            }
            on_tile(planned);
        }

        // Record the run regardless of individual failures, but only the
        // files that actually landed.
        let mut store = SidecarStore::load_or_default(&plan.set_folder);
        store.append(SidecarRecord::new(
            tileset.source_path(),
            tileset.license(),
            report.exported.clone(),
        ));
        if let Err(e) = store.save(&plan.set_folder) {
            report.failures.push(ExportFailure {
                filename: SIDECAR_FILENAME.to_string(),
                reason: e.to_string(),
            });
        }

        Ok(report)
    }
}

fn resolve_format(tileset: &Tileset, format: Option<OutputFormat>) -> OutputFormat {
    format
        .or_else(|| tileset.source_format())
        .unwrap_or(OutputFormat::Png)
}

fn resolve_set_folder(tileset: &Tileset, output_folder: &Path) -> PathBuf {
    if tileset.set_name.is_empty() {
        output_folder.join(collision::default_set_name(output_folder, SET_NAME_PREFIX))
    } else {
        output_folder.join(&tileset.set_name)
    }
}
