//! Command-line interface for splitting a tileset image into labeled tiles

use crate::export::planner::TileExporter;
use crate::io::configuration::{DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH};
use crate::io::error::Result;
use crate::io::formats::OutputFormat;
use crate::io::image::load_source_image;
use crate::io::labels;
use crate::io::progress::ExportProgress;
use crate::model::license::LicenseInfo;
use crate::model::tileset::{GridSettings, Tileset};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilesplit")]
#[command(
    author,
    version,
    about = "Split a tileset image into deduplicated, labeled tiles"
)]
/// Command-line arguments for the tile splitting tool
pub struct Cli {
    /// Source tileset image
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Tile width in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: i32,

    /// Tile height in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: i32,

    /// Horizontal gap between tiles
    #[arg(long, default_value_t = 0)]
    pub sep_x: i32,

    /// Vertical gap between tiles
    #[arg(long, default_value_t = 0)]
    pub sep_y: i32,

    /// Horizontal offset of the first tile
    #[arg(long, default_value_t = 0)]
    pub offset_x: i32,

    /// Vertical offset of the first tile
    #[arg(long, default_value_t = 0)]
    pub offset_y: i32,

    /// JSON file assigning labels to grid cells
    #[arg(short, long)]
    pub labels: Option<PathBuf>,

    /// Output folder for the exported set
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Name of the set folder (defaults to the next free tileset_N)
    #[arg(short, long)]
    pub set_name: Option<String>,

    /// Output format (defaults to the source format)
    #[arg(short, long)]
    pub format: Option<String>,

    /// License text of the source artwork
    #[arg(long)]
    pub license: Option<String>,

    /// URL of the license terms
    #[arg(long)]
    pub license_url: Option<String>,

    /// Original author of the source artwork
    #[arg(long)]
    pub author: Option<String>,

    /// URL the source artwork was obtained from
    #[arg(long)]
    pub source_url: Option<String>,

    /// Show the export plan without writing files
    #[arg(short, long)]
    pub dry_run: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Grid settings assembled from the grid arguments
    pub const fn grid_settings(&self) -> GridSettings {
        GridSettings {
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            separator_x: self.sep_x,
            separator_y: self.sep_y,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
        }
    }

    /// License info assembled from the attribution arguments
    pub fn license_info(&self) -> LicenseInfo {
        LicenseInfo::new(
            self.license.as_deref().unwrap_or_default(),
            self.license_url.as_deref().unwrap_or_default(),
            self.author.as_deref().unwrap_or_default(),
            self.source_url.as_deref().unwrap_or_default(),
        )
    }
}

/// Orchestrates one load-label-export run from CLI arguments
pub struct ExportRunner {
    cli: Cli,
}

impl ExportRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the pipeline: load, segment, label, then plan or export
    ///
    /// # Errors
    ///
    /// Returns an error when loading, label parsing, planning, or the
    /// destination folder fails; per-tile write failures are reported in
    /// the summary instead
    // Allow prints for direct user feedback, as this drives the terminal UI
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    pub fn run(&self) -> Result<()> {
        let format = match &self.cli.format {
            Some(ext) => Some(OutputFormat::from_extension(ext)?),
            None => None,
        };

        let loaded = load_source_image(&self.cli.image)?;
        let mut tileset = Tileset::new(loaded.pixels, self.cli.grid_settings());
        tileset.set_source(loaded.path, loaded.format);
        if let Some(name) = &self.cli.set_name {
            tileset.set_name = name.clone();
        }
        tileset.set_license(self.cli.license_info());

        if !self.cli.quiet {
            println!(
                "{} tiles in a {}x{} grid, {} unique",
                tileset.tile_count(),
                tileset.grid_columns(),
                tileset.grid_rows(),
                tileset.unique_tile_count()
            );
        }

        if let Some(labels_path) = &self.cli.labels {
            let entries = labels::load_labels(labels_path)?;
            let (applied, skipped) = labels::apply_labels(&mut tileset, &entries);
            if !self.cli.quiet {
                println!("Applied {applied} label entries ({skipped} outside the grid)");
            }
        }

        if tileset.license().has_warnings() && !self.cli.quiet {
            eprintln!("{}", tileset.license().warning_message());
        }

        let exporter = TileExporter::new();

        if self.cli.dry_run {
            let plan = exporter.plan(&tileset, &self.cli.output, format)?;
            println!("Would export {} tiles:", plan.tiles.len());
            for planned in &plan.tiles {
                println!("  {}", planned.path.display());
            }
            return Ok(());
        }

        let progress = (!self.cli.quiet)
            .then(|| ExportProgress::new(tileset.exportable_tiles().len()));

        let report = exporter.export_with(&tileset, &self.cli.output, format, |planned| {
            if let Some(p) = &progress {
                p.tick(&planned.filename);
            }
        })?;

        if let Some(p) = &progress {
            p.finish();
        }

        println!("{}", report.summary());
        for failure in &report.failures {
            eprintln!("  {}: {}", failure.filename, failure.reason);
        }

        Ok(())
    }
}
