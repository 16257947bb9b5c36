//! Command-line interface for batch mosaic preview generation
//!
//! Runs the partition, score, select, and compose pipeline over one slide
//! image or a directory of them, writing a PNG preview of each assembled
//! mosaic next to its input.

use crate::io::configuration::{DEFAULT_NUM_TILES, DEFAULT_SEED, DEFAULT_TILE_SIZE, OUTPUT_SUFFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{decode_image, export_canvas_png};
use crate::io::progress::ProgressManager;
use crate::mosaic::{compose_canvas, placement_order};
use crate::selection::{SelectionMode, select_tiles};
use crate::tiling::{crop_whitespace, partition};
use clap::Parser;
use std::path::{Path, PathBuf};

/// File extensions accepted as slide images
const SLIDE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "tiff"];

#[derive(Parser)]
#[command(name = "slidemosaic")]
#[command(
    author,
    version,
    about = "Assemble tile mosaics from whole-slide pathology images"
)]
/// Command-line arguments for the mosaic preview tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input slide image or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Tile edge length in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: usize,

    /// Number of tiles selected per slide
    #[arg(short, long, default_value_t = DEFAULT_NUM_TILES)]
    pub num_tiles: usize,

    /// Re-rank the coverage pool with the blue-ratio stain heuristic
    #[arg(short, long)]
    pub blue_ratio: bool,

    /// Shuffle tile placement within the mosaic grid
    #[arg(long)]
    pub shuffle: bool,

    /// Random seed for reproducible shuffling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Trim white margins before partitioning
    #[arg(short, long)]
    pub crop: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Selection mode implied by the flags
    pub const fn selection_mode(&self) -> SelectionMode {
        if self.blue_ratio {
            SelectionMode::CoverageThenBlueRatio
        } else {
            SelectionMode::CoverageOnly
        }
    }
}

/// Orchestrates batch processing of slide images with progress tracking
pub struct MosaicProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, decoding, assembly, or export
    /// fails; configuration is validated before any file is touched
    pub fn process(&mut self) -> Result<()> {
        if self.cli.tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &self.cli.tile_size,
                &"must be positive",
            ));
        }
        if self.cli.num_tiles == 0 {
            return Err(invalid_parameter(
                "num_tiles",
                &self.cli.num_tiles,
                &"must be positive",
            ));
        }

        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_slide_image(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a slide image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if is_slide_image(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a slide image or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let image = decode_image(input_path)?;
        let image = if self.cli.crop {
            crop_whitespace(image.view())
        } else {
            image
        };

        let tiles = partition(image.view(), self.cli.tile_size);
        let selected = select_tiles(
            tiles,
            self.cli.num_tiles,
            self.cli.tile_size,
            self.cli.selection_mode(),
        );

        let order = placement_order(selected.len(), self.cli.shuffle, self.cli.seed);
        let canvas = compose_canvas(&selected, self.cli.tile_size, &order, None)?;

        let output_path = Self::get_output_path(input_path);
        export_canvas_png(canvas.view(), &output_path)?;

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());
        input_path.with_file_name(output_name)
    }
}

fn is_slide_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| SLIDE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
