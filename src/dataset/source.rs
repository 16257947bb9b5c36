//! Tile sources: compute tiles from a whole slide, or read pre-cut tiles
//!
//! The assembler consumes whichever variant is configured without knowing
//! which: both yield an ordered tile list of at most `num_tiles` entries,
//! padded to exactly `num_tiles` by the caller's conventions.

use super::MosaicConfig;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::decode_image;
use crate::selection::select_tiles;
use crate::tiling::{Tile, blank_tile, crop_whitespace, partition};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Slide image file extensions probed in order
const SLIDE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "tiff", "tif"];

/// Precomputed per-tile attention scores for one cross-validation fold
///
/// When tiles were pre-extracted to individual files, an attention model may
/// have already ranked them; that ranking replaces the partition, score, and
/// select pipeline entirely.
#[derive(Debug, Default)]
pub struct AttentionRanking {
    fold: usize,
    by_slide: HashMap<String, Vec<(String, f64)>>,
}

impl AttentionRanking {
    /// Load a ranking from a CSV file with `image_id`, `file_name`, and
    /// `attention_fold_{fold}` columns
    ///
    /// # Errors
    ///
    /// Returns `TableParse` for unreadable or malformed CSV, and
    /// `InvalidParameter` when required columns are missing or a score is
    /// not numeric
    pub fn from_csv_path(path: &Path, fold: usize) -> Result<Self> {
        use crate::dataset::table::find_column;
        use crate::io::error::WithPath;

        let mut reader = csv::Reader::from_path(path).with_path(path)?;
        let headers = reader.headers().with_path(path)?.clone();
        let id_col = find_column(&headers, "image_id")?;
        let file_col = find_column(&headers, "file_name")?;
        let score_name = format!("attention_fold_{fold}");
        let score_col = headers
            .iter()
            .position(|h| h.trim() == score_name)
            .ok_or_else(|| {
                invalid_parameter("fold", &fold, &"no attention column for this fold")
            })?;

        let mut by_slide: HashMap<String, Vec<(String, f64)>> = HashMap::new();
        for row in reader.records() {
            let row = row.with_path(path)?;
            let image_id = row.get(id_col).unwrap_or_default().to_string();
            let file_name = row.get(file_col).unwrap_or_default().to_string();
            let score_text = row.get(score_col).unwrap_or_default();
            let score = score_text
                .trim()
                .parse::<f64>()
                .map_err(|e| invalid_parameter("attention", &score_text, &e))?;
            by_slide.entry(image_id).or_default().push((file_name, score));
        }

        Ok(Self { fold, by_slide })
    }

    /// Fold whose attention column this ranking was built from
    pub const fn fold(&self) -> usize {
        self.fold
    }

    /// Top-`count` tile filenames for a slide, highest attention first
    ///
    /// Ranking files carry a slide-id prefix; only the final `_`-separated
    /// segment names the actual tile file on disk.
    ///
    /// # Errors
    ///
    /// Returns `RankingNotFound` when the slide has no ranked tiles
    pub fn ranked_tile_filenames(&self, image_id: &str, count: usize) -> Result<Vec<String>> {
        let entries = self
            .by_slide
            .get(image_id)
            .ok_or_else(|| MosaicError::RankingNotFound {
                image_id: image_id.to_string(),
                fold: self.fold,
            })?;

        let mut ranked: Vec<&(String, f64)> = entries.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        Ok(ranked
            .iter()
            .take(count)
            .map(|(name, _)| name.rsplit('_').next().unwrap_or(name).to_string())
            .collect())
    }
}

/// Where a slide's tiles come from
pub enum TileSource {
    /// Decode the whole slide image, then partition, score, and select
    WholeImage {
        /// Directory holding `<image_id>.<ext>` slide images
        image_dir: PathBuf,
    },
    /// Read pre-cut tile files from a per-slide directory
    PrecomputedTiles {
        /// Directory holding one `<image_id>/` subdirectory per slide
        tile_dir: PathBuf,
        /// Optional attention ranking; index order `0.png..` otherwise
        ranking: Option<AttentionRanking>,
    },
}

impl TileSource {
    /// Produce the ordered tile list for one slide
    ///
    /// Always returns exactly `config.num_tiles` tiles; precomputed sets
    /// shorter than that are right-padded with blanks, mirroring the
    /// selector's padding rule.
    ///
    /// # Errors
    ///
    /// Propagates decode failures unchanged; a missing or corrupt slide is a
    /// hard failure for that sample, never silently skipped
    pub fn load_tiles(&self, image_id: &str, config: &MosaicConfig) -> Result<Vec<Tile>> {
        match self {
            Self::WholeImage { image_dir } => {
                let slide_path = locate_slide(image_dir, image_id)?;
                let image = decode_image(&slide_path)?;
                let image = if config.crop_whitespace {
                    crop_whitespace(image.view())
                } else {
                    image
                };
                let tiles = partition(image.view(), config.tile_size);
                Ok(select_tiles(
                    tiles,
                    config.num_tiles,
                    config.tile_size,
                    config.selection_mode,
                ))
            }
            Self::PrecomputedTiles { tile_dir, ranking } => {
                let file_names = match ranking {
                    Some(r) => r.ranked_tile_filenames(image_id, config.num_tiles)?,
                    None => (0..config.num_tiles).map(|i| format!("{i}.png")).collect(),
                };

                let slide_dir = tile_dir.join(image_id);
                let mut tiles = Vec::with_capacity(config.num_tiles);
                for file_name in &file_names {
                    let tile = decode_image(slide_dir.join(file_name))?;
                    let dim = tile.dim();
                    if dim != (config.tile_size, config.tile_size, 3) {
                        return Err(invalid_parameter(
                            "tile_size",
                            &config.tile_size,
                            &format!("pre-cut tile '{file_name}' has shape {dim:?}"),
                        ));
                    }
                    tiles.push(tile);
                }
                while tiles.len() < config.num_tiles {
                    tiles.push(blank_tile(config.tile_size));
                }
                Ok(tiles)
            }
        }
    }
}

fn locate_slide(image_dir: &Path, image_id: &str) -> Result<PathBuf> {
    for ext in SLIDE_EXTENSIONS {
        let candidate = image_dir.join(format!("{image_id}.{ext}"));
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(MosaicError::FileSystem {
        path: image_dir.join(image_id),
        operation: "locate slide image",
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no slide file found"),
    })
}
