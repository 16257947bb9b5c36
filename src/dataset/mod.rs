//! Dataset facade: configuration, label table, tile sources, sample retrieval
//!
//! Each sample retrieval is a pure function of the slide bytes, the label
//! row, and the configuration: no caching, no shared mutable state. The
//! calling framework is free to retrieve independent indices concurrently.

/// Tile sources: computed from a slide or read from pre-cut files
pub mod source;
/// Tabular label store
pub mod table;

pub use source::{AttentionRanking, TileSource};
pub use table::{SlideRecord, SlideTable};

use crate::io::configuration::{DEFAULT_NUM_TILES, DEFAULT_SEED, DEFAULT_TILE_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::mosaic::{
    AssemblyOptions, Label, LabelMode, assemble_mosaic, assemble_tile_stack, encode_label,
};
use crate::selection::SelectionMode;
use crate::transform::Transform;
use ndarray::{Array3, Array4};

/// Shape of the tensor handed to the downstream model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One stitched `(3, S*R, S*R)` canvas per slide
    #[default]
    Mosaic,
    /// A `(K, 3, S, S)` stack of independent tile tensors
    TileStack,
}

/// Configuration for tiling, selection, and assembly
///
/// Passed explicitly into every core entry point; there is no ambient
/// process-wide configuration.
#[derive(Debug, Clone, Copy)]
pub struct MosaicConfig {
    /// Tile edge length in pixels
    pub tile_size: usize,
    /// Number of tiles selected per slide
    pub num_tiles: usize,
    /// Ranking strategy for tile selection
    pub selection_mode: SelectionMode,
    /// Shuffle tile placement within the mosaic grid
    pub shuffle: bool,
    /// Base seed; each sample index derives its own placement seed
    pub seed: u64,
    /// Label encoding scheme
    pub label_mode: LabelMode,
    /// Output tensor shape
    pub output: OutputMode,
    /// Trim white margins before partitioning
    pub crop_whitespace: bool,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            num_tiles: DEFAULT_NUM_TILES,
            selection_mode: SelectionMode::default(),
            shuffle: false,
            seed: DEFAULT_SEED,
            label_mode: LabelMode::default(),
            output: OutputMode::default(),
            crop_whitespace: false,
        }
    }
}

impl MosaicConfig {
    /// Validate the configuration eagerly, before any sample is retrieved
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero tile size or tile count
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &"must be positive",
            ));
        }
        if self.num_tiles == 0 {
            return Err(invalid_parameter(
                "num_tiles",
                &self.num_tiles,
                &"must be positive",
            ));
        }
        Ok(())
    }
}

/// Model-ready image tensor, shaped per the configured output mode
#[derive(Debug, Clone, PartialEq)]
pub enum SampleImage {
    /// Stitched mosaic canvas, `(3, S*R, S*R)`
    Mosaic(Array3<f32>),
    /// Independent tile tensors, `(K, 3, S, S)`
    TileStack(Array4<f32>),
}

/// The unit returned to the consumer: an image tensor and its encoded label
///
/// Constructed fresh per retrieval, never cached, never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Normalized image tensor
    pub image: SampleImage,
    /// Encoded severity grade
    pub label: Label,
}

/// Deterministic slide-to-tensor dataset
///
/// Owns the read-only label table, the tile source, and the configuration;
/// sample retrieval holds no other state, so concurrent calls on distinct
/// indices are safe.
pub struct SlideDataset {
    table: SlideTable,
    source: TileSource,
    config: MosaicConfig,
    transform: Option<Box<dyn Transform>>,
}

impl SlideDataset {
    /// Create a dataset over a label table and a tile source
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when the configuration fails validation
    pub fn new(table: SlideTable, source: TileSource, config: MosaicConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            table,
            source,
            config,
            transform: None,
        })
    }

    /// Attach an augmentation transform
    ///
    /// In mosaic mode the same hook runs per tile during placement and once
    /// on the finished canvas; in tile-stack mode it runs per tile only.
    #[must_use]
    pub fn with_transform(mut self, transform: Box<dyn Transform>) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Number of retrievable samples
    pub fn sample_count(&self) -> usize {
        self.table.len()
    }

    /// Retrieve one sample by dataset index
    ///
    /// Deterministic for a fixed configuration and seed: the shuffle
    /// permutation is seeded from the base seed plus the index, so repeated
    /// calls reproduce byte-identical tensors.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an out-of-range index and propagates
    /// decode, lookup, and transform failures unchanged
    pub fn sample(&self, index: usize) -> Result<Sample> {
        let record = self
            .table
            .get(index)
            .ok_or_else(|| invalid_parameter("index", &index, &"out of range"))?;

        let tiles = self.source.load_tiles(&record.image_id, &self.config)?;
        let label = encode_label(record.grade, self.config.label_mode)?;
        let hook = self.transform.as_deref();

        let image = match self.config.output {
            OutputMode::Mosaic => {
                let options = AssemblyOptions {
                    shuffle: self.config.shuffle,
                    seed: self.config.seed.wrapping_add(index as u64),
                    per_tile: hook,
                    per_mosaic: hook,
                };
                SampleImage::Mosaic(assemble_mosaic(&tiles, self.config.tile_size, &options)?)
            }
            OutputMode::TileStack => SampleImage::TileStack(assemble_tile_stack(
                &tiles,
                self.config.tile_size,
                hook,
            )?),
        };

        Ok(Sample { image, label })
    }
}
