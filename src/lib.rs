//! Tile selection and mosaic assembly for whole-slide pathology images
//!
//! The system partitions a large slide image into fixed-size square tiles,
//! ranks them by informativeness heuristics, selects the top-K, and composes
//! them into a single square mosaic (or a stack of per-tile tensors) ready
//! for a downstream classifier, together with an encoded severity label.

#![deny(unsafe_code)]

/// Dataset facade: configuration, label table, tile sources, sample retrieval
pub mod dataset;
/// Input/output operations and error handling
pub mod io;
/// Mosaic composition, normalization, and label encoding
pub mod mosaic;
/// Informativeness scoring heuristics for ranking tiles
pub mod scoring;
/// Top-K tile selection with blank padding
pub mod selection;
/// Image padding, whitespace cropping, and grid partitioning
pub mod tiling;
/// Augmentation transform hooks applied per tile or per mosaic
pub mod transform;

pub use io::error::{MosaicError, Result};
