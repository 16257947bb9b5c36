//! Image padding, whitespace cropping, and grid partitioning
//!
//! Slides arrive as large RGB arrays of arbitrary dimensions. This module
//! pads them up to tile-size multiples with the white background value and
//! cuts them into a row-major grid of fixed-size square tiles.

/// Whitespace margin removal for scanned slides
pub mod crop;
/// Padding and row-major tile extraction
pub mod partition;

pub use crop::crop_whitespace;
pub use partition::{pad_to_tile_multiple, partition};

use crate::io::configuration::{BLANK_VALUE, CHANNELS};
use ndarray::Array3;

/// A square RGB sub-image of shape `(tile_size, tile_size, 3)`
///
/// Tiles are value objects: nothing identifies them beyond their pixels and
/// their position in the sequence they were cut into.
pub type Tile = Array3<u8>;

/// Create an all-white blank tile of the given edge length
pub fn blank_tile(tile_size: usize) -> Tile {
    Array3::from_elem((tile_size, tile_size, CHANNELS), BLANK_VALUE)
}
