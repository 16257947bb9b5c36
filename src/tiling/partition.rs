//! Padding and row-major tile extraction

use super::Tile;
use crate::io::configuration::BLANK_VALUE;
use ndarray::{Array3, ArrayView3, s};

/// Pad an image so both spatial dimensions are exact multiples of `tile_size`
///
/// The padding per dimension is split with the floor half before the
/// image and the remainder after, using the white background fill value.
/// Dimensions already at an exact multiple receive no padding, so the result
/// is bit-reproducible for any input.
///
/// # Panics
///
/// Panics if `tile_size` is zero; callers validate configuration eagerly.
pub fn pad_to_tile_multiple(image: ArrayView3<'_, u8>, tile_size: usize) -> Array3<u8> {
    let (height, width, channels) = image.dim();
    let pad_h = (tile_size - height % tile_size) % tile_size;
    let pad_w = (tile_size - width % tile_size) % tile_size;

    if pad_h == 0 && pad_w == 0 {
        return image.to_owned();
    }

    let top = pad_h / 2;
    let left = pad_w / 2;

    let mut padded = Array3::from_elem((height + pad_h, width + pad_w, channels), BLANK_VALUE);
    padded
        .slice_mut(s![top..top + height, left..left + width, ..])
        .assign(&image);
    padded
}

/// Cut an image into a row-major grid of square tiles
///
/// Pads first, then emits `ceil(H / tile_size) * ceil(W / tile_size)` tiles
/// with the row index varying slower than the column index. An image smaller
/// than one tile pads up to exactly one tile.
///
/// # Panics
///
/// Panics if `tile_size` is zero; callers validate configuration eagerly.
pub fn partition(image: ArrayView3<'_, u8>, tile_size: usize) -> Vec<Tile> {
    let padded = pad_to_tile_multiple(image, tile_size);
    let (padded_h, padded_w, _) = padded.dim();
    let grid_rows = padded_h / tile_size;
    let grid_cols = padded_w / tile_size;

    let mut tiles = Vec::with_capacity(grid_rows * grid_cols);
    for row in 0..grid_rows {
        for col in 0..grid_cols {
            let tile = padded.slice(s![
                row * tile_size..(row + 1) * tile_size,
                col * tile_size..(col + 1) * tile_size,
                ..
            ]);
            tiles.push(tile.to_owned());
        }
    }
    tiles
}
