//! Canvas composition and tensor normalization

use crate::io::error::Result;
use crate::tiling::{Tile, blank_tile};
use crate::transform::{Transform, apply_checked};
use ndarray::{Array3, Array4, ArrayView3, s};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Knobs for one mosaic assembly pass
#[derive(Default)]
pub struct AssemblyOptions<'a> {
    /// Shuffle tile placement within the grid
    pub shuffle: bool,
    /// Seed for the placement permutation when shuffling
    pub seed: u64,
    /// Hook applied to each inverted tile before placement
    pub per_tile: Option<&'a dyn Transform>,
    /// Hook applied once to the finished canvas
    pub per_mosaic: Option<&'a dyn Transform>,
}

/// Edge length of the tile grid: `floor(sqrt(num_tiles))`
pub fn grid_rows(num_tiles: usize) -> usize {
    (num_tiles as f64).sqrt().floor() as usize
}

/// Build the placement permutation for `num_tiles` grid slots
///
/// Identity order by default; a seeded uniform permutation without
/// replacement when shuffling, so the same seed always reproduces the same
/// layout.
pub fn placement_order(num_tiles: usize, shuffle: bool, seed: u64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..num_tiles).collect();
    if shuffle {
        let mut rng = StdRng::seed_from_u64(seed);
        order.shuffle(&mut rng);
    }
    order
}

/// Photometric inversion: tissue becomes bright, white background becomes zero
pub fn invert(tile: &Tile) -> Tile {
    tile.mapv(|v| 255 - v)
}

/// Stitch tiles into a square canvas following a placement order
///
/// The grid has `R = floor(sqrt(order.len()))` rows and columns; order
/// entries beyond `R*R` are dropped and grid cells whose permuted tile does
/// not exist are filled with a blank tile. Every cell is inverted and run
/// through the per-tile hook before placement, blanks included. Canvas
/// dimensions are always exact multiples of `tile_size`; there are no
/// partial cells.
///
/// # Errors
///
/// Propagates per-tile transform failures and shape contract violations
pub fn compose_canvas(
    tiles: &[Tile],
    tile_size: usize,
    order: &[usize],
    per_tile: Option<&dyn Transform>,
) -> Result<Array3<u8>> {
    let rows = grid_rows(order.len());
    let edge = rows * tile_size;
    let mut canvas = Array3::zeros((edge, edge, 3));

    for row in 0..rows {
        for col in 0..rows {
            let slot = row * rows + col;
            let cell = order
                .get(slot)
                .and_then(|&idx| tiles.get(idx))
                .map_or_else(|| invert(&blank_tile(tile_size)), invert);
            let cell = apply_checked(per_tile, "per-tile", cell)?;

            canvas
                .slice_mut(s![
                    row * tile_size..(row + 1) * tile_size,
                    col * tile_size..(col + 1) * tile_size,
                    ..
                ])
                .assign(&cell);
        }
    }
    Ok(canvas)
}

/// Scale to `[0, 1]` floats and reorder `(H, W, C)` into `(C, H, W)`
pub fn normalize(canvas: ArrayView3<'_, u8>) -> Array3<f32> {
    canvas
        .mapv(|v| f32::from(v) / 255.0)
        .permuted_axes([2, 0, 1])
        .as_standard_layout()
        .to_owned()
}

/// Assemble selected tiles into one normalized mosaic tensor
///
/// Shape is `(3, S*R, S*R)` with `R = floor(sqrt(len(tiles)))`.
///
/// # Errors
///
/// Propagates transform hook failures from either hook point
pub fn assemble_mosaic(
    tiles: &[Tile],
    tile_size: usize,
    options: &AssemblyOptions<'_>,
) -> Result<Array3<f32>> {
    let order = placement_order(tiles.len(), options.shuffle, options.seed);
    let canvas = compose_canvas(tiles, tile_size, &order, options.per_tile)?;
    let canvas = apply_checked(options.per_mosaic, "per-mosaic", canvas)?;
    Ok(normalize(canvas.view()))
}

/// Normalize each selected tile independently into a `(K, 3, S, S)` stack
///
/// The per-tile alternative to the stitched mosaic: no inversion, no
/// shuffling, each tile transformed (optionally) and normalized on its own.
///
/// # Errors
///
/// Propagates per-tile transform failures and shape contract violations
pub fn assemble_tile_stack(
    tiles: &[Tile],
    tile_size: usize,
    per_tile: Option<&dyn Transform>,
) -> Result<Array4<f32>> {
    let mut stack = Array4::zeros((tiles.len(), 3, tile_size, tile_size));
    for (i, tile) in tiles.iter().enumerate() {
        let transformed = apply_checked(per_tile, "per-tile", tile.clone())?;
        stack
            .slice_mut(s![i, .., .., ..])
            .assign(&normalize(transformed.view()));
    }
    Ok(stack)
}
