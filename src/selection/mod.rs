//! Top-K tile selection with blank padding
//!
//! Always returns exactly the requested number of tiles. Short tile sets are
//! right-padded with blank tiles before any ranking, so the padding competes
//! in the sort like any other tile (and loses to anything with tissue).

use crate::io::configuration::COVERAGE_POOL_FACTOR;
use crate::scoring::{blue_ratio_score, coverage_score};
use crate::tiling::{Tile, blank_tile};

/// Ranking strategy used to pick the top-K tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Single pass: ascending coverage sum, keep the lowest K
    #[default]
    CoverageOnly,
    /// Two passes: coverage pre-filter to a 4K pool, then descending
    /// blue-ratio over the pool
    CoverageThenBlueRatio,
}

/// Pick exactly `num_tiles` tiles from a partitioned set
///
/// Sorts are stable throughout: coverage ties keep partition order, and
/// blue-ratio ties keep the order established by the coverage pass. The
/// two-pass mode discards clearly-background tiles with the cheap coverage
/// sum before running the costlier stain heuristic on the small pool.
///
/// `tile_size` shapes the blank padding when the set is short; callers have
/// already validated it against the tiles they cut.
pub fn select_tiles(
    tiles: Vec<Tile>,
    num_tiles: usize,
    tile_size: usize,
    mode: SelectionMode,
) -> Vec<Tile> {
    let mut pool = tiles;
    while pool.len() < num_tiles {
        pool.push(blank_tile(tile_size));
    }

    let coverage: Vec<f64> = pool.iter().map(|t| coverage_score(t.view())).collect();
    let score_of = |scores: &[f64], index: usize| scores.get(index).copied().unwrap_or(f64::MAX);

    let mut order: Vec<usize> = (0..pool.len()).collect();
    order.sort_by(|&a, &b| score_of(&coverage, a).total_cmp(&score_of(&coverage, b)));

    match mode {
        SelectionMode::CoverageOnly => {
            order.truncate(num_tiles);
        }
        SelectionMode::CoverageThenBlueRatio => {
            order.truncate(num_tiles * COVERAGE_POOL_FACTOR);
            let blue: Vec<f64> = pool.iter().map(|t| blue_ratio_score(t.view())).collect();
            order.sort_by(|&a, &b| score_of(&blue, b).total_cmp(&score_of(&blue, a)));
            order.truncate(num_tiles);
        }
    }

    // Indices are unique, so each slot is taken at most once
    let mut slots: Vec<Option<Tile>> = pool.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
        .collect()
}
