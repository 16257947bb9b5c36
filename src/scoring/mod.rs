//! Informativeness scoring heuristics for ranking tiles
//!
//! Two interchangeable heuristics estimate how much tissue a tile carries.
//! Coverage sums raw intensities (white background pushes empty tiles to the
//! top of the sum range), blue-ratio weights pixels toward the purple/blue
//! hematoxylin stain. Selection decides sort direction; scores here are raw.

use ndarray::{ArrayView3, Axis};

/// Ranking heuristic, one case per scoring strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileScorer {
    /// Sum of all samples; low sums mean dense tissue
    Coverage,
    /// Stain-density proxy; high sums mean strongly stained tissue
    BlueRatio,
}

impl TileScorer {
    /// Score one tile under this heuristic
    pub fn score(self, tile: ArrayView3<'_, u8>) -> f64 {
        match self {
            Self::Coverage => coverage_score(tile),
            Self::BlueRatio => blue_ratio_score(tile),
        }
    }
}

/// Sum of all pixel samples in the tile
///
/// Background is white (255 per channel), so a lower sum means more tissue.
pub fn coverage_score(tile: ArrayView3<'_, u8>) -> f64 {
    tile.iter().map(|&v| f64::from(v)).sum()
}

/// Blue-ratio sum over all pixels in the tile
///
/// Per pixel: `hue = 100*B / (1 + R + G)` and `intensity = 256 / (1 + R + G + B)`,
/// accumulated as `hue * intensity`. The +1 terms keep denominators nonzero;
/// channels are promoted to f64 before the sums so nothing can overflow.
/// Higher totals mean more stained tissue.
pub fn blue_ratio_score(tile: ArrayView3<'_, u8>) -> f64 {
    tile.lanes(Axis(2))
        .into_iter()
        .map(|pixel| {
            let r = f64::from(pixel.get(0).copied().unwrap_or(0));
            let g = f64::from(pixel.get(1).copied().unwrap_or(0));
            let b = f64::from(pixel.get(2).copied().unwrap_or(0));
            let hue = (100.0 * b) / (1.0 + r + g);
            let intensity = 256.0 / (1.0 + r + g + b);
            hue * intensity
        })
        .sum()
}
