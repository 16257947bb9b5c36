//! Whitespace margin removal for scanned slides
//!
//! Scanners leave broad white borders around the tissue. Trimming them before
//! partitioning keeps the tile grid focused on regions that can actually rank.

use crate::io::configuration::WHITESPACE_THRESHOLD;
use ndarray::{Array3, ArrayView3, s};

fn has_tissue(lane: ArrayView3<'_, u8>) -> bool {
    lane.iter().any(|&v| v < WHITESPACE_THRESHOLD)
}

/// Trim leading and trailing all-white rows and columns
///
/// A row or column counts as tissue when any sample falls below the
/// whitespace threshold. Images with no white margin come back unchanged, as
/// do fully white images (there is no tissue window to crop to).
pub fn crop_whitespace(image: ArrayView3<'_, u8>) -> Array3<u8> {
    let (height, width, _) = image.dim();

    let first_row = (0..height).find(|&r| has_tissue(image.slice(s![r..=r, .., ..])));
    let Some(top) = first_row else {
        return image.to_owned();
    };
    let bottom = (0..height)
        .rev()
        .find(|&r| has_tissue(image.slice(s![r..=r, .., ..])))
        .unwrap_or(top);

    let left = (0..width)
        .find(|&c| has_tissue(image.slice(s![.., c..=c, ..])))
        .unwrap_or(0);
    let right = (0..width)
        .rev()
        .find(|&c| has_tissue(image.slice(s![.., c..=c, ..])))
        .unwrap_or(left);

    image.slice(s![top..=bottom, left..=right, ..]).to_owned()
}
