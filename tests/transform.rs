//! Validates augmentation hooks: flips, determinism, and the shape contract

use ndarray::Array3;
use slidemosaic::transform::{RandomFlips, Transform, apply_checked, transpose_hw};

fn ramp(edge: usize) -> Array3<u8> {
    Array3::from_shape_fn((edge, edge, 3), |(i, j, c)| (i * 17 + j * 5 + c) as u8)
}

#[test]
fn test_transpose_swaps_spatial_axes() {
    let image = ramp(4);
    let transposed = transpose_hw(&image);

    assert_eq!(transposed.dim(), (4, 4, 3));
    assert_eq!(
        image.get((1, 3, 2)).copied(),
        transposed.get((3, 1, 2)).copied()
    );
    assert_eq!(transpose_hw(&transposed), image);
}

#[test]
fn test_random_flips_preserve_shape() {
    let flips = RandomFlips::new(3);
    let out = flips.apply(ramp(6)).unwrap();
    assert_eq!(out.dim(), (6, 6, 3));
}

#[test]
fn test_random_flips_reproducible_per_seed() {
    let image = ramp(6);
    let first = RandomFlips::new(9).apply(image.clone()).unwrap();
    let second = RandomFlips::new(9).apply(image).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_flip_output_keeps_pixel_multiset() {
    let image = ramp(5);
    let mut before: Vec<u8> = image.iter().copied().collect();
    let out = RandomFlips::new(1).apply(image).unwrap();
    let mut after: Vec<u8> = out.iter().copied().collect();

    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);
}

#[test]
fn test_apply_checked_passes_through_without_hook() {
    let image = ramp(4);
    let out = apply_checked(None, "per-tile", image.clone()).unwrap();
    assert_eq!(out, image);
}
