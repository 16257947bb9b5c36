//! Validates padding geometry, row-major partitioning, and whitespace cropping

use ndarray::{Array3, s};
use slidemosaic::tiling::{blank_tile, crop_whitespace, pad_to_tile_multiple, partition};

fn ramp_image(height: usize, width: usize) -> Array3<u8> {
    Array3::from_shape_fn((height, width, 3), |(i, j, c)| {
        (i * 31 + j * 7 + c * 3) as u8
    })
}

#[test]
fn test_padding_reaches_exact_multiple() {
    let image = ramp_image(5, 7);
    let padded = pad_to_tile_multiple(image.view(), 3);

    assert_eq!(padded.dim(), (6, 9, 3));
    // pad_h = 1 splits 0 before / 1 after; pad_w = 2 splits 1 / 1
    assert_eq!(padded.slice(s![0..5, 1..8, ..]), image);
    assert!(padded.slice(s![5.., .., ..]).iter().all(|&v| v == 255));
    assert!(padded.slice(s![.., 0..1, ..]).iter().all(|&v| v == 255));
    assert!(padded.slice(s![.., 8.., ..]).iter().all(|&v| v == 255));
}

#[test]
fn test_padding_noop_on_exact_multiple() {
    let image = ramp_image(6, 9);
    let padded = pad_to_tile_multiple(image.view(), 3);
    assert_eq!(padded, image);
}

#[test]
fn test_partition_count_and_shape() {
    for (h, w, s) in [(5, 7, 3), (6, 9, 3), (1, 1, 4), (10, 3, 4), (8, 8, 8)] {
        let image = ramp_image(h, w);
        let tiles = partition(image.view(), s);
        assert_eq!(tiles.len(), h.div_ceil(s) * w.div_ceil(s));
        for tile in &tiles {
            assert_eq!(tile.dim(), (s, s, 3));
        }
    }
}

#[test]
fn test_partition_row_major_reassembly() {
    let image = ramp_image(5, 7);
    let tile_size = 3;
    let padded = pad_to_tile_multiple(image.view(), tile_size);
    let tiles = partition(image.view(), tile_size);

    let grid_cols = padded.dim().1 / tile_size;
    for (index, tile) in tiles.iter().enumerate() {
        let row = index / grid_cols;
        let col = index % grid_cols;
        let expected = padded.slice(s![
            row * tile_size..(row + 1) * tile_size,
            col * tile_size..(col + 1) * tile_size,
            ..
        ]);
        assert_eq!(tile, &expected, "tile {index} mismatch");
    }
}

#[test]
fn test_image_smaller_than_tile_pads_to_one_tile() {
    let image = ramp_image(2, 2);
    let tiles = partition(image.view(), 5);
    assert_eq!(tiles.len(), 1);
    assert_eq!(tiles.first().map(Array3::dim), Some((5, 5, 3)));
}

#[test]
fn test_blank_tile_is_all_white() {
    let tile = blank_tile(4);
    assert_eq!(tile.dim(), (4, 4, 3));
    assert!(tile.iter().all(|&v| v == 255));
}

#[test]
fn test_crop_trims_white_margins() {
    let mut image = Array3::from_elem((10, 12, 3), 255u8);
    image.slice_mut(s![3..6, 4..9, ..]).fill(40);

    let cropped = crop_whitespace(image.view());
    assert_eq!(cropped.dim(), (3, 5, 3));
    assert!(cropped.iter().all(|&v| v == 40));
}

#[test]
fn test_crop_noop_without_margin() {
    let image = Array3::from_elem((4, 4, 3), 10u8);
    let cropped = crop_whitespace(image.view());
    assert_eq!(cropped, image);
}

#[test]
fn test_crop_noop_on_fully_white_image() {
    let image = Array3::from_elem((6, 6, 3), 255u8);
    let cropped = crop_whitespace(image.view());
    assert_eq!(cropped, image);
}
