//! Validates scoring heuristics and the top-K selection invariants

use ndarray::Array3;
use slidemosaic::scoring::{TileScorer, blue_ratio_score, coverage_score};
use slidemosaic::selection::{SelectionMode, select_tiles};
use slidemosaic::tiling::Tile;

const TILE_SIZE: usize = 4;

fn gray_tile(value: u8) -> Tile {
    Array3::from_elem((TILE_SIZE, TILE_SIZE, 3), value)
}

fn rgb_tile(r: u8, g: u8, b: u8) -> Tile {
    Array3::from_shape_fn((TILE_SIZE, TILE_SIZE, 3), |(_, _, c)| match c {
        0 => r,
        1 => g,
        _ => b,
    })
}

#[test]
fn test_coverage_score_sums_samples() {
    let tile = gray_tile(10);
    let expected = (TILE_SIZE * TILE_SIZE * 3 * 10) as f64;
    assert!((coverage_score(tile.view()) - expected).abs() < 1e-9);
    assert!((TileScorer::Coverage.score(tile.view()) - expected).abs() < 1e-9);
}

#[test]
fn test_blue_ratio_favors_blue_over_red() {
    let blue = rgb_tile(0, 0, 255);
    let red = rgb_tile(255, 0, 0);
    let white = rgb_tile(255, 255, 255);

    // Pure blue: hue = 25500, intensity = 1 per pixel
    let expected_blue = (TILE_SIZE * TILE_SIZE) as f64 * 25500.0;
    assert!((blue_ratio_score(blue.view()) - expected_blue).abs() < 1e-6);

    assert!(blue_ratio_score(red.view()) < f64::EPSILON);
    assert!(blue_ratio_score(blue.view()) > blue_ratio_score(white.view()));
    assert!(blue_ratio_score(white.view()) > blue_ratio_score(red.view()));
}

#[test]
fn test_selection_always_returns_exactly_k() {
    for tile_count in [0usize, 2, 4, 9] {
        let tiles: Vec<Tile> = (0..tile_count).map(|i| gray_tile(i as u8)).collect();
        for mode in [
            SelectionMode::CoverageOnly,
            SelectionMode::CoverageThenBlueRatio,
        ] {
            let selected = select_tiles(tiles.clone(), 4, TILE_SIZE, mode);
            assert_eq!(selected.len(), 4, "count {tile_count} mode {mode:?}");
            for tile in &selected {
                assert_eq!(tile.dim(), (TILE_SIZE, TILE_SIZE, 3));
            }
        }
    }
}

#[test]
fn test_coverage_selection_keeps_darkest_tiles() {
    let tiles = vec![gray_tile(200), gray_tile(50), gray_tile(255), gray_tile(100)];
    let selected = select_tiles(tiles, 2, TILE_SIZE, SelectionMode::CoverageOnly);

    assert_eq!(selected, vec![gray_tile(50), gray_tile(100)]);
}

#[test]
fn test_short_set_pads_with_blanks_after_originals() {
    let tiles = vec![gray_tile(10), gray_tile(20)];
    let selected = select_tiles(tiles, 4, TILE_SIZE, SelectionMode::CoverageOnly);

    // Blanks rank last under ascending coverage, behind every real tile
    assert_eq!(
        selected,
        vec![gray_tile(10), gray_tile(20), gray_tile(255), gray_tile(255)]
    );
}

#[test]
fn test_empty_set_yields_all_blanks() {
    let selected = select_tiles(Vec::new(), 3, TILE_SIZE, SelectionMode::CoverageOnly);
    assert_eq!(selected.len(), 3);
    assert!(selected.iter().all(|t| t.iter().all(|&v| v == 255)));
}

#[test]
fn test_coverage_ties_keep_partition_order() {
    // Equal coverage but distinguishable channel layouts
    let first = rgb_tile(30, 10, 20);
    let second = rgb_tile(10, 20, 30);
    let tiles = vec![first.clone(), second.clone()];
    let selected = select_tiles(tiles, 2, TILE_SIZE, SelectionMode::CoverageOnly);
    assert_eq!(selected, vec![first, second]);
}

#[test]
fn test_two_pass_reranks_pool_by_stain() {
    // Black has the lowest coverage, but blue carries the stain signal
    let tiles = vec![
        rgb_tile(255, 255, 255),
        rgb_tile(255, 0, 0),
        rgb_tile(0, 0, 255),
        rgb_tile(0, 0, 0),
    ];

    let single = select_tiles(tiles.clone(), 1, TILE_SIZE, SelectionMode::CoverageOnly);
    assert_eq!(single, vec![rgb_tile(0, 0, 0)]);

    let two_pass = select_tiles(tiles, 1, TILE_SIZE, SelectionMode::CoverageThenBlueRatio);
    assert_eq!(two_pass, vec![rgb_tile(0, 0, 255)]);
}

#[test]
fn test_two_pass_output_is_subset_of_coverage_pool() {
    let num_tiles = 2;
    let tiles: Vec<Tile> = (0..12).map(|i| gray_tile((i * 20) as u8)).collect();

    let mut by_coverage: Vec<Tile> = tiles.clone();
    by_coverage.sort_by(|a, b| coverage_score(a.view()).total_cmp(&coverage_score(b.view())));
    let pool: Vec<Tile> = by_coverage.into_iter().take(num_tiles * 4).collect();

    let selected = select_tiles(
        tiles,
        num_tiles,
        TILE_SIZE,
        SelectionMode::CoverageThenBlueRatio,
    );
    for tile in &selected {
        assert!(pool.contains(tile), "selected tile outside coverage pool");
    }
}
