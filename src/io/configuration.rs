//! Algorithm constants and runtime configuration defaults

/// Fill value for padding and blank tiles (slide backgrounds scan white)
pub const BLANK_VALUE: u8 = 255;

/// Number of color channels in decoded slide images
pub const CHANNELS: usize = 3;

/// Coverage pre-filter pool size as a multiple of the requested tile count
pub const COVERAGE_POOL_FACTOR: usize = 4;

/// Length of the ordinal thermometer label vector
pub const ORDINAL_LABEL_LEN: usize = 5;

/// Largest valid severity grade
pub const MAX_GRADE: u8 = 5;

/// Luminance threshold below which a row/column counts as tissue when cropping
pub const WHITESPACE_THRESHOLD: u8 = 240;

// Default values for configurable parameters
/// Default tile edge length in pixels
pub const DEFAULT_TILE_SIZE: usize = 128;

/// Default number of tiles selected per slide
pub const DEFAULT_NUM_TILES: usize = 16;

/// Fixed seed for reproducible shuffling
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to mosaic preview filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
