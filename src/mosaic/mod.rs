//! Mosaic composition, normalization, and label encoding
//!
//! Selected tiles become either one stitched square canvas or a stack of
//! independent per-tile tensors, normalized into the channel-first layout the
//! downstream model consumes.

/// Canvas composition and tensor normalization
pub mod assembler;
/// Severity grade encoding for the downstream target
pub mod label;

pub use assembler::{
    AssemblyOptions, assemble_mosaic, assemble_tile_stack, compose_canvas, grid_rows, invert,
    normalize, placement_order,
};
pub use label::{Label, LabelMode, encode_label};
