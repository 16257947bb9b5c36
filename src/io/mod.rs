//! Input/output operations and error handling
//!
//! This module contains I/O-related functionality including:
//! - Slide decoding and mosaic preview export
//! - Error types and the crate-wide `Result` alias
//! - Command-line interface and batch processing
//! - Progress reporting for batch runs

/// Command-line interface for batch mosaic preview generation
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types for dataset and mosaic operations
pub mod error;
/// Slide decoding and mosaic preview export
pub mod image;
/// Batch progress reporting
pub mod progress;
