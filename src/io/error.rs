//! Error types for dataset and mosaic operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all dataset and mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to decode a slide or tile image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save an assembled mosaic to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No row for the requested slide identifier in the label table
    RowNotFound {
        /// Slide identifier that was looked up
        image_id: String,
    },

    /// No attention ranking for the requested slide and fold
    RankingNotFound {
        /// Slide identifier that was looked up
        image_id: String,
        /// Cross-validation fold whose ranking column was requested
        fold: usize,
    },

    /// Failed to read or parse a tabular metadata file
    TableParse {
        /// Path to the CSV file
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// An augmentation transform hook failed or broke its shape contract
    Transform {
        /// Hook that failed (per-tile or per-mosaic)
        stage: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::RowNotFound { image_id } => {
                write!(f, "No label row for slide '{image_id}'")
            }
            Self::RankingNotFound { image_id, fold } => {
                write!(f, "No attention ranking for slide '{image_id}' fold {fold}")
            }
            Self::TableParse { path, source } => {
                write!(f, "Failed to parse table '{}': {source}", path.display())
            }
            Self::Transform { stage, reason } => {
                write!(f, "Transform failed at {stage}: {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::TableParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for dataset results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Attaches the offending path to errors produced by blanket `From` impls
pub trait WithPath<T> {
    /// Replace the placeholder path on filesystem-flavored errors
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<MosaicError>,
{
    fn with_path(self, p: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                MosaicError::ImageLoad { path, .. }
                | MosaicError::ImageExport { path, .. }
                | MosaicError::FileSystem { path, .. }
                | MosaicError::TableParse { path, .. } => {
                    *path = p.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<csv::Error> for MosaicError {
    fn from(err: csv::Error) -> Self {
        Self::TableParse {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a transform hook failure error
pub fn transform_error(stage: &'static str, reason: &impl ToString) -> MosaicError {
    MosaicError::Transform {
        stage,
        reason: reason.to_string(),
    }
}
