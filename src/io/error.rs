//! Error types for configuration and image I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pixelator operations
#[derive(Debug)]
pub enum BinpixError {
    /// Rejected configuration, detected at construction before any I/O
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load the source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decode or read error
        source: image::ImageError,
    },

    /// Failed to encode or write the output image
    ImageSave {
        /// Path where the save was attempted
        path: PathBuf,
        /// Underlying encode or write error
        source: image::ImageError,
    },

    /// General filesystem operation failure around image I/O
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for BinpixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid {parameter} '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageSave { path, source } => {
                write!(f, "Failed to save image to '{}': {source}", path.display())
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
        }
    }
}

impl std::error::Error for BinpixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageSave { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidConfiguration { .. } => None,
        }
    }
}

/// Convenience type alias for pixelator results
pub type Result<T> = std::result::Result<T, BinpixError>;
