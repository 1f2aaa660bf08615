//! Error types for map construction, host parameters, and frame export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all toolkit operations
///
/// Only [`FovError::InvalidDimensions`] can come out of the core map and
/// visibility engine. Every other variant belongs to the demo host and the
/// image/CLI layers built on top of it.
#[derive(Debug)]
pub enum FovError {
    /// Map dimensions were non-positive or larger than the supported maximum
    InvalidDimensions {
        /// Requested width in cells
        width: i32,
        /// Requested height in cells
        height: i32,
    },

    /// Host or CLI parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// ASCII map text could not be interpreted
    MapParse {
        /// One-based line number of the offending row
        line: usize,
        /// Description of what's wrong with the row
        reason: String,
    },

    /// A walk capture was exported before any frame was recorded
    EmptyCapture,

    /// Failed to encode or save a rendered frame
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

    /// The global logger could not be installed
    Logging {
        /// Underlying logger error
        source: log::SetLoggerError,
    },
}

impl fmt::Display for FovError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "Invalid map dimensions {width}x{height}: both sides must be positive"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MapParse { line, reason } => {
                write!(f, "Malformed map at line {line}: {reason}")
            }
            Self::EmptyCapture => write!(f, "No frames captured for export"),
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
            Self::Logging { source } => write!(f, "Failed to install logger: {source}"),
        }
    }
}

impl std::error::Error for FovError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Logging { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for toolkit results
pub type Result<T> = std::result::Result<T, FovError>;

impl From<log::SetLoggerError> for FovError {
    fn from(err: log::SetLoggerError) -> Self {
        Self::Logging { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FovError {
    FovError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for the given path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> FovError {
    FovError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
