//! Error types for pattern construction and rendering operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pattern operations
#[derive(Debug)]
pub enum PatternError {
    /// Stitch patterns for the two axes have different lengths
    ///
    /// The grid is square, so an edge map can only be derived from two
    /// sequences of equal length.
    DimensionMismatch {
        /// Length of the horizontal stitch pattern
        horizontal: usize,
        /// Length of the vertical stitch pattern
        vertical: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Color string could not be parsed
    InvalidColor {
        /// The rejected color string
        value: String,
        /// Explanation of why parsing failed
        reason: String,
    },

    /// Failed to save a rendered image to disk
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
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                horizontal,
                vertical,
            } => {
                write!(
                    f,
                    "Stitch pattern lengths differ: horizontal {horizontal}, vertical {vertical}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidColor { value, reason } => {
                write!(f, "Invalid color '{value}': {reason}")
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
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, PatternError>;

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid color error
pub fn invalid_color(value: &impl ToString, reason: &impl ToString) -> PatternError {
    PatternError::InvalidColor {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a generic I/O error for path handling failures
pub fn io_error(msg: &str) -> PatternError {
    PatternError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = PatternError::DimensionMismatch {
            horizontal: 3,
            vertical: 5,
        };

        let message = err.to_string();
        assert!(message.contains("horizontal 3"));
        assert!(message.contains("vertical 5"));
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("subdivisions", &0, &"must be at least 1");

        assert_eq!(
            err.to_string(),
            "Invalid parameter 'subdivisions' = '0': must be at least 1"
        );
    }
}
