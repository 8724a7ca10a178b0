//! Error types and path context for drawing and compositing operations

use serde_json::error::Category;
use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all drawing and compositing operations
#[derive(Debug)]
pub enum TraitError {
    /// Every weight of a feature is zero, so no value can ever be drawn
    InvalidFeatureWeights {
        /// Name of the offending feature
        feature: String,
    },

    /// Requested draw count is negative
    InvalidCount {
        /// The count that was requested
        count: i64,
    },

    /// Specification document is missing fields or has the wrong shape
    MalformedSpecification {
        /// Description of what's wrong with the specification
        reason: String,
    },

    /// Command-line or runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A JSON document could not be parsed or written
    Json {
        /// Path of the document
        path: PathBuf,
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// Layer template references a feature the token doesn't carry
    UnknownPlaceholder {
        /// Template containing the placeholder
        template: String,
        /// Feature name inside the braces
        placeholder: String,
    },

    /// Layer image does not exist and the missing-layer policy is `break`
    MissingLayer {
        /// Resolved layer path
        path: PathBuf,
    },

    /// Failed to load a layer image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a composited image to disk
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

impl fmt::Display for TraitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFeatureWeights { feature } => {
                write!(
                    f,
                    "Feature '{feature}' has no value with a positive weight"
                )
            }
            Self::InvalidCount { count } => {
                write!(f, "Invalid count {count}: must not be negative")
            }
            Self::MalformedSpecification { reason } => {
                write!(f, "Malformed specification: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Json { path, source } => {
                write!(f, "Invalid JSON in '{}': {source}", path.display())
            }
            Self::UnknownPlaceholder {
                template,
                placeholder,
            } => {
                write!(
                    f,
                    "Layer template '{template}' references unknown feature '{placeholder}'"
                )
            }
            Self::MissingLayer { path } => {
                write!(f, "Missing layer '{}'", path.display())
            }
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
        }
    }
}

impl std::error::Error for TraitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, TraitError>;

const UNKNOWN_PATH: &str = "<unknown>";

/// Attaches a filesystem path to errors that were raised without one
pub trait WithPath<T> {
    /// Replace an unknown path inside the error with `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<TraitError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only errors created through `From` carry the placeholder path
            match &mut error {
                TraitError::ImageLoad { path: p, .. }
                | TraitError::ImageExport { path: p, .. }
                | TraitError::FileSystem { path: p, .. }
                | TraitError::Json { path: p, .. }
                    if p.as_os_str() == UNKNOWN_PATH =>
                {
                    *p = path.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for TraitError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for TraitError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for TraitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TraitError {
    TraitError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed specification error
pub fn malformed(reason: &impl ToString) -> TraitError {
    TraitError::MalformedSpecification {
        reason: reason.to_string(),
    }
}

/// Classify a failed document parse
///
/// A document of the wrong shape is a malformed specification; text that is
/// not JSON at all stays a `Json` error.
pub fn document_error(err: serde_json::Error) -> TraitError {
    match err.classify() {
        Category::Data => malformed(&err),
        Category::Io | Category::Syntax | Category::Eof => TraitError::from(err),
    }
}

/// Wrap an I/O error with the path and operation that produced it
pub fn file_system(path: &Path, operation: &'static str, source: std::io::Error) -> TraitError {
    TraitError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
