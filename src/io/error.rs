//! Error types for landmark resolution, record loading and layout export

use std::fmt;
use std::path::PathBuf;

/// Why a relative landmark could not be given an absolute center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedCause {
    /// The referenced parent id does not exist in the landmark set
    DanglingReference,
    /// Following parent references leads back to this landmark
    Cycle,
    /// The parent chain is deeper than the number of resolution rounds
    RoundLimitExceeded,
}

impl fmt::Display for UnresolvedCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingReference => write!(f, "parent does not exist"),
            Self::Cycle => write!(f, "parent chain is cyclic"),
            Self::RoundLimitExceeded => write!(f, "parent chain exceeds the resolution round limit"),
        }
    }
}

/// Main error type for all layout operations
#[derive(Debug)]
pub enum LayoutError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A landmark, feature or plan file could not be decoded
    Parse {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying decoding error
        source: serde_json::Error,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

    /// Two landmarks share the same identifier
    DuplicateLandmark {
        /// The repeated identifier
        id: String,
    },

    /// A plan or query names a landmark that is not in the registry
    UnknownLandmark {
        /// The missing identifier
        id: String,
    },

    /// A relative landmark never received an absolute center
    UnresolvedLandmark {
        /// Landmark that stayed unresolved
        id: String,
        /// Parent it was placed relative to
        parent: String,
        /// Reason resolution failed
        cause: UnresolvedCause,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
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
            Self::Parse { path, source } => {
                write!(f, "Failed to parse '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
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
            Self::DuplicateLandmark { id } => {
                write!(f, "Landmark '{id}' is defined more than once")
            }
            Self::UnknownLandmark { id } => {
                write!(f, "Landmark '{id}' does not exist")
            }
            Self::UnresolvedLandmark { id, parent, cause } => {
                write!(
                    f,
                    "Landmark '{id}' placed relative to '{parent}' is unresolved: {cause}"
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for layout results
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Attaches a file path to errors raised while touching that file
pub trait WithPath<T> {
    /// Wrap the error together with the path and operation that produced it
    ///
    /// # Errors
    ///
    /// Propagates the original error converted into a path-aware `LayoutError`
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T> {
        self.map_err(|source| LayoutError::FileSystem {
            path: path.into(),
            operation,
            source,
        })
    }
}

impl<T> WithPath<T> for std::result::Result<T, serde_json::Error> {
    fn with_path(self, path: impl Into<PathBuf>, _operation: &'static str) -> Result<T> {
        self.map_err(|source| LayoutError::Parse {
            path: path.into(),
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LayoutError {
    LayoutError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
