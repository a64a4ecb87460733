//! Error types and context management for tile generation and walk export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all engine and export operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Source data doesn't meet the renderer's requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// The part catalog has no parts to choose from
    ///
    /// Raised by the first unconstrained pick of a session. Fatal to startup.
    EmptyCatalog,

    /// No part could be chosen for a cell next to the anchor
    ///
    /// Occurs when either:
    /// - The anchor part has no neighbors
    /// - The drawn index lands outside the candidate pool
    NoCompatiblePart {
        /// Grid coordinates of the cell being resolved
        position: [i32; 2],
        /// Number of candidates that were available
        candidates: usize,
        /// Index that was drawn, if a draw happened
        index: Option<usize>,
    },

    /// A tile was written into a cell that is already filled
    DuplicateResolution {
        /// Grid coordinates of the filled cell
        position: [i32; 2],
    },

    /// A bounded grid was written outside its allocated area
    CellOutOfBounds {
        /// Grid coordinates of the write
        position: [i32; 2],
        /// Grid dimensions (columns, rows)
        dimensions: (usize, usize),
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

    /// The stderr logger could not be installed
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::EmptyCatalog => {
                write!(f, "Part catalog is empty (source image has no pixels)")
            }
            Self::NoCompatiblePart {
                position,
                candidates,
                index,
            } => match index {
                Some(index) => write!(
                    f,
                    "No compatible part at ({}, {}): index {index} outside {candidates} candidates",
                    position[0], position[1]
                ),
                None => write!(
                    f,
                    "No compatible part at ({}, {}): anchor has no neighbors",
                    position[0], position[1]
                ),
            },
            Self::DuplicateResolution { position } => {
                write!(
                    f,
                    "Cell ({}, {}) is already filled and cannot be resolved again",
                    position[0], position[1]
                )
            }
            Self::CellOutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Cell ({}, {}) is outside the bounded grid (size {}x{})",
                    position[0], position[1], dimensions.0, dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::Logging { reason } => {
                write!(f, "Failed to initialize logging: {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl AlgorithmError {
    /// Whether the driver may leave the cell unfilled and carry on
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoCompatiblePart { .. })
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Grid coordinates where the error occurred
    pub position: Option<[i32; 2]>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with engine state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the position context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the position applied
    fn at_position(self, position: [i32; 2]) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AlgorithmError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only positional errors benefit from the cell coordinates
            if let Some(pos) = context.position {
                match &mut error {
                    AlgorithmError::NoCompatiblePart { position, .. }
                    | AlgorithmError::DuplicateResolution { position }
                    | AlgorithmError::CellOutOfBounds { position, .. } => *position = pos,
                    _ => {}
                }
            }
            error
        })
    }

    fn at_position(self, position: [i32; 2]) -> Result<T> {
        self.with_context(ErrorContext {
            position: Some(position),
            ..Default::default()
        })
    }
}

impl From<image::ImageError> for AlgorithmError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for AlgorithmError {
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
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
