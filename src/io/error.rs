//! Error types for image loading, classification and interpretation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all analysis operations
#[derive(Debug)]
pub enum AnalysisError {
    /// Failed to load or decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Interpretation was asked to work on an empty prediction list
    EmptyPredictions,

    /// The classifier could not be acquired
    ModelLoad {
        /// Description of what went wrong while loading
        reason: String,
    },

    /// The classifier failed on a specific image
    Classification {
        /// Image that was being classified
        path: PathBuf,
        /// Description of the failure
        reason: String,
    },

    /// A score table file contains a malformed record
    ScoreTableParse {
        /// Score table file
        path: PathBuf,
        /// One-based line number of the malformed record
        line: usize,
        /// Explanation of what is malformed
        reason: String,
    },

    /// Two images in one batch would write the same report file
    ReportConflict {
        /// Image whose report would overwrite another
        path: PathBuf,
        /// Image that already claimed the report file
        claimed_by: PathBuf,
        /// Shared report file
        report: PathBuf,
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

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to process the image '{}': {source}", path.display())
            }
            Self::EmptyPredictions => {
                write!(f, "Cannot interpret an empty prediction list")
            }
            Self::ModelLoad { reason } => {
                write!(
                    f,
                    "Failed to load the neural network model: {reason}. \
                     Please check the model source and try again."
                )
            }
            Self::Classification { path, reason } => {
                write!(
                    f,
                    "Failed to analyze the image '{}': {reason}. \
                     Please try a different image.",
                    path.display()
                )
            }
            Self::ScoreTableParse { path, line, reason } => {
                write!(
                    f,
                    "Malformed score table '{}' at line {line}: {reason}",
                    path.display()
                )
            }
            Self::ReportConflict {
                path,
                claimed_by,
                report,
            } => {
                write!(
                    f,
                    "Not analyzing '{}': its report '{}' is already written for '{}'",
                    path.display(),
                    report.display(),
                    claimed_by.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for analysis results
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AnalysisError {
    AnalysisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a classification error for the given image
pub fn classification_error(path: impl Into<PathBuf>, reason: &impl ToString) -> AnalysisError {
    AnalysisError::Classification {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for the given path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> AnalysisError {
    AnalysisError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
