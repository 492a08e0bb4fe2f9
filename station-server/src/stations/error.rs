//! Station directory error types.

use std::path::PathBuf;

/// Errors that can occur while loading or reading the station dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Dataset file could not be read
    #[error("failed to read dataset {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// Dataset is not valid JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Dataset JSON is valid but not an array of records
    #[error("dataset must be a JSON array of records")]
    NotAnArray,

    /// Source could not produce its records
    #[error("station source unavailable: {message}")]
    Unavailable { message: String },
}

/// Errors from listing stations.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The underlying source failed
    #[error("station source failed: {0}")]
    Source(#[from] DatasetError),
}
