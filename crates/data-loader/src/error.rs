//! Error types for the data-loader crate.
//!
//! Only loading and validation can fail. The condition engine in the
//! `pipeline` crate never produces these errors.

use thiserror::Error;

/// Errors that can occur while loading benefit records or condition sets
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file was not valid JSON, or a value had the wrong type
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Valid JSON, but neither a listing page nor an array of records
    #[error("Unexpected document shape: {0}")]
    UnexpectedShape(String),

    /// A condition value is outside its closed enumeration
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
