//! Error handling for the roast curve analyzer
//!
//! Per-file errors are isolated to the file they occur in; the batch layer
//! records them in its report instead of aborting the remaining files.

use shared::error::AnalysisError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Engine errors (empty log, malformed time label)
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    // Ingestion errors
    #[error("Required columns {required:?} are missing or named incorrectly in {file_name}")]
    MissingColumns {
        file_name: String,
        required: Vec<String>,
    },

    #[error("Failed to ingest {file_name}: {message}")]
    Ingest { file_name: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    // Internal errors
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for analyzer operations
pub type AppResult<T> = Result<T, AppError>;
