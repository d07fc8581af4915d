//! Error types for the analysis engine

use thiserror::Error;

/// Errors raised while analyzing a single roast log
///
/// Both variants are fatal for the file they occur in; batch callers are
/// expected to isolate them so the remaining files still get analyzed.
/// Missing threshold points and negative durations are soft conditions
/// encoded in the profile itself, not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Roast log contains no rows")]
    EmptyLog,

    #[error("Malformed time label: {label:?} (expected \"mm:ss\")")]
    MalformedTimeLabel { label: String },
}

/// Result type alias for engine operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
