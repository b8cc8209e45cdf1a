//! Error types for the interview phase.

use thiserror::Error;

/// Result type alias for interview operations.
pub type InterviewResult<T> = Result<T, InterviewError>;

/// Errors that can occur while collecting answers.
#[derive(Error, Debug)]
pub enum InterviewError {
    #[error("answer stream closed before the interview finished")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for capability probes.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// A capability probe could not be evaluated.
///
/// Callers treat this as "capability absent"; it never aborts the interview.
#[derive(Error, Debug)]
#[error("probe failed: {0}")]
pub struct ProbeError(pub String);
