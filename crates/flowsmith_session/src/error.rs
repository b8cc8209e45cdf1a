//! Error types for session orchestration.

use thiserror::Error;

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while running a session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("interview failed: {0}")]
    Interview(#[from] flowsmith_interview::InterviewError),

    #[error("scaffold generation failed: {0}")]
    Scaffold(#[from] flowsmith_scaffold::ScaffoldError),

    #[error("failed to write session summary: {0}")]
    Summary(#[source] std::io::Error),
}
