use std::io;

use thiserror::Error;

use crate::domain::diagnosis::ClassifiedError;
use crate::domain::ticket::{DESCRIPTION_MAX_CHARS, SUMMARY_MAX_CHARS};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    IssueTracker(ClassifiedError),
    #[error("unexpected error while creating ticket: {0}")]
    Unexpected(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// Caller input rejected before anything is sent to Jira.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("summary required")]
    SummaryRequired,
    #[error("summary too long: {length} characters (maximum {max})", max = SUMMARY_MAX_CHARS)]
    SummaryTooLong { length: usize },
    #[error(
        "description too long: {length} characters (maximum {max})",
        max = DESCRIPTION_MAX_CHARS
    )]
    DescriptionTooLong { length: usize },
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

/// Failure reported by the issue tracker boundary.
///
/// `status` is the HTTP status code of the response, or 0 when no response
/// was received at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("issue tracker error ({status}): {message}")]
pub struct ProviderError {
    pub status: u16,
    pub message: String,
}

impl ProviderError {
    pub const TRANSPORT: u16 = 0;

    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(Self::TRANSPORT, message)
    }
}

/// Everything the issue tracker boundary can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    /// Jira answered with a success status but the body could not be read.
    #[error("unreadable Jira response (HTTP {status}): {message}")]
    UnreadableResponse { status: u16, message: String },
}

pub type TrackerResult<T> = Result<T, TrackerError>;
