//! Error types for task domain parsing.

use thiserror::Error;

/// Error returned while parsing task statuses from input or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned when a task or user identifier is not a valid UUID.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid identifier '{0}', expected a UUID")]
pub struct ParseIdError(pub String);
