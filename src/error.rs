// ABOUTME: Unified error with SNAFU pattern.
// ABOUTME: Maps every failure to a kind for programmatic handling.

use snafu::Snafu;

use crate::decode::DecodeError;
use crate::exec::ExecError;
use crate::services::ServiceError;
use crate::tool::LocateError;

/// Unified error for tool resolution and service operations.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("tool resolution failed: {source}"))]
    Locate { source: LocateError },

    #[snafu(display("command service failed: {source}"))]
    Service { source: ServiceError },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No management tool resolved; non-retryable until config changes.
    NoToolFound,
    /// Resolved executable missing at call time.
    ToolNotFound,
    /// OS refused to spawn or capture the process.
    LaunchFailure,
    /// Tool ran and exited non-zero.
    CommandFailed,
    /// Top-level output unparseable; fatal to the call.
    MalformedPayload,
    /// A required field was missing from an otherwise valid payload.
    SchemaMismatch,
}

impl Error {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Locate { .. } => ErrorKind::NoToolFound,
            Error::Service { source } => match source {
                ServiceError::CommandFailed { .. } => ErrorKind::CommandFailed,
                ServiceError::Exec(e) => match e {
                    ExecError::ToolNotFound(_) => ErrorKind::ToolNotFound,
                    ExecError::LaunchFailure { .. } | ExecError::OutputCapture { .. } => {
                        ErrorKind::LaunchFailure
                    }
                },
                ServiceError::Decode(e) => match e {
                    DecodeError::MalformedPayload { .. } => ErrorKind::MalformedPayload,
                    DecodeError::SchemaMismatch { .. } => ErrorKind::SchemaMismatch,
                },
            },
        }
    }

    /// The tool's own stderr message, when this is a command failure.
    pub fn command_message(&self) -> Option<&str> {
        match self {
            Error::Service {
                source: ServiceError::CommandFailed { message, .. },
            } => Some(message),
            _ => None,
        }
    }
}

impl From<LocateError> for Error {
    fn from(source: LocateError) -> Self {
        Error::Locate { source }
    }
}

impl From<ServiceError> for Error {
    fn from(source: ServiceError) -> Self {
        Error::Service { source }
    }
}
