// ABOUTME: Service-level error type.
// ABOUTME: Non-zero exits surface the tool's own stderr message.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::exec::ExecError;

/// Errors from a service operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The tool ran but exited non-zero. The message is the trimmed
    /// stderr, suitable for direct display.
    #[error("{message}")]
    CommandFailed { exit_code: i32, message: String },

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
