// ABOUTME: Runner-level error types.
// ABOUTME: Distinguishes a missing tool from an OS spawn refusal.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from spawning or reading the management tool.
///
/// A non-zero exit is not an error at this level; it is returned as data
/// and classified by the calling service.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("management tool not found: {0}")]
    ToolNotFound(PathBuf),

    #[error("failed to launch {program}: {source}")]
    LaunchFailure {
        program: String,
        source: std::io::Error,
    },

    #[error("failed to capture tool output: {source}")]
    OutputCapture { source: std::io::Error },
}
