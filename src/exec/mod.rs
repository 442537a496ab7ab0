// ABOUTME: Subprocess execution for the management tool.
// ABOUTME: One-shot capture and cancellable line streaming.

mod error;
mod runner;
mod spec;
mod stream;

pub use error::ExecError;
pub use runner::{ExecOutput, run, stream};
pub use spec::CommandSpec;
pub use stream::{LineStream, LogLine, LogSource};
