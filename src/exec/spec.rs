// ABOUTME: Immutable description of one tool invocation.
// ABOUTME: Executable path plus ordered argument list.

use std::path::{Path, PathBuf};

/// One tool invocation: executable path and ordered arguments.
///
/// Built fresh per call and never mutated afterwards; the chainable
/// builder consumes `self` so a finished spec cannot be extended in place.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}
