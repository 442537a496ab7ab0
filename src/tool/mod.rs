// ABOUTME: Management tool resolution.
// ABOUTME: Explicit override, then env var, then PATH candidates in order.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::exec::CommandSpec;

/// Environment variable naming an explicit tool executable.
pub const TOOL_ENV_VAR: &str = "KIVOTOS_TOOL";

/// Candidate binary names probed on `$PATH`, in preference order.
const CANDIDATES: [&str; 3] = ["container", "podman", "docker"];

/// Error during tool resolution.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error(
        "no container management tool found (checked $KIVOTOS_TOOL and container, podman, docker on PATH)"
    )]
    NoToolFound,
}

/// A resolved management tool executable.
///
/// Resolution happens once; whether the path still exists is re-checked on
/// every invocation, so a tool removed after resolution surfaces as
/// `ToolNotFound` at call time.
#[derive(Debug, Clone)]
pub struct Tool {
    path: PathBuf,
}

impl Tool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start a fresh invocation spec for this tool.
    pub fn spec(&self) -> CommandSpec {
        CommandSpec::new(&self.path)
    }
}

/// Resolve the tool executable.
///
/// Resolution order:
/// 1. Explicit override path
/// 2. `$KIVOTOS_TOOL` — a path is taken as-is, a bare binary name is
///    searched on `$PATH`
/// 3. First of `container`, `podman`, `docker` found on `$PATH`
pub fn locate(override_path: Option<&Path>) -> Result<Tool, LocateError> {
    if let Some(path) = override_path {
        return Ok(Tool::new(path));
    }

    if let Ok(value) = std::env::var(TOOL_ENV_VAR)
        && !value.is_empty()
    {
        return resolve_name_or_path(&value);
    }

    for candidate in CANDIDATES {
        if let Some(found) = search_path(candidate) {
            return Ok(Tool::new(found));
        }
    }

    Err(LocateError::NoToolFound)
}

// A value with a path separator is an explicit location; a bare name is
// searched on $PATH like the built-in candidates.
fn resolve_name_or_path(value: &str) -> Result<Tool, LocateError> {
    if value.contains(std::path::MAIN_SEPARATOR) {
        return Ok(Tool::new(value));
    }
    search_path(value)
        .map(Tool::new)
        .ok_or(LocateError::NoToolFound)
}

fn search_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_takes_precedence() {
        let tool = locate(Some(Path::new("/opt/tools/mytool"))).expect("override should resolve");
        assert_eq!(tool.path(), Path::new("/opt/tools/mytool"));
    }

    #[test]
    fn path_value_is_taken_as_is() {
        let tool = resolve_name_or_path("/opt/tools/mytool").expect("path should resolve");
        assert_eq!(tool.path(), Path::new("/opt/tools/mytool"));
    }

    #[cfg(unix)]
    #[test]
    fn bare_name_is_searched_on_path() {
        let tool = resolve_name_or_path("sh").expect("sh should be on PATH");
        assert!(tool.path().is_absolute());
        assert_eq!(tool.path().file_name(), Some(std::ffi::OsStr::new("sh")));
        assert!(tool.path().is_file());
    }

    #[test]
    fn unknown_bare_name_fails_resolution() {
        let err = resolve_name_or_path("kivotos-no-such-binary")
            .expect_err("unknown name should not resolve");
        assert!(matches!(err, LocateError::NoToolFound));
    }

    #[test]
    fn spec_starts_from_tool_path() {
        let tool = Tool::new("/usr/bin/container");
        let spec = tool.spec().arg("list");
        assert_eq!(spec.program(), Path::new("/usr/bin/container"));
        assert_eq!(spec.args(), ["list"]);
    }
}
