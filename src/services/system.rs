// ABOUTME: System-level operations facade.
// ABOUTME: Tool status and system-wide log streaming.

use super::logs::LogSession;
use super::{ServiceError, run_checked};
use crate::exec::{self, CommandSpec, LineStream};
use crate::tool::Tool;

pub struct SystemService {
    tool: Tool,
}

impl SystemService {
    pub fn new(tool: Tool) -> Self {
        Self { tool }
    }

    /// Status dump from the tool, verbatim.
    pub async fn status(&self) -> Result<String, ServiceError> {
        let output = run_checked(&self.tool.spec().arg("system").arg("status")).await?;
        Ok(output.stdout)
    }

    /// Stream the tool's system-wide logs, optionally following.
    pub fn logs(&self, follow: bool) -> Result<LineStream, ServiceError> {
        Ok(exec::stream(&self.logs_spec(follow))?)
    }

    /// Stateful log view over the system logs.
    pub fn log_session(&self, follow: bool) -> LogSession {
        LogSession::new(self.logs_spec(follow))
    }

    fn logs_spec(&self, follow: bool) -> CommandSpec {
        let mut spec = self.tool.spec().arg("system").arg("logs");
        if follow {
            spec = spec.arg("--follow");
        }
        spec
    }
}
