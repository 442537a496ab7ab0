// ABOUTME: Container operations facade.
// ABOUTME: List, inspect, lifecycle actions, and log streaming.

use super::logs::LogSession;
use super::{ServiceError, run_checked};
use crate::decode::{ContainerRecord, decode_containers};
use crate::exec::{self, CommandSpec, LineStream};
use crate::tool::Tool;
use crate::types::{ContainerId, ImageRef};

/// Operations on containers, each one tool invocation.
pub struct ContainerService {
    tool: Tool,
}

impl ContainerService {
    pub fn new(tool: Tool) -> Self {
        Self { tool }
    }

    /// List containers; `all` includes stopped ones.
    pub async fn list(&self, all: bool) -> Result<Vec<ContainerRecord>, ServiceError> {
        let mut spec = self.tool.spec().arg("list");
        if all {
            spec = spec.arg("--all");
        }
        let spec = spec.arg("--format").arg("json");
        let output = run_checked(&spec).await?;
        Ok(decode_containers(&output.stdout)?)
    }

    /// Detail dump for one container, verbatim.
    ///
    /// The detail schema is the least stable surface the tool exposes, so
    /// it is treated as opaque display data rather than decoded.
    pub async fn inspect(&self, id: &ContainerId) -> Result<String, ServiceError> {
        let output = run_checked(&self.tool.spec().arg("inspect").arg(id.as_str())).await?;
        Ok(output.stdout)
    }

    /// Gracefully stop a running container.
    pub async fn stop(&self, id: &ContainerId) -> Result<(), ServiceError> {
        run_checked(&self.tool.spec().arg("stop").arg(id.as_str())).await?;
        Ok(())
    }

    /// Kill a container without a grace period.
    pub async fn force_stop(&self, id: &ContainerId) -> Result<(), ServiceError> {
        run_checked(&self.tool.spec().arg("kill").arg(id.as_str())).await?;
        Ok(())
    }

    /// Remove a container.
    pub async fn remove(&self, id: &ContainerId) -> Result<(), ServiceError> {
        run_checked(&self.tool.spec().arg("delete").arg(id.as_str())).await?;
        Ok(())
    }

    /// Run a new detached instance of an image. Returns the id the tool
    /// prints for the new container.
    pub async fn launch(
        &self,
        image: &ImageRef,
        name: Option<&str>,
    ) -> Result<ContainerId, ServiceError> {
        let mut spec = self.tool.spec().arg("run").arg("--detach");
        if let Some(name) = name {
            spec = spec.arg("--name").arg(name);
        }
        let spec = spec.arg(image.to_string());
        let output = run_checked(&spec).await?;
        Ok(ContainerId::new(output.stdout.trim()))
    }

    /// Stream a container's logs, optionally following.
    pub fn logs(&self, id: &ContainerId, follow: bool) -> Result<LineStream, ServiceError> {
        Ok(exec::stream(&self.logs_spec(id, follow))?)
    }

    /// Stateful log view over one container, restartable from any
    /// terminal state.
    pub fn log_session(&self, id: &ContainerId, follow: bool) -> LogSession {
        LogSession::new(self.logs_spec(id, follow))
    }

    fn logs_spec(&self, id: &ContainerId, follow: bool) -> CommandSpec {
        let mut spec = self.tool.spec().arg("logs");
        if follow {
            spec = spec.arg("--follow");
        }
        spec.arg(id.as_str())
    }
}
