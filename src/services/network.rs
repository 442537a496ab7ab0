// ABOUTME: Network operations facade.
// ABOUTME: List and inspect.

use super::{ServiceError, run_checked};
use crate::decode::{NetworkRecord, decode_networks};
use crate::tool::Tool;
use crate::types::NetworkName;

pub struct NetworkService {
    tool: Tool,
}

impl NetworkService {
    pub fn new(tool: Tool) -> Self {
        Self { tool }
    }

    pub async fn list(&self) -> Result<Vec<NetworkRecord>, ServiceError> {
        let spec = self
            .tool
            .spec()
            .arg("network")
            .arg("list")
            .arg("--format")
            .arg("json");
        let output = run_checked(&spec).await?;
        Ok(decode_networks(&output.stdout)?)
    }

    /// Detail dump for one network, verbatim.
    pub async fn inspect(&self, name: &NetworkName) -> Result<String, ServiceError> {
        let output = run_checked(
            &self
                .tool
                .spec()
                .arg("network")
                .arg("inspect")
                .arg(name.as_str()),
        )
        .await?;
        Ok(output.stdout)
    }
}
