// ABOUTME: Volume operations facade.
// ABOUTME: List and inspect.

use super::{ServiceError, run_checked};
use crate::decode::{VolumeRecord, decode_volumes};
use crate::tool::Tool;
use crate::types::VolumeName;

pub struct VolumeService {
    tool: Tool,
}

impl VolumeService {
    pub fn new(tool: Tool) -> Self {
        Self { tool }
    }

    pub async fn list(&self) -> Result<Vec<VolumeRecord>, ServiceError> {
        let spec = self
            .tool
            .spec()
            .arg("volume")
            .arg("list")
            .arg("--format")
            .arg("json");
        let output = run_checked(&spec).await?;
        Ok(decode_volumes(&output.stdout)?)
    }

    /// Detail dump for one volume, verbatim.
    pub async fn inspect(&self, name: &VolumeName) -> Result<String, ServiceError> {
        let output =
            run_checked(&self.tool.spec().arg("volume").arg("inspect").arg(name.as_str())).await?;
        Ok(output.stdout)
    }
}
