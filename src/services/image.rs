// ABOUTME: Image operations facade.
// ABOUTME: List, inspect, pull, remove, tag, and two-stage size enrichment.

use futures::future::join_all;

use super::{ServiceError, run_checked};
use crate::decode::{ImageDetail, ImageRecord, decode_image_detail, decode_images};
use crate::tool::Tool;
use crate::types::ImageRef;

/// Operations on images, each one tool invocation.
pub struct ImageService {
    tool: Tool,
}

impl ImageService {
    pub fn new(tool: Tool) -> Self {
        Self { tool }
    }

    /// List local images. The list shape is cheap and may omit sizes;
    /// see [`enrich`](Self::enrich).
    pub async fn list(&self) -> Result<Vec<ImageRecord>, ServiceError> {
        let spec = self
            .tool
            .spec()
            .arg("image")
            .arg("list")
            .arg("--format")
            .arg("json");
        let output = run_checked(&spec).await?;
        Ok(decode_images(&output.stdout)?)
    }

    /// Detail dump for one image, verbatim.
    pub async fn inspect(&self, reference: &str) -> Result<String, ServiceError> {
        let output =
            run_checked(&self.tool.spec().arg("image").arg("inspect").arg(reference)).await?;
        Ok(output.stdout)
    }

    pub async fn pull(&self, image: &ImageRef) -> Result<(), ServiceError> {
        run_checked(
            &self
                .tool
                .spec()
                .arg("image")
                .arg("pull")
                .arg(image.to_string()),
        )
        .await?;
        Ok(())
    }

    pub async fn remove(&self, reference: &str) -> Result<(), ServiceError> {
        run_checked(&self.tool.spec().arg("image").arg("remove").arg(reference)).await?;
        Ok(())
    }

    pub async fn tag(&self, reference: &str, target: &ImageRef) -> Result<(), ServiceError> {
        run_checked(
            &self
                .tool
                .spec()
                .arg("image")
                .arg("tag")
                .arg(reference)
                .arg(target.to_string()),
        )
        .await?;
        Ok(())
    }

    /// Supplementary detail for one image (digest, size).
    pub async fn detail(&self, reference: &str) -> Result<Option<ImageDetail>, ServiceError> {
        let spec = self
            .tool
            .spec()
            .arg("image")
            .arg("inspect")
            .arg(reference)
            .arg("--format")
            .arg("json");
        let output = run_checked(&spec).await?;
        Ok(decode_image_detail(&output.stdout)?)
    }

    /// Second stage of list decoding: fetch per-record details
    /// concurrently and merge sizes and digests into the base records.
    ///
    /// The base list stays usable on its own; a failed detail fetch leaves
    /// that record untouched.
    pub async fn enrich(&self, records: Vec<ImageRecord>) -> Vec<ImageRecord> {
        let fetches = records.into_iter().map(|mut record| async move {
            match self.detail(&record.reference).await {
                Ok(Some(detail)) => {
                    if record.size_bytes.is_none() {
                        record.size_bytes = detail.size_bytes;
                    }
                    if record.digest.is_none() {
                        record.digest = detail.digest;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!("detail fetch for {} skipped: {}", record.reference, e);
                }
            }
            record
        });
        join_all(fetches).await
    }
}
