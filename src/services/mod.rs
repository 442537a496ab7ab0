// ABOUTME: Operation-oriented facades, one per resource kind.
// ABOUTME: Compose the runner and decoder; map non-zero exits to CommandFailed.

mod container;
mod error;
mod image;
mod logs;
mod network;
mod system;
mod volume;

pub use container::ContainerService;
pub use error::ServiceError;
pub use image::ImageService;
pub use logs::{LogSession, LogSessionState};
pub use network::NetworkService;
pub use system::SystemService;
pub use volume::VolumeService;

use crate::exec::{self, CommandSpec, ExecOutput};

/// Run a spec and require exit zero.
///
/// A non-zero exit becomes `CommandFailed` carrying the trimmed stderr as
/// the user-facing message.
pub(crate) async fn run_checked(spec: &CommandSpec) -> Result<ExecOutput, ServiceError> {
    let output = exec::run(spec).await?;
    if output.success() {
        Ok(output)
    } else {
        Err(ServiceError::CommandFailed {
            exit_code: output.exit_code,
            message: output.stderr.trim().to_string(),
        })
    }
}
