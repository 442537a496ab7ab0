// ABOUTME: Test support utilities.
// ABOUTME: Builds stub tool executables and initializes tracing.

use std::path::PathBuf;
use std::sync::Once;

use kivotos::tool::Tool;
use tempfile::TempDir;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("kivotos=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// A stub management tool: an executable shell script standing in for the
/// real CLI, plus a scratch directory for argv/pid files.
pub struct StubTool {
    dir: TempDir,
}

#[allow(dead_code)]
impl StubTool {
    /// Write an executable `sh` script with the given body.
    pub fn new(body: &str) -> Self {
        let dir = tempfile::tempdir().expect("stub dir should be creatable");
        let path = dir.path().join("toolstub");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n"))
            .expect("stub script should be writable");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("stub script should be chmoddable");
        }
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("toolstub")
    }

    pub fn tool(&self) -> Tool {
        Tool::new(self.path())
    }

    /// Path for a file the stub script writes into.
    pub fn scratch(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
