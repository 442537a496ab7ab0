// ABOUTME: Typed domain records produced by the decoder.
// ABOUTME: Rebuilt fresh on every call; identity is a natural key.

use std::fmt;

use crate::types::{ContainerId, NetworkName, VolumeName};

/// Enumerated run-state of a managed container.
///
/// Always resolves to a known value; an unrecognized status string from a
/// newer or older tool decodes as `Unknown` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Created,
    Running,
    Paused,
    Stopping,
    Stopped,
    Exited,
    Unknown,
}

impl LifecycleState {
    pub fn parse(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "created" => LifecycleState::Created,
            "running" => LifecycleState::Running,
            "paused" => LifecycleState::Paused,
            "stopping" => LifecycleState::Stopping,
            "stopped" => LifecycleState::Stopped,
            "exited" => LifecycleState::Exited,
            _ => LifecycleState::Unknown,
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LifecycleState::Created => "created",
            LifecycleState::Running => "running",
            LifecycleState::Paused => "paused",
            LifecycleState::Stopping => "stopping",
            LifecycleState::Stopped => "stopped",
            LifecycleState::Exited => "exited",
            LifecycleState::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Summary of one container from a list response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRecord {
    pub id: ContainerId,
    /// Human-facing name; falls back to the id when the tool omits one.
    pub display_name: String,
    pub image_reference: String,
    pub lifecycle_state: LifecycleState,
    /// First attached address, CIDR suffix stripped.
    pub ip_address: Option<String>,
}

/// Summary of one image from a list response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Full reference as reported by the tool.
    pub reference: String,
    pub repository: String,
    pub tag: String,
    pub digest: Option<String>,
    /// Filled by two-stage enrichment when the list shape omits it.
    pub size_bytes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeRecord {
    pub name: VolumeName,
    pub driver: String,
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRecord {
    pub name: NetworkName,
    pub subnet: Option<String>,
    pub subnet_v6: Option<String>,
}
