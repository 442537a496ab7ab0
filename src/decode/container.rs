// ABOUTME: Container list payload decoding.
// ABOUTME: Nested configuration object, status string, network attachments.

use serde::Deserialize;

use super::error::DecodeError;
use super::records::{ContainerRecord, LifecycleState};
use crate::types::ContainerId;

#[derive(Debug, Deserialize)]
struct ContainerWire {
    #[serde(alias = "config")]
    configuration: Option<ConfigurationWire>,
    #[serde(alias = "state")]
    status: Option<String>,
    #[serde(default, alias = "attachments")]
    networks: Vec<AttachmentWire>,
}

#[derive(Debug, Deserialize)]
struct ConfigurationWire {
    id: Option<String>,
    #[serde(alias = "hostname")]
    name: Option<String>,
    image: Option<ImageRefWire>,
}

#[derive(Debug, Deserialize)]
struct ImageRefWire {
    #[serde(alias = "name")]
    reference: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AttachmentWire {
    #[serde(alias = "ipv4_address", alias = "ip")]
    address: Option<String>,
}

/// Decode a container list payload.
///
/// Entries without an id are dropped with a warning; everything else is
/// tolerated (unknown fields ignored, missing optionals left absent).
pub fn decode_containers(raw: &str) -> Result<Vec<ContainerRecord>, DecodeError> {
    let wires: Vec<ContainerWire> =
        serde_json::from_str(raw).map_err(|source| DecodeError::MalformedPayload { source })?;

    Ok(wires
        .into_iter()
        .filter_map(|wire| match into_record(wire) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("dropping container entry: {}", e);
                None
            }
        })
        .collect())
}

fn into_record(wire: ContainerWire) -> Result<ContainerRecord, DecodeError> {
    let configuration = wire.configuration.unwrap_or(ConfigurationWire {
        id: None,
        name: None,
        image: None,
    });

    let id = configuration
        .id
        .filter(|id| !id.is_empty())
        .ok_or(DecodeError::SchemaMismatch { field: "id" })?;

    let display_name = configuration.name.unwrap_or_else(|| id.clone());

    let image_reference = configuration
        .image
        .and_then(|i| i.reference)
        .unwrap_or_default();

    let lifecycle_state = wire
        .status
        .as_deref()
        .map(LifecycleState::parse)
        .unwrap_or(LifecycleState::Unknown);

    let ip_address = wire
        .networks
        .into_iter()
        .find_map(|a| a.address)
        .map(|a| strip_cidr_suffix(&a).to_string());

    Ok(ContainerRecord {
        id: ContainerId::new(id),
        display_name,
        image_reference,
        lifecycle_state,
        ip_address,
    })
}

/// Addresses may arrive CIDR-suffixed (`10.0.0.5/24`); display wants the
/// bare address.
fn strip_cidr_suffix(address: &str) -> &str {
    address.split('/').next().unwrap_or(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_configuration_shape() {
        let raw = r#"[{"configuration":{"id":"c1","image":{"reference":"alpine:latest"}},"status":"running","networks":[{"address":"10.0.0.5/24"}]}]"#;
        let records = decode_containers(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_str(), "c1");
        assert_eq!(records[0].display_name, "c1");
        assert_eq!(records[0].image_reference, "alpine:latest");
        assert_eq!(records[0].lifecycle_state, LifecycleState::Running);
        assert_eq!(records[0].ip_address.as_deref(), Some("10.0.0.5"));
    }

    #[test]
    fn tolerates_alias_keys_and_unknown_fields() {
        let raw = r#"[{"config":{"id":"c2","name":"web"},"state":"paused","extra":42,"attachments":[{"ip":"192.168.1.9"}]}]"#;
        let records = decode_containers(raw).unwrap();
        assert_eq!(records[0].display_name, "web");
        assert_eq!(records[0].lifecycle_state, LifecycleState::Paused);
        assert_eq!(records[0].ip_address.as_deref(), Some("192.168.1.9"));
    }

    #[test]
    fn drops_entry_without_id() {
        let raw = r#"[{"configuration":{"id":"c1"},"status":"running"},{"configuration":{},"status":"running"}]"#;
        let records = decode_containers(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_str(), "c1");
    }

    #[test]
    fn unrecognized_status_never_fails_the_decode() {
        let raw = r#"[{"configuration":{"id":"c1"},"status":"defrosting"}]"#;
        let records = decode_containers(raw).unwrap();
        assert_eq!(records[0].lifecycle_state, LifecycleState::Unknown);
    }

    #[test]
    fn missing_status_is_unknown() {
        let raw = r#"[{"configuration":{"id":"c1"}}]"#;
        let records = decode_containers(raw).unwrap();
        assert_eq!(records[0].lifecycle_state, LifecycleState::Unknown);
    }

    #[test]
    fn malformed_payload_is_fatal() {
        assert!(matches!(
            decode_containers("not json"),
            Err(DecodeError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn cidr_suffix_stripped_only_for_display() {
        assert_eq!(strip_cidr_suffix("10.0.0.5/24"), "10.0.0.5");
        assert_eq!(strip_cidr_suffix("10.0.0.5"), "10.0.0.5");
    }
}
