// ABOUTME: Volume list payload decoding.
// ABOUTME: Flat name/driver/source objects.

use serde::Deserialize;

use super::error::DecodeError;
use super::records::VolumeRecord;
use crate::types::VolumeName;

#[derive(Debug, Deserialize)]
struct VolumeWire {
    name: Option<String>,
    driver: Option<String>,
    #[serde(alias = "mountpoint", alias = "mount_point")]
    source: Option<String>,
}

/// Decode a volume list payload. Entries without a name are dropped with
/// a warning; a missing driver defaults to `local`.
pub fn decode_volumes(raw: &str) -> Result<Vec<VolumeRecord>, DecodeError> {
    let wires: Vec<VolumeWire> =
        serde_json::from_str(raw).map_err(|source| DecodeError::MalformedPayload { source })?;

    Ok(wires
        .into_iter()
        .filter_map(|wire| match into_record(wire) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("dropping volume entry: {}", e);
                None
            }
        })
        .collect())
}

fn into_record(wire: VolumeWire) -> Result<VolumeRecord, DecodeError> {
    let name = wire
        .name
        .filter(|n| !n.is_empty())
        .ok_or(DecodeError::SchemaMismatch { field: "name" })?;

    Ok(VolumeRecord {
        name: VolumeName::new(name),
        driver: wire.driver.unwrap_or_else(|| "local".to_string()),
        source: wire.source,
    })
}
