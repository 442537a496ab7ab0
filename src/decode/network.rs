// ABOUTME: Network list payload decoding.
// ABOUTME: Flat name/subnet/gateway objects; subnets stay CIDR-formatted.

use serde::Deserialize;

use super::error::DecodeError;
use super::records::NetworkRecord;
use crate::types::NetworkName;

#[derive(Debug, Deserialize)]
struct NetworkWire {
    name: Option<String>,
    #[serde(alias = "ipv4_subnet", alias = "cidr")]
    subnet: Option<String>,
    #[serde(alias = "ipv6_subnet", alias = "subnetV6")]
    subnet_v6: Option<String>,
}

/// Decode a network list payload. Entries without a name are dropped with
/// a warning.
pub fn decode_networks(raw: &str) -> Result<Vec<NetworkRecord>, DecodeError> {
    let wires: Vec<NetworkWire> =
        serde_json::from_str(raw).map_err(|source| DecodeError::MalformedPayload { source })?;

    Ok(wires
        .into_iter()
        .filter_map(|wire| match into_record(wire) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("dropping network entry: {}", e);
                None
            }
        })
        .collect())
}

fn into_record(wire: NetworkWire) -> Result<NetworkRecord, DecodeError> {
    let name = wire
        .name
        .filter(|n| !n.is_empty())
        .ok_or(DecodeError::SchemaMismatch { field: "name" })?;

    Ok(NetworkRecord {
        name: NetworkName::new(name),
        subnet: wire.subnet,
        subnet_v6: wire.subnet_v6,
    })
}
