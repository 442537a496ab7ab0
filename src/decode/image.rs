// ABOUTME: Image list and detail payload decoding.
// ABOUTME: Reference split into repository:tag; descriptor carries digest and size.

use serde::Deserialize;

use super::error::DecodeError;
use super::records::ImageRecord;
use crate::types::ImageRef;

#[derive(Debug, Deserialize)]
struct ImageWire {
    #[serde(alias = "name")]
    reference: Option<String>,
    descriptor: Option<DescriptorWire>,
}

#[derive(Debug, Deserialize)]
struct DescriptorWire {
    digest: Option<String>,
    #[serde(alias = "size_bytes")]
    size: Option<u64>,
}

/// Supplementary fields from a per-image detail query, merged into a base
/// record by two-stage enrichment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageDetail {
    pub digest: Option<String>,
    pub size_bytes: Option<u64>,
}

/// Decode an image list payload. Entries without a reference are dropped
/// with a warning.
pub fn decode_images(raw: &str) -> Result<Vec<ImageRecord>, DecodeError> {
    let wires: Vec<ImageWire> =
        serde_json::from_str(raw).map_err(|source| DecodeError::MalformedPayload { source })?;

    Ok(wires
        .into_iter()
        .filter_map(|wire| match into_record(wire) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("dropping image entry: {}", e);
                None
            }
        })
        .collect())
}

/// Decode a per-image detail payload. Tools report either a single object
/// or an array of one; both shapes are accepted.
pub fn decode_image_detail(raw: &str) -> Result<Option<ImageDetail>, DecodeError> {
    let wire = match serde_json::from_str::<Vec<ImageWire>>(raw) {
        Ok(mut wires) => {
            if wires.is_empty() {
                return Ok(None);
            }
            wires.remove(0)
        }
        Err(array_err) => serde_json::from_str::<ImageWire>(raw)
            .map_err(|_| DecodeError::MalformedPayload { source: array_err })?,
    };

    let descriptor = wire.descriptor.unwrap_or(DescriptorWire {
        digest: None,
        size: None,
    });
    Ok(Some(ImageDetail {
        digest: descriptor.digest,
        size_bytes: descriptor.size,
    }))
}

fn into_record(wire: ImageWire) -> Result<ImageRecord, DecodeError> {
    let reference = wire
        .reference
        .filter(|r| !r.trim().is_empty())
        .ok_or(DecodeError::SchemaMismatch { field: "reference" })?;

    // Reference was checked non-empty above, so parse cannot fail; fall
    // back to the raw string if the rule ever changes.
    let (repository, tag) = match ImageRef::parse(&reference) {
        Ok(parsed) => (parsed.repository().to_string(), parsed.tag().to_string()),
        Err(_) => (reference.clone(), "latest".to_string()),
    };

    let descriptor = wire.descriptor.unwrap_or(DescriptorWire {
        digest: None,
        size: None,
    });

    Ok(ImageRecord {
        reference,
        repository,
        tag,
        digest: descriptor.digest,
        size_bytes: descriptor.size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_reference_and_descriptor() {
        let raw = r#"[{"reference":"alpine:3.18","descriptor":{"digest":"sha256:abc","size":7340032}}]"#;
        let records = decode_images(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].reference, "alpine:3.18");
        assert_eq!(records[0].repository, "alpine");
        assert_eq!(records[0].tag, "3.18");
        assert_eq!(records[0].digest.as_deref(), Some("sha256:abc"));
        assert_eq!(records[0].size_bytes, Some(7340032));
    }

    #[test]
    fn missing_tag_defaults_to_latest() {
        let raw = r#"[{"reference":"alpine"}]"#;
        let records = decode_images(raw).unwrap();
        assert_eq!(records[0].repository, "alpine");
        assert_eq!(records[0].tag, "latest");
        assert_eq!(records[0].size_bytes, None);
    }

    #[test]
    fn drops_entry_without_reference() {
        let raw = r#"[{"descriptor":{"size":1}},{"reference":"busybox:1.36"}]"#;
        let records = decode_images(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].reference, "busybox:1.36");
    }

    #[test]
    fn detail_accepts_object_or_array_of_one() {
        let object = r#"{"reference":"alpine:3.18","descriptor":{"size":42}}"#;
        let array = r#"[{"reference":"alpine:3.18","descriptor":{"size":42}}]"#;
        for raw in [object, array] {
            let detail = decode_image_detail(raw).unwrap().unwrap();
            assert_eq!(detail.size_bytes, Some(42));
        }
    }

    #[test]
    fn detail_empty_array_is_none() {
        assert_eq!(decode_image_detail("[]").unwrap(), None);
    }

    #[test]
    fn detail_malformed_is_fatal() {
        assert!(matches!(
            decode_image_detail("{broken"),
            Err(DecodeError::MalformedPayload { .. })
        ));
    }
}
