// ABOUTME: Decoder error types.
// ABOUTME: Separates unparseable payloads from missing required fields.

use thiserror::Error;

/// Errors from decoding tool output.
///
/// `MalformedPayload` is fatal to the whole call. `SchemaMismatch` on a
/// required identity field drops only the offending record from a list;
/// missing optional fields are not errors at all.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed tool payload: {source}")]
    MalformedPayload {
        #[source]
        source: serde_json::Error,
    },

    #[error("payload entry missing required field: {field}")]
    SchemaMismatch { field: &'static str },
}
