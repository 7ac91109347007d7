//! Encoded document helpers
//!
//! Decode a JSON document, run one of the entry points over it, encode the
//! result. A selection that matches nothing encodes as `null`.

use bytes::Bytes;
use serde_json::Value;

use crate::config::OutputFormat;
use crate::error::{FieldsError, FieldsResult};

/// Decode a JSON document into a tree
///
/// # Errors
///
/// Returns `FieldsError::Parse` if the input is not valid JSON.
pub fn decode(input: impl AsRef<[u8]>) -> FieldsResult<Value> {
    serde_json::from_slice(input.as_ref()).map_err(FieldsError::parse)
}

/// Encode a tree as a JSON document
///
/// # Errors
///
/// Returns `FieldsError::Render` if serialization fails.
pub fn encode(value: &Value, format: OutputFormat) -> FieldsResult<Bytes> {
    let encoded = match format {
        OutputFormat::Compact => serde_json::to_vec(value),
        OutputFormat::Pretty => serde_json::to_vec_pretty(value),
    };
    encoded.map(Bytes::from).map_err(FieldsError::render)
}

/// Keep only the fields named by `paths` in an encoded document
///
/// # Errors
///
/// Returns `FieldsError::Parse` for invalid input and `FieldsError::Render`
/// if the result cannot be encoded.
pub fn select_document<I, S>(
    paths: I,
    input: impl AsRef<[u8]>,
    format: OutputFormat,
) -> FieldsResult<Bytes>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let data = decode(input)?;
    encode(&crate::select_fields(paths, &data), format)
}

/// Remove the fields named by `paths` from an encoded document
///
/// # Errors
///
/// Returns `FieldsError::Parse` for invalid input and `FieldsError::Render`
/// if the result cannot be encoded.
pub fn exclude_document<I, S>(
    paths: I,
    input: impl AsRef<[u8]>,
    format: OutputFormat,
) -> FieldsResult<Bytes>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut data = decode(input)?;
    encode(crate::exclude_fields(paths, &mut data), format)
}
