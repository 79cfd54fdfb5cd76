//! File descriptors and the `/api/files/{game}` response body.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Metadata for one downloadable file, exactly as the backend reports it.
///
/// Size and timestamp arrive pre-formatted; nothing here reformats them.
/// Every field is lenient: `null` or a missing string is empty, and a
/// scalar of another type is kept as its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Raw size in bytes. Carried through, never rendered.
    #[serde(
        default,
        deserialize_with = "lenient_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<u64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub size_human: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub modified: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Byte count from an integer, a non-negative float or a numeric string.
fn lenient_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Extract the file list from a listing body.
///
/// A body that is not JSON, or is JSON `null`, is an error. A missing
/// `files` key, a `files` value that is not an array, or an error payload
/// such as `{"error": "Game not found"}` all yield an empty list. Entries
/// are decoded one by one; an entry that is not an object is dropped
/// without affecting its siblings.
pub fn parse_listing(body: &str) -> Result<Vec<FileDescriptor>, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    if value.is_null() {
        return Err(serde::de::Error::custom("listing body is null"));
    }
    let Some(entries) = value.get("files").and_then(Value::as_array) else {
        log::debug!("listing has no files array");
        return Ok(Vec::new());
    };
    Ok(entries
        .iter()
        .filter_map(|entry| match FileDescriptor::deserialize(entry) {
            Ok(file) => Some(file),
            Err(e) => {
                log::debug!("skipping malformed listing entry: {}", e);
                None
            }
        })
        .collect())
}
