//! Codec for list-valued columns stored as JSON text.
//!
//! Every list field (purchases, team members, devlogs, tags, ...) goes through this module.
//! Decoding is lenient toward the shapes older data was written in: a JSON array, a JSON
//! string that itself contains an array, or single-quoted pseudo-JSON. Anything else decodes
//! to an empty list and is logged, so one malformed row never fails a whole request.

use serde::{de::DeserializeOwned, Serialize};

use crate::server::error::internal::InternalError;

/// Decodes a stored JSON list, falling back to an empty list.
///
/// # Arguments
/// - `raw` - Column value as stored
/// - `field` - Field name used in the warning log
///
/// # Returns
/// - `Vec<T>` - Decoded items, or empty when the value is blank or unparseable
pub fn decode_list<T: DeserializeOwned>(raw: &str, field: &'static str) -> Vec<T> {
    match try_decode_list(raw) {
        Some(list) => list,
        None => {
            tracing::warn!(field, value = raw, "Discarding unparseable list value");
            Vec::new()
        }
    }
}

fn try_decode_list<T: DeserializeOwned>(raw: &str) -> Option<Vec<T>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Some(Vec::new());
    }

    if let Ok(list) = serde_json::from_str::<Vec<T>>(trimmed) {
        return Some(list);
    }

    // Double-encoded: a JSON string holding the array text.
    if let Ok(inner) = serde_json::from_str::<String>(trimmed) {
        if let Ok(list) = serde_json::from_str::<Vec<T>>(inner.trim()) {
            return Some(list);
        }
    }

    serde_json::from_str::<Vec<T>>(&trimmed.replace('\'', "\"")).ok()
}

/// Decodes a list of plain strings where a lone bare string means a one-element list.
///
/// Used for settings such as the admin allow-list, which has been stored both as
/// `["U1","U2"]` and as `U1`.
pub fn decode_string_list(raw: &str) -> Vec<String> {
    if let Some(list) = try_decode_list::<String>(raw) {
        return list;
    }

    let single = raw.trim().trim_matches(|c| c == '"' || c == '\'').trim();
    if single.is_empty() || single.starts_with('[') {
        tracing::warn!(value = raw, "Discarding unparseable string list");
        return Vec::new();
    }

    vec![single.to_string()]
}

/// Encodes a list for storage.
///
/// # Returns
/// - `Ok(String)` - JSON array text
/// - `Err(InternalError::EncodeList)` - The items could not be serialized
pub fn encode_list<T: Serialize>(items: &[T], field: &'static str) -> Result<String, InternalError> {
    serde_json::to_string(items).map_err(|source| InternalError::EncodeList { field, source })
}
