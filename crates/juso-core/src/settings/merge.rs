//! Deep merge over JSON-shaped settings documents.
//!
//! Objects combine key by key; arrays and scalars replace wholesale. The
//! typed helpers round-trip a schema through `serde_json::Value` so the same
//! algorithm serves every [`SettingsSchema`].

use serde::Serialize;
use serde_json::{Map, Value};

use super::{SettingsError, SettingsSchema};

/// Merge `partial` into `current` in place.
///
/// For each key of `partial`: when both sides hold objects, recurse;
/// otherwise the value from `partial` replaces the current one. Keys that
/// only exist in `current` are left untouched.
pub fn deep_merge(current: &mut Value, partial: Value) {
    match (current, partial) {
        (Value::Object(current), Value::Object(partial)) => {
            for (key, value) in partial {
                match current.get_mut(&key) {
                    Some(existing) if existing.is_object() && value.is_object() => {
                        deep_merge(existing, value);
                    }
                    _ => {
                        current.insert(key, value);
                    }
                }
            }
        }
        (current, partial) => *current = partial,
    }
}

/// Produce a new document with `partial` deep-merged into `current`.
pub fn merge_partial<T: SettingsSchema>(
    current: &T,
    partial: &T::Partial,
) -> Result<T, SettingsError> {
    let mut document = serde_json::to_value(current)?;
    deep_merge(&mut document, serde_json::to_value(partial)?);
    Ok(serde_json::from_value(document)?)
}

/// Build a document from stored entries, filling absent keys from defaults.
///
/// Null entries count as absent.
pub fn apply_defaults<T: SettingsSchema>(stored: Map<String, Value>) -> Result<T, SettingsError> {
    let stored: Map<String, Value> = stored
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .collect();

    let mut document = serde_json::to_value(T::defaults())?;
    deep_merge(&mut document, Value::Object(stored));
    Ok(serde_json::from_value(document)?)
}

/// Split a document into its top-level store entries.
pub fn to_entries<T: Serialize>(document: &T) -> Result<Map<String, Value>, SettingsError> {
    match serde_json::to_value(document)? {
        Value::Object(entries) => Ok(entries),
        other => Err(SettingsError::Serialization(format!(
            "settings document must serialize to an object, got {other}"
        ))),
    }
}
