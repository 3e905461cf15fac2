//! Lenient option loading.
//!
//! Resolver options are plain structs with defaults. They can also be read
//! from a JSON object where unknown keys and entries of the wrong type are
//! skipped and the default is kept, so loading never fails.

use serde_json::Value as JsonValue;

/// An option table that can be filled from a loosely typed JSON object.
pub trait LenientOptions: Default {
    /// Apply one entry. Returns `false` if `key` is not an option of this table.
    fn apply_entry(&mut self, key: &str, entry: &JsonValue) -> bool;

    /// Apply every entry of a JSON object.
    fn apply_json(&mut self, config: &JsonValue) {
        let Some(map) = config.as_object() else {
            tracing::debug!(kind = json_kind(config), "ignoring options that are not an object");
            return;
        };
        for (key, entry) in map {
            if !self.apply_entry(key, entry) {
                tracing::debug!(key = %key, "ignoring unrecognized option");
            }
        }
    }

    /// Defaults overridden by the valid entries of `config`.
    fn from_json(config: &JsonValue) -> Self {
        let mut options = Self::default();
        options.apply_json(config);
        options
    }
}

/// Implements `Deserialize` through [`LenientOptions::from_json`], so
/// options can be embedded in any serde format without failing on bad
/// entries.
macro_rules! lenient_deserialize {
    ($ty:ty) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                Ok(<$ty as $crate::options::LenientOptions>::from_json(&raw))
            }
        }
    };
}
pub(crate) use lenient_deserialize;

fn json_kind(entry: &JsonValue) -> &'static str {
    match entry {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn ignored(key: &str, entry: &JsonValue) {
    tracing::debug!(key = %key, kind = json_kind(entry), "ignoring option with invalid type");
}

/// Numeric policy value: a number, or `null` for indeterminate.
pub(crate) fn set_policy(slot: &mut Option<f64>, key: &str, entry: &JsonValue) {
    match entry {
        JsonValue::Null => *slot = None,
        JsonValue::Number(n) => match n.as_f64() {
            Some(value) => *slot = Some(value),
            None => ignored(key, entry),
        },
        _ => ignored(key, entry),
    }
}

/// Switch: `true`/`false`, or `1`/`0`.
pub(crate) fn set_flag(slot: &mut bool, key: &str, entry: &JsonValue) {
    match entry {
        JsonValue::Bool(b) => *slot = *b,
        JsonValue::Number(n) if n.as_f64() == Some(1.0) => *slot = true,
        JsonValue::Number(n) if n.as_f64() == Some(0.0) => *slot = false,
        _ => ignored(key, entry),
    }
}

/// String policy value: a string, or `null` for indeterminate.
pub(crate) fn set_string_policy(slot: &mut Option<String>, key: &str, entry: &JsonValue) {
    match entry {
        JsonValue::Null => *slot = None,
        JsonValue::String(s) => *slot = Some(s.clone()),
        _ => ignored(key, entry),
    }
}

/// Required string.
pub(crate) fn set_string(slot: &mut String, key: &str, entry: &JsonValue) {
    match entry {
        JsonValue::String(s) => *slot = s.clone(),
        _ => ignored(key, entry),
    }
}

/// List of strings. A list with any non-string member is ignored whole.
pub(crate) fn set_string_list(slot: &mut Vec<String>, key: &str, entry: &JsonValue) {
    let strings = entry.as_array().and_then(|items| {
        items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
    });
    match strings {
        Some(strings) => *slot = strings,
        None => ignored(key, entry),
    }
}
