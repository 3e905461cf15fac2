//! Value literals typed on the command line.
//!
//! A literal is JSON, one of the tokens `undefined`, `NaN`, `Infinity` and
//! `-Infinity`, or anything else taken verbatim as a string. JSON objects
//! describe wrappers and accessor functions:
//!
//! | literal | value |
//! |---|---|
//! | `{"valueOf": 101, "toString": "one oh one"}` | wrapper with both accessors |
//! | `{"valueOf": {"$throw": "boom"}}` | wrapper whose value accessor fails |
//! | `{"$fn": 5}` | function returning `5` |
//! | `{}`, `[1, 2]` | wrapper without accessors |

use core_types::{AccessorError, AccessorResult, Object, Value};
use serde_json::Value as JsonValue;

/// Parse one literal. Never fails: unparseable input is a string.
///
/// # Example
/// ```
/// use conversely_cli::parse_literal;
/// use core_types::Value;
///
/// assert_eq!(parse_literal("12"), Value::Smi(12));
/// assert_eq!(parse_literal("\"12\""), Value::from("12"));
/// assert_eq!(parse_literal("twelve"), Value::from("twelve"));
/// assert!(parse_literal(r#"{"valueOf": 12}"#).is_object());
/// ```
pub fn parse_literal(input: &str) -> Value {
    match input.trim() {
        "undefined" => return Value::Undefined,
        "NaN" => return Value::Double(f64::NAN),
        "Infinity" => return Value::Double(f64::INFINITY),
        "-Infinity" => return Value::Double(f64::NEG_INFINITY),
        _ => {}
    }
    match serde_json::from_str::<JsonValue>(input) {
        Ok(json) => from_json(&json),
        Err(_) => Value::from(input),
    }
}

/// Convert parsed JSON into a runtime value.
pub fn from_json(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Boolean(*b),
        JsonValue::Number(n) => match n.as_i64().and_then(|i| i32::try_from(i).ok()) {
            Some(smi) => Value::Smi(smi),
            None => Value::Double(n.as_f64().unwrap_or(f64::NAN)),
        },
        JsonValue::String(s) => Value::from(s.as_str()),
        JsonValue::Array(_) => Object::empty().into_value(),
        JsonValue::Object(map) => {
            if let Some(body) = map.get("$fn") {
                return Value::function(accessor(body));
            }
            let mut object = Object::new();
            if let Some(body) = map.get("valueOf") {
                object = object.with_value_of(accessor(body));
            }
            if let Some(body) = map.get("toString") {
                object = object.with_string_of(accessor(body));
            }
            object.into_value()
        }
    }
}

/// Accessor body: `{"$throw": message}` fails, anything else is returned.
fn accessor(body: &JsonValue) -> impl Fn() -> AccessorResult + 'static {
    let outcome = match body.get("$throw") {
        Some(JsonValue::String(message)) => Err(AccessorError::thrown(message.as_str())),
        Some(other) => Err(AccessorError::thrown(other.to_string())),
        None => Ok(body.clone()),
    };
    move || match &outcome {
        Ok(body) => Ok(from_json(body)),
        Err(err) => Err(err.clone()),
    }
}
