//! Strict boolean conversion.
//!
//! Only `1`, `"1"` and `true` are true; only `0`, `"0"` and `false` are
//! false. Everything else is indeterminate. Extra truthy and falsy strings
//! may be configured, but the two canonical classes always apply.

use core_types::{PreferredKind, Primitive, Value};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::extract::{Attempt, Extractor};
use crate::number::is_host_whitespace;
use crate::options::{lenient_deserialize, set_flag, set_string_list, LenientOptions};

/// Policy table for boolean conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanOptions {
    /// Additional strings that mean `true`
    pub truthy_strings: Vec<String>,
    /// Additional strings that mean `false`
    pub falsy_strings: Vec<String>,
    /// Trim whitespace from strings before matching
    pub trim_string: bool,
}

impl LenientOptions for BooleanOptions {
    fn apply_entry(&mut self, key: &str, entry: &JsonValue) -> bool {
        match key {
            "truthyStrings" => set_string_list(&mut self.truthy_strings, key, entry),
            "falsyStrings" => set_string_list(&mut self.falsy_strings, key, entry),
            "trimString" => set_flag(&mut self.trim_string, key, entry),
            _ => return false,
        }
        true
    }
}

lenient_deserialize!(BooleanOptions);

/// Converts values to booleans.
///
/// # Examples
///
/// ```
/// use conversion::Booleanifier;
/// use core_types::{Object, Value};
///
/// let b = Booleanifier::default();
/// assert_eq!(b.booleanify(&Value::from("1")), Some(true));
/// assert_eq!(b.booleanify(&Value::Smi(0)), Some(false));
/// assert_eq!(b.booleanify(&Value::Smi(2)), None);
/// assert_eq!(b.booleanify(&Object::echo(true).into_value()), Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Booleanifier {
    options: BooleanOptions,
    extractor: Extractor,
}

impl Booleanifier {
    /// Create a booleanifier with the given options
    pub fn new(options: BooleanOptions) -> Self {
        Self::with_extractor(options, Extractor::new())
    }

    /// Create a booleanifier with a specific extractor
    pub fn with_extractor(options: BooleanOptions, extractor: Extractor) -> Self {
        Self { options, extractor }
    }

    /// The options this booleanifier was built with
    pub fn options(&self) -> &BooleanOptions {
        &self.options
    }

    /// Convert any value.
    ///
    /// Functions are invoked once. For wrappers the primitive hint (as
    /// `"default"`) wins when it yields a primitive; otherwise the value
    /// accessor is tried first and the string accessor only when that is
    /// indeterminate.
    pub fn booleanify(&self, value: &Value) -> Option<bool> {
        match self.extractor.unwrap_callable(value) {
            Value::Object(wrapper) => {
                let wrapper = wrapper.as_ref();
                if let Some(primitive) = self.extractor.primitive_hint(wrapper, PreferredKind::Boolean)
                {
                    return self.boolean(&primitive);
                }
                self.from_attempt(&self.extractor.value_accessor(wrapper))
                    .or_else(|| self.from_attempt(&self.extractor.string_accessor(wrapper)))
            }
            other => other.as_primitive().and_then(|p| self.boolean(&p)),
        }
    }

    fn from_attempt(&self, attempt: &Attempt) -> Option<bool> {
        attempt
            .produced()
            .and_then(Value::as_primitive)
            .and_then(|p| self.boolean(&p))
    }

    /// Convert a primitive.
    pub fn boolean(&self, primitive: &Primitive) -> Option<bool> {
        match primitive {
            Primitive::Boolean(b) => Some(*b),
            Primitive::Number(n) if *n == 1.0 => Some(true),
            Primitive::Number(n) if *n == 0.0 => Some(false),
            Primitive::String(s) => self.string_to_boolean(s),
            _ => None,
        }
    }

    fn string_to_boolean(&self, s: &str) -> Option<bool> {
        let text = if self.options.trim_string {
            s.trim_matches(is_host_whitespace)
        } else {
            s
        };
        match text {
            "1" => Some(true),
            "0" => Some(false),
            _ => {
                let truthy = self.options.truthy_strings.iter().any(|t| t == text);
                let falsy = self.options.falsy_strings.iter().any(|f| f == text);
                match (truthy, falsy) {
                    (true, false) => Some(true),
                    (false, true) => Some(false),
                    // Listed in both sets, or in neither
                    _ => None,
                }
            }
        }
    }
}
