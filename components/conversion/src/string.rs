//! Strict string conversion.
//!
//! Finite numbers get their canonical decimal form, booleans become `"1"` and
//! `"0"`, strings pass through. NaN, the infinities, `null` and `undefined`
//! are indeterminate unless a policy string is configured.

use core_types::{format_number, PreferredKind, Primitive, Value};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::extract::Extractor;
use crate::number::is_host_whitespace;
use crate::options::{lenient_deserialize, set_flag, set_string, set_string_policy, LenientOptions};

/// Policy table for string conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringOptions {
    /// Result for `null`
    pub value_of_null: Option<String>,
    /// Result for `undefined`
    pub value_of_undefined: Option<String>,
    /// Result for NaN
    #[serde(rename = "valueOfNaN")]
    pub value_of_nan: Option<String>,
    /// Result for positive infinity; prefixed with `-` for negative infinity
    pub value_of_infinity: Option<String>,
    /// Result for `true`
    pub value_of_true: String,
    /// Result for `false`
    pub value_of_false: String,
    /// Trim whitespace from string results
    pub trim_string: bool,
}

impl Default for StringOptions {
    fn default() -> Self {
        Self {
            value_of_null: None,
            value_of_undefined: None,
            value_of_nan: None,
            value_of_infinity: None,
            value_of_true: "1".to_string(),
            value_of_false: "0".to_string(),
            trim_string: false,
        }
    }
}

impl LenientOptions for StringOptions {
    fn apply_entry(&mut self, key: &str, entry: &JsonValue) -> bool {
        match key {
            "valueOfNull" => set_string_policy(&mut self.value_of_null, key, entry),
            "valueOfUndefined" => set_string_policy(&mut self.value_of_undefined, key, entry),
            "valueOfNaN" => set_string_policy(&mut self.value_of_nan, key, entry),
            "valueOfInfinity" => set_string_policy(&mut self.value_of_infinity, key, entry),
            "valueOfTrue" => set_string(&mut self.value_of_true, key, entry),
            "valueOfFalse" => set_string(&mut self.value_of_false, key, entry),
            "trimString" => set_flag(&mut self.trim_string, key, entry),
            _ => return false,
        }
        true
    }
}

lenient_deserialize!(StringOptions);

/// Converts values to strings.
///
/// # Examples
///
/// ```
/// use conversion::Stringifier;
/// use core_types::Value;
///
/// let s = Stringifier::default();
/// assert_eq!(s.stringify(&Value::Boolean(true)), Some("1".to_string()));
/// assert_eq!(s.stringify(&Value::Double(0.1)), Some("0.1".to_string()));
/// assert_eq!(s.stringify(&Value::Double(f64::NAN)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stringifier {
    options: StringOptions,
    extractor: Extractor,
}

impl Stringifier {
    /// Create a stringifier with the given options
    pub fn new(options: StringOptions) -> Self {
        Self::with_extractor(options, Extractor::new())
    }

    /// Create a stringifier with a specific extractor
    pub fn with_extractor(options: StringOptions, extractor: Extractor) -> Self {
        Self { options, extractor }
    }

    /// The options this stringifier was built with
    pub fn options(&self) -> &StringOptions {
        &self.options
    }

    /// Convert any value.
    ///
    /// For wrappers: a primitive hint (as `"string"`) wins; then a string
    /// result of the string accessor; then any value accessor result other
    /// than `undefined` or `null` (a composite one is indeterminate); then
    /// whatever either accessor produced.
    pub fn stringify(&self, value: &Value) -> Option<String> {
        match self.extractor.unwrap_callable(value) {
            Value::Object(wrapper) => {
                let wrapper = wrapper.as_ref();
                if let Some(primitive) = self.extractor.primitive_hint(wrapper, PreferredKind::String) {
                    return self.string(&primitive);
                }

                let accessors = self.extractor.accessors(wrapper);
                if let Some(Value::String(s)) = accessors.string.produced() {
                    return self.string(&Primitive::String(s.clone()));
                }
                match accessors.value.produced() {
                    None | Some(Value::Undefined | Value::Null) => {}
                    // Objects and functions yield None here
                    Some(value) => return value.as_primitive().and_then(|p| self.string(&p)),
                }
                accessors
                    .string
                    .produced()
                    .or_else(|| accessors.value.produced())
                    .and_then(Value::as_primitive)
                    .and_then(|p| self.string(&p))
            }
            other => other.as_primitive().and_then(|p| self.string(&p)),
        }
    }

    /// Convert a primitive.
    pub fn string(&self, primitive: &Primitive) -> Option<String> {
        let options = &self.options;
        match primitive {
            Primitive::Number(n) if n.is_finite() => Some(format_number(*n)),
            Primitive::Number(n) if n.is_nan() => options.value_of_nan.clone(),
            Primitive::Number(n) if *n > 0.0 => options.value_of_infinity.clone(),
            Primitive::Number(_) => options.value_of_infinity.as_ref().map(|s| format!("-{s}")),
            Primitive::String(s) if options.trim_string => {
                Some(s.trim_matches(is_host_whitespace).to_string())
            }
            Primitive::String(s) => Some(s.clone()),
            Primitive::Boolean(true) => Some(options.value_of_true.clone()),
            Primitive::Boolean(false) => Some(options.value_of_false.clone()),
            Primitive::Null => options.value_of_null.clone(),
            Primitive::Undefined => options.value_of_undefined.clone(),
        }
    }
}
