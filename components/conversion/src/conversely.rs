//! Conversion facade.
//!
//! [`Conversely`] bundles one resolver per target kind, all built from a
//! single [`ConversionOptions`] value and frozen afterwards. The free
//! functions [`numberify`], [`stringify`] and [`booleanify`] use a shared
//! instance with the default policy table.

use std::sync::LazyLock;

use core_types::{Primitive, Value};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::boolean::{BooleanOptions, Booleanifier};
use crate::extract::Extractor;
use crate::number::{NumberOptions, Numberifier};
use crate::options::{lenient_deserialize, set_flag, LenientOptions};
use crate::string::{StringOptions, Stringifier};

/// Complete configuration for a [`Conversely`] instance.
///
/// As JSON, number options sit at the top level and the boolean and string
/// tables are nested:
///
/// ```json
/// { "valueOfBlank": 0, "ignoreHex": false,
///   "boolean": { "truthyStrings": ["yes"] },
///   "string": { "valueOfNaN": "NaN" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOptions {
    /// Number policy table
    #[serde(flatten)]
    pub number: NumberOptions,
    /// Boolean policy table
    pub boolean: BooleanOptions,
    /// String policy table
    pub string: StringOptions,
    /// Never consult wrappers' primitive-hint capability
    pub ignore_primitive_hint: bool,
}

impl LenientOptions for ConversionOptions {
    fn apply_entry(&mut self, key: &str, entry: &JsonValue) -> bool {
        match key {
            "boolean" => self.boolean.apply_json(entry),
            "string" => self.string.apply_json(entry),
            "ignorePrimitiveHint" => set_flag(&mut self.ignore_primitive_hint, key, entry),
            _ => return self.number.apply_number_entry(key, entry),
        }
        true
    }
}

lenient_deserialize!(ConversionOptions);

impl ConversionOptions {
    fn extractor(&self) -> Extractor {
        if self.ignore_primitive_hint {
            Extractor::without_primitive_hint()
        } else {
            Extractor::new()
        }
    }
}

/// Strict conversions to number, string and boolean.
///
/// # Examples
///
/// ```
/// use conversion::Conversely;
/// use core_types::{Object, Value};
///
/// let conversely = Conversely::new();
/// let o101 = Object::new()
///     .with_value_of(|| Ok(Value::from(101)))
///     .with_string_of(|| Ok(Value::from("one oh one")))
///     .into_value();
///
/// assert_eq!(conversely.numberify(&o101), Some(101.0));
/// assert_eq!(conversely.stringify(&o101), Some("one oh one".to_string()));
/// assert_eq!(conversely.booleanify(&o101), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversely {
    numberifier: Numberifier,
    booleanifier: Booleanifier,
    stringifier: Stringifier,
}

impl Conversely {
    /// Create an instance with the default policy table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an instance with the given options
    pub fn with_options(options: ConversionOptions) -> Self {
        let extractor = options.extractor();
        Self {
            numberifier: Numberifier::with_extractor(options.number, extractor),
            booleanifier: Booleanifier::with_extractor(options.boolean, extractor),
            stringifier: Stringifier::with_extractor(options.string, extractor),
        }
    }

    /// Create an instance from a loosely typed JSON configuration
    pub fn from_json(config: &JsonValue) -> Self {
        Self::with_options(ConversionOptions::from_json(config))
    }

    /// Library version
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Snapshot of the options this instance was built with
    pub fn options(&self) -> ConversionOptions {
        ConversionOptions {
            number: self.numberifier.options().clone(),
            boolean: self.booleanifier.options().clone(),
            string: self.stringifier.options().clone(),
            ignore_primitive_hint: !self.numberifier.extractor().honors_primitive_hint(),
        }
    }

    /// The number resolver
    pub fn numberifier(&self) -> &Numberifier {
        &self.numberifier
    }

    /// The boolean resolver
    pub fn booleanifier(&self) -> &Booleanifier {
        &self.booleanifier
    }

    /// The string resolver
    pub fn stringifier(&self) -> &Stringifier {
        &self.stringifier
    }

    /// Strictly convert any value to a number
    pub fn numberify(&self, value: &Value) -> Option<f64> {
        self.numberifier.numberify(value)
    }

    /// Strictly convert any value to a string
    pub fn stringify(&self, value: &Value) -> Option<String> {
        self.stringifier.stringify(value)
    }

    /// Strictly convert any value to a boolean
    pub fn booleanify(&self, value: &Value) -> Option<bool> {
        self.booleanifier.booleanify(value)
    }

    /// Convert a primitive to a number
    pub fn number(&self, primitive: &Primitive) -> Option<f64> {
        self.numberifier.number(primitive)
    }

    /// Convert a primitive to a string
    pub fn string(&self, primitive: &Primitive) -> Option<String> {
        self.stringifier.string(primitive)
    }

    /// Convert a primitive to a boolean
    pub fn boolean(&self, primitive: &Primitive) -> Option<bool> {
        self.booleanifier.boolean(primitive)
    }
}

static DEFAULT: LazyLock<Conversely> = LazyLock::new(Conversely::new);

/// Strictly convert any value to a number with the default policy table.
///
/// ```
/// use conversion::numberify;
/// use core_types::Value;
///
/// assert_eq!(numberify(&Value::from(" 2 ")), Some(2.0));
/// assert_eq!(numberify(&Value::Double(f64::INFINITY)), None);
/// ```
pub fn numberify(value: &Value) -> Option<f64> {
    DEFAULT.numberify(value)
}

/// Strictly convert any value to a string with the default policy table.
pub fn stringify(value: &Value) -> Option<String> {
    DEFAULT.stringify(value)
}

/// Strictly convert any value to a boolean with the default policy table.
pub fn booleanify(value: &Value) -> Option<bool> {
    DEFAULT.booleanify(value)
}
