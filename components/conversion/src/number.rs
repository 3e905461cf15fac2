//! Strict number conversion.
//!
//! By default [`Numberifier`] maps NaN, the infinities, `null`, `undefined`
//! and blank strings to the indeterminate marker (`None`) instead of `0` or
//! NaN, and only recognizes plain decimal notation. Every special case can be
//! given a numeric policy value through [`NumberOptions`].

use std::sync::LazyLock;

use core_types::{PreferredKind, Primitive, Value};
use regex::Regex;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::extract::Extractor;
use crate::options::{lenient_deserialize, set_flag, set_policy, LenientOptions};

/// Decimal literal: optional sign, integer and/or fraction digits, optional
/// exponent. Group 1 is the integer part, group 2 the exponent.
static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:(\d+)(?:\.\d*)?|\.\d+)([eE][+-]?\d+)?$")
        .expect("decimal literal pattern is valid")
});

/// Whitespace the host language strips when converting strings to numbers.
pub(crate) fn is_host_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Policy table for number conversion.
///
/// Policy values (`value_of_*`) are substituted for the special case they
/// name; `None` means "indeterminate". The `ignore_*` switches reject the
/// corresponding notation (result: `value_of_nan`).
///
/// | key | default |
/// |---|---|
/// | `valueOfNull`, `valueOfUndefined`, `valueOfNaN`, `valueOfInfinity`, `valueOfBlank` | `null` |
/// | `ignoreHex`, `ignoreBin`, `ignoreOctal`, `ignoreExp`, `ignoreInfinity` | `true` |
/// | `noLeadingZero` | `false` |
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberOptions {
    /// Result for `null`
    pub value_of_null: Option<f64>,
    /// Result for `undefined`
    pub value_of_undefined: Option<f64>,
    /// Result for NaN and for strings that are not numbers
    #[serde(rename = "valueOfNaN")]
    pub value_of_nan: Option<f64>,
    /// Result for positive infinity; negated for negative infinity
    pub value_of_infinity: Option<f64>,
    /// Result for empty or whitespace-only strings
    pub value_of_blank: Option<f64>,
    /// Reject `0x` literals
    pub ignore_hex: bool,
    /// Reject `0b` literals
    pub ignore_bin: bool,
    /// Reject `0o` literals
    pub ignore_octal: bool,
    /// Reject literals with an exponent (`1e3`)
    pub ignore_exp: bool,
    /// Reject the `Infinity` tokens in strings
    pub ignore_infinity: bool,
    /// Reject decimal literals with a superfluous leading zero (`012`)
    pub no_leading_zero: bool,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            value_of_null: None,
            value_of_undefined: None,
            value_of_nan: None,
            value_of_infinity: None,
            value_of_blank: None,
            ignore_hex: true,
            ignore_bin: true,
            ignore_octal: true,
            ignore_exp: true,
            ignore_infinity: true,
            no_leading_zero: false,
        }
    }
}

impl NumberOptions {
    /// Defaults, but recognizing every alternate notation and `Infinity`
    pub fn recognizing_all() -> Self {
        Self {
            ignore_hex: false,
            ignore_bin: false,
            ignore_octal: false,
            ignore_exp: false,
            ignore_infinity: false,
            ..Self::default()
        }
    }

    pub(crate) fn apply_number_entry(&mut self, key: &str, entry: &JsonValue) -> bool {
        match key {
            "valueOfNull" => set_policy(&mut self.value_of_null, key, entry),
            "valueOfUndefined" => set_policy(&mut self.value_of_undefined, key, entry),
            "valueOfNaN" => set_policy(&mut self.value_of_nan, key, entry),
            "valueOfInfinity" => set_policy(&mut self.value_of_infinity, key, entry),
            "valueOfBlank" => set_policy(&mut self.value_of_blank, key, entry),
            "ignoreHex" => set_flag(&mut self.ignore_hex, key, entry),
            "ignoreBin" => set_flag(&mut self.ignore_bin, key, entry),
            "ignoreOctal" => set_flag(&mut self.ignore_octal, key, entry),
            "ignoreExp" => set_flag(&mut self.ignore_exp, key, entry),
            "ignoreInfinity" => set_flag(&mut self.ignore_infinity, key, entry),
            "noLeadingZero" => set_flag(&mut self.no_leading_zero, key, entry),
            _ => return false,
        }
        true
    }
}

impl LenientOptions for NumberOptions {
    fn apply_entry(&mut self, key: &str, entry: &JsonValue) -> bool {
        self.apply_number_entry(key, entry)
    }
}

lenient_deserialize!(NumberOptions);

/// Converts values to numbers under a fixed [`NumberOptions`] table.
///
/// # Examples
///
/// ```
/// use conversion::{NumberOptions, Numberifier};
/// use core_types::{Primitive, Value};
///
/// let strict = Numberifier::default();
/// assert_eq!(strict.numberify(&Value::from("  2 ")), Some(2.0));
/// assert_eq!(strict.numberify(&Value::from("2a")), None);
/// assert_eq!(strict.number(&Primitive::Null), None);
///
/// let lenient = Numberifier::new(NumberOptions {
///     ignore_hex: false,
///     value_of_blank: Some(0.0),
///     ..NumberOptions::default()
/// });
/// assert_eq!(lenient.numberify(&Value::from("0x1f")), Some(31.0));
/// assert_eq!(lenient.numberify(&Value::from("")), Some(0.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Numberifier {
    options: NumberOptions,
    extractor: Extractor,
}

impl Numberifier {
    /// Create a numberifier with the given options
    pub fn new(options: NumberOptions) -> Self {
        Self::with_extractor(options, Extractor::new())
    }

    /// Create a numberifier with a specific extractor
    pub fn with_extractor(options: NumberOptions, extractor: Extractor) -> Self {
        Self { options, extractor }
    }

    /// The options this numberifier was built with
    pub fn options(&self) -> &NumberOptions {
        &self.options
    }

    /// The extractor used for wrappers and functions
    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Convert any value: extract a primitive preferring the value accessor,
    /// then apply [`Numberifier::number`].
    pub fn numberify(&self, value: &Value) -> Option<f64> {
        let primitive = self.extractor.extract(value, PreferredKind::Number);
        self.number(&primitive)
    }

    /// Convert a primitive.
    pub fn number(&self, primitive: &Primitive) -> Option<f64> {
        match primitive {
            Primitive::Number(n) => self.numeric(*n),
            Primitive::String(s) => self.parse(s),
            Primitive::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            Primitive::Null => self.options.value_of_null,
            Primitive::Undefined => self.options.value_of_undefined,
        }
    }

    fn numeric(&self, n: f64) -> Option<f64> {
        if n.is_finite() {
            Some(n)
        } else if n.is_nan() {
            self.options.value_of_nan
        } else if n > 0.0 {
            self.options.value_of_infinity
        } else {
            self.options.value_of_infinity.map(|v| -v)
        }
    }

    fn parse(&self, src: &str) -> Option<f64> {
        let options = &self.options;
        let text = src.trim_matches(is_host_whitespace);

        if text.is_empty() {
            return options.value_of_blank;
        }

        if let Some((radix, digits)) = radix_literal(text) {
            let ignored = match radix {
                16 => options.ignore_hex,
                2 => options.ignore_bin,
                _ => options.ignore_octal,
            };
            if ignored || digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return options.value_of_nan;
            }
            return self.numeric(parse_radix(digits, radix));
        }

        let infinity = match text {
            "Infinity" | "+Infinity" => Some(f64::INFINITY),
            "-Infinity" => Some(f64::NEG_INFINITY),
            _ => None,
        };
        if let Some(infinity) = infinity {
            if options.ignore_infinity {
                return options.value_of_nan;
            }
            return self.numeric(infinity);
        }

        let Some(caps) = DECIMAL_LITERAL.captures(text) else {
            return options.value_of_nan;
        };
        if options.ignore_exp && caps.get(2).is_some() {
            return options.value_of_nan;
        }
        if options.no_leading_zero {
            let superfluous = caps
                .get(1)
                .is_some_and(|int| int.as_str().len() > 1 && int.as_str().starts_with('0'));
            if superfluous {
                return options.value_of_nan;
            }
        }

        match text.parse::<f64>() {
            Ok(n) => self.numeric(n),
            Err(_) => options.value_of_nan,
        }
    }
}

/// Split `0x…`, `0b…` or `0o…` into radix and digits.
fn radix_literal(text: &str) -> Option<(u32, &str)> {
    let rest = text.strip_prefix('0')?;
    let mut chars = rest.chars();
    let radix = match chars.next()? {
        'x' | 'X' => 16,
        'b' | 'B' => 2,
        'o' | 'O' => 8,
        _ => return None,
    };
    Some((radix, chars.as_str()))
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    match u128::from_str_radix(digits, radix) {
        Ok(n) => n as f64,
        // Wider than 128 bits: accumulate in floating point
        Err(_) => digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d)),
    }
}
