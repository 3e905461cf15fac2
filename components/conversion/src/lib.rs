//! Strict, predictable conversion of runtime values to numbers, strings and
//! booleans.
//!
//! Instead of the host language's permissive implicit coercion, each
//! conversion either yields a well-defined result or `None`, the
//! indeterminate marker. `None` stands for both `null` and `undefined`
//! results; it is never zero, an empty string or `false`.
//!
//! - [`Extractor`] - reduces functions and wrappers to a primitive
//! - [`Numberifier`] - number resolver with [`NumberOptions`]
//! - [`Booleanifier`] - boolean resolver with [`BooleanOptions`]
//! - [`Stringifier`] - string resolver with [`StringOptions`]
//! - [`Conversely`] - facade over all three, configured by [`ConversionOptions`]
//!
//! # Example
//!
//! ```
//! use conversion::{booleanify, numberify, stringify, Conversely, ConversionOptions, LenientOptions};
//! use core_types::Value;
//!
//! assert_eq!(numberify(&Value::from("2a")), None);
//! assert_eq!(booleanify(&Value::from("1")), Some(true));
//! assert_eq!(stringify(&Value::Boolean(false)), Some("0".to_string()));
//!
//! let options = ConversionOptions::from_json(&serde_json::json!({ "ignoreHex": false }));
//! let conversely = Conversely::with_options(options);
//! assert_eq!(conversely.numberify(&Value::from("0xff")), Some(255.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod boolean;
pub mod conversely;
pub mod extract;
pub mod number;
pub mod options;
pub mod string;

// Re-export main types for convenience
pub use boolean::{BooleanOptions, Booleanifier};
pub use conversely::{booleanify, numberify, stringify, ConversionOptions, Conversely};
pub use extract::{attempt, Accessors, Attempt, Extractor};
pub use number::{NumberOptions, Numberifier};
pub use options::LenientOptions;
pub use string::{StringOptions, Stringifier};
