//! Core value types for strict conversions.
//!
//! This crate provides the dynamic value model the conversion pipeline
//! operates on: runtime values, the primitives they reduce to, wrapper
//! capabilities and accessor failures.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of runtime values
//! - [`Primitive`] - Owned primitive produced by extraction
//! - [`Wrapper`] - Capability trait for composite values
//! - [`Object`] - Closure-backed wrapper
//! - [`AccessorFn`] - Zero-argument accessor function
//! - [`AccessorError`] - Why an accessor produced nothing
//!
//! # Examples
//!
//! ```
//! use core_types::{AccessorError, Object, Value};
//!
//! let num = Value::Smi(42);
//! assert_eq!(num.type_of(), "number");
//!
//! let wrapper = Object::echo("1").into_value();
//! assert!(wrapper.is_object());
//!
//! let failing = Value::function(|| Err(AccessorError::thrown("no value")));
//! assert!(failing.is_callable());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod number_format;
mod value;
mod wrapper;

pub use error::{AccessorError, AccessorResult};
pub use number_format::format_number;
pub use value::{Primitive, Value};
pub use wrapper::{AccessorFn, Hint, Object, PreferredKind, Wrapper, OBJECT_MARKER};
