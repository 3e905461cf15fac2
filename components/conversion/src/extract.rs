//! Primitive extraction.
//!
//! Reduces any [`Value`] to a single [`Primitive`]: accessor functions are
//! invoked once, wrappers are asked through their primitive hint, value
//! accessor and string accessor. Every invocation of caller code runs inside
//! one failure boundary ([`attempt`]) so a failing or panicking accessor
//! only removes that one strategy.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use core_types::{
    AccessorError, AccessorResult, Hint, PreferredKind, Primitive, Value, Wrapper, OBJECT_MARKER,
};

/// Outcome of probing one accessor capability.
#[derive(Debug, Clone, PartialEq)]
pub enum Attempt {
    /// The capability is not implemented (or is the trivial default)
    Absent,
    /// The accessor ran and reported a failure
    Failed(AccessorError),
    /// The accessor produced a value
    Produced(Value),
}

impl Attempt {
    /// The produced value, if any
    pub fn produced(&self) -> Option<&Value> {
        match self {
            Attempt::Produced(value) => Some(value),
            _ => None,
        }
    }

    /// The produced value if it is a boolean, number or string
    pub fn scalar(&self) -> Option<Primitive> {
        self.produced()
            .filter(|value| value.is_scalar())
            .and_then(Value::as_primitive)
    }

    /// Whether the accessor produced `null`
    pub fn is_null(&self) -> bool {
        matches!(self, Attempt::Produced(Value::Null))
    }
}

/// Results of both accessors of one wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct Accessors {
    /// Value accessor outcome
    pub value: Attempt,
    /// String accessor outcome, with the generic marker already discarded
    pub string: Attempt,
}

/// Invoke caller code inside the failure boundary.
///
/// `probe` returns `None` when the capability is absent. Reported errors and
/// panics both become [`Attempt::Failed`].
pub fn attempt<F>(accessor: &'static str, probe: F) -> Attempt
where
    F: FnOnce() -> Option<AccessorResult>,
{
    match panic::catch_unwind(AssertUnwindSafe(probe)) {
        Ok(None) => Attempt::Absent,
        Ok(Some(Ok(value))) => Attempt::Produced(value),
        Ok(Some(Err(err))) => {
            tracing::debug!(accessor, error = %err, "accessor failed");
            Attempt::Failed(err)
        }
        Err(payload) => {
            let err = AccessorError::Panicked(panic_message(payload.as_ref()));
            tracing::debug!(accessor, error = %err, "accessor panicked");
            Attempt::Failed(err)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Primitive extractor.
///
/// Whether wrappers' primitive-hint capability is consulted is fixed when
/// the extractor is built.
///
/// # Examples
///
/// ```
/// use conversion::Extractor;
/// use core_types::{Object, PreferredKind, Primitive, Value};
///
/// let extractor = Extractor::new();
/// let o101 = Object::new()
///     .with_value_of(|| Ok(Value::from(101)))
///     .with_string_of(|| Ok(Value::from("one oh one")))
///     .into_value();
///
/// assert_eq!(extractor.extract(&o101, PreferredKind::Number), Primitive::Number(101.0));
/// assert_eq!(
///     extractor.extract(&o101, PreferredKind::String),
///     Primitive::String("one oh one".to_string())
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extractor {
    primitive_hint: bool,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Extractor that consults primitive hints before accessors
    pub const fn new() -> Self {
        Self {
            primitive_hint: true,
        }
    }

    /// Extractor that never consults primitive hints
    pub const fn without_primitive_hint() -> Self {
        Self {
            primitive_hint: false,
        }
    }

    /// Whether primitive hints are consulted
    pub fn honors_primitive_hint(&self) -> bool {
        self.primitive_hint
    }

    /// Invoke `input` once if it is callable.
    ///
    /// A failing call, or a call that returns another callable, yields
    /// `Value::Undefined`. Non-callable input is returned as is.
    pub fn unwrap_callable(&self, input: &Value) -> Value {
        let Value::Function(func) = input else {
            return input.clone();
        };
        match attempt("function", || Some(func.call())) {
            Attempt::Produced(Value::Function(_)) => {
                tracing::trace!("accessor function returned a function");
                Value::Undefined
            }
            Attempt::Produced(value) => value,
            Attempt::Absent | Attempt::Failed(_) => Value::Undefined,
        }
    }

    /// Reduce any value to a primitive.
    pub fn extract(&self, input: &Value, kind: PreferredKind) -> Primitive {
        match self.unwrap_callable(input) {
            Value::Object(wrapper) => self.extract_object(wrapper.as_ref(), kind),
            other => other.as_primitive().unwrap_or(Primitive::Undefined),
        }
    }

    /// Reduce a wrapper to a primitive.
    pub fn extract_object(&self, wrapper: &dyn Wrapper, kind: PreferredKind) -> Primitive {
        if let Some(primitive) = self.primitive_hint(wrapper, kind) {
            return primitive;
        }

        let accessors = self.accessors(wrapper);

        if kind == PreferredKind::String {
            if let Some(Value::String(s)) = accessors.string.produced() {
                return Primitive::String(s.clone());
            }
        }
        if let Some(primitive) = accessors.value.scalar() {
            return primitive;
        }
        if let Some(primitive) = accessors.string.scalar() {
            return primitive;
        }
        if accessors.value.is_null() || accessors.string.is_null() {
            return Primitive::Null;
        }

        tracing::trace!(?accessors, "no accessor produced a primitive");
        Primitive::Undefined
    }

    /// Ask the wrapper's primitive-hint capability.
    ///
    /// Returns `None` when hints are disabled, absent, failed, or produced
    /// something other than a boolean, number, string or `null`.
    pub fn primitive_hint(&self, wrapper: &dyn Wrapper, kind: PreferredKind) -> Option<Primitive> {
        if !self.primitive_hint {
            return None;
        }
        let hint = Hint::from(kind);
        match attempt("to_primitive", || wrapper.to_primitive(hint)) {
            Attempt::Produced(value) if value.is_scalar() || value == Value::Null => {
                value.as_primitive()
            }
            _ => None,
        }
    }

    /// Probe the value accessor.
    pub fn value_accessor(&self, wrapper: &dyn Wrapper) -> Attempt {
        attempt("value_of", || wrapper.value_of())
    }

    /// Probe the string accessor, discarding the generic object marker.
    pub fn string_accessor(&self, wrapper: &dyn Wrapper) -> Attempt {
        match attempt("string_of", || wrapper.string_of()) {
            Attempt::Produced(Value::String(s)) if s == OBJECT_MARKER => Attempt::Absent,
            other => other,
        }
    }

    /// Probe both accessors, value accessor first.
    pub fn accessors(&self, wrapper: &dyn Wrapper) -> Accessors {
        Accessors {
            value: self.value_accessor(wrapper),
            string: self.string_accessor(wrapper),
        }
    }
}
