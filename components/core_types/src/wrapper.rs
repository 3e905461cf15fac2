//! Wrapper objects and accessor functions.
//!
//! A wrapper is a composite value that can be asked for a primitive through
//! up to three capabilities: a value accessor (`valueOf`), a string accessor
//! (`toString`) and a primitive hint (`[Symbol.toPrimitive]`). Each probe
//! returns `None` when the capability is absent, so "not implemented" and
//! "implemented but failed" stay distinguishable.

use std::fmt;
use std::rc::Rc;

use crate::error::AccessorResult;
use crate::Value;

/// String produced by the generic default string accessor.
///
/// A string accessor returning exactly this text carries no information and
/// is treated as absent.
pub const OBJECT_MARKER: &str = "[object Object]";

/// Target kind a conversion would like an object to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PreferredKind {
    /// Prefer the value accessor
    Number,
    /// Prefer the string accessor
    #[default]
    String,
    /// Boolean conversion; passed to primitive hints as [`Hint::Default`]
    Boolean,
}

/// Hint handed to a wrapper's primitive-hint capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    /// `"number"`
    Number,
    /// `"string"`
    String,
    /// `"default"`
    Default,
}

impl Hint {
    /// The hint as the host language spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Hint::Number => "number",
            Hint::String => "string",
            Hint::Default => "default",
        }
    }
}

impl From<PreferredKind> for Hint {
    fn from(kind: PreferredKind) -> Self {
        match kind {
            PreferredKind::Number => Hint::Number,
            PreferredKind::String => Hint::String,
            PreferredKind::Boolean => Hint::Default,
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities a composite value may expose for primitive extraction.
///
/// Every method defaults to `None` ("capability absent"). Implementors
/// override the ones they support. Extraction only reads through these
/// methods; it never mutates the wrapper.
pub trait Wrapper {
    /// Value accessor, the counterpart of `valueOf()`
    fn value_of(&self) -> Option<AccessorResult> {
        None
    }

    /// String accessor, the counterpart of a custom `toString()`
    ///
    /// Returning `Some(Ok(Value::String("[object Object]")))` is equivalent
    /// to returning `None`.
    fn string_of(&self) -> Option<AccessorResult> {
        None
    }

    /// Primitive-hint capability, the counterpart of `[Symbol.toPrimitive]`
    fn to_primitive(&self, _hint: Hint) -> Option<AccessorResult> {
        None
    }
}

type Accessor = Box<dyn Fn() -> AccessorResult>;
type HintAccessor = Box<dyn Fn(Hint) -> AccessorResult>;

/// A wrapper assembled from closures.
///
/// # Examples
///
/// ```
/// use core_types::{Object, Value};
///
/// let o101 = Object::new()
///     .with_value_of(|| Ok(Value::from(101)))
///     .with_string_of(|| Ok(Value::from("one oh one")))
///     .into_value();
///
/// assert!(o101.is_object());
/// ```
#[derive(Default)]
pub struct Object {
    value_of: Option<Accessor>,
    string_of: Option<Accessor>,
    to_primitive: Option<HintAccessor>,
}

impl Object {
    /// An object with no accessors (behaves like `{}`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias of [`Object::new`] that reads better at call sites
    pub fn empty() -> Self {
        Self::default()
    }

    /// An object whose value accessor always returns `value`
    pub fn echo(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new().with_value_of(move || Ok(value.clone()))
    }

    /// Install a value accessor
    pub fn with_value_of<F>(mut self, accessor: F) -> Self
    where
        F: Fn() -> AccessorResult + 'static,
    {
        self.value_of = Some(Box::new(accessor));
        self
    }

    /// Install a string accessor
    pub fn with_string_of<F>(mut self, accessor: F) -> Self
    where
        F: Fn() -> AccessorResult + 'static,
    {
        self.string_of = Some(Box::new(accessor));
        self
    }

    /// Install a primitive-hint capability
    pub fn with_to_primitive<F>(mut self, accessor: F) -> Self
    where
        F: Fn(Hint) -> AccessorResult + 'static,
    {
        self.to_primitive = Some(Box::new(accessor));
        self
    }

    /// Wrap into a [`Value::Object`]
    pub fn into_value(self) -> Value {
        Value::Object(Rc::new(self))
    }
}

impl Wrapper for Object {
    fn value_of(&self) -> Option<AccessorResult> {
        self.value_of.as_ref().map(|accessor| accessor())
    }

    fn string_of(&self) -> Option<AccessorResult> {
        self.string_of.as_ref().map(|accessor| accessor())
    }

    fn to_primitive(&self, hint: Hint) -> Option<AccessorResult> {
        self.to_primitive.as_ref().map(|accessor| accessor(hint))
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("value_of", &self.value_of.is_some())
            .field("string_of", &self.string_of.is_some())
            .field("to_primitive", &self.to_primitive.is_some())
            .finish()
    }
}

/// A zero-argument callable that yields a value when invoked.
#[derive(Clone)]
pub struct AccessorFn {
    func: Rc<dyn Fn() -> AccessorResult>,
}

impl AccessorFn {
    /// Wrap a closure
    pub fn new<F>(func: F) -> Self
    where
        F: Fn() -> AccessorResult + 'static,
    {
        Self { func: Rc::new(func) }
    }

    /// Invoke once
    pub fn call(&self) -> AccessorResult {
        (self.func)()
    }

    /// Whether two handles refer to the same closure
    pub fn ptr_eq(&self, other: &AccessorFn) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for AccessorFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessorFn(...)")
    }
}
