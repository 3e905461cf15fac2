//! Dynamic value representation.
//!
//! [`Value`] is any input a conversion may receive: a primitive, a wrapper
//! object, or a zero-argument accessor function. [`Primitive`] is what the
//! extraction step reduces a value to before a resolver sees it.

use std::fmt;
use std::rc::Rc;

use crate::number_format::format_number;
use crate::wrapper::{AccessorFn, Wrapper};
use crate::AccessorResult;

/// Represents any runtime value handed to a conversion.
///
/// Numbers come in two shapes like in the runtime this models: small
/// integers (`Smi`) and doubles. Both are "number" for every conversion.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let undefined = Value::Undefined;
/// let number = Value::Smi(42);
/// let float = Value::Double(3.14);
///
/// assert_eq!(undefined.type_of(), "undefined");
/// assert_eq!(number.type_of(), "number");
/// assert_eq!(float.to_string(), "3.14");
/// ```
#[derive(Clone)]
pub enum Value {
    /// undefined
    Undefined,
    /// null
    Null,
    /// boolean (true or false)
    Boolean(bool),
    /// Small integer
    Smi(i32),
    /// IEEE 754 double-precision floating point
    Double(f64),
    /// string value
    String(std::string::String),
    /// Composite value exposing accessor capabilities
    Object(Rc<dyn Wrapper>),
    /// Zero-argument accessor function
    Function(AccessorFn),
}

impl Value {
    /// Create a function value from a closure
    pub fn function<F>(func: F) -> Self
    where
        F: Fn() -> AccessorResult + 'static,
    {
        Value::Function(AccessorFn::new(func))
    }

    /// Create an object value from any wrapper
    pub fn object<W: Wrapper + 'static>(wrapper: W) -> Self {
        Value::Object(Rc::new(wrapper))
    }

    /// Whether this value can be invoked
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Whether this value is a composite object
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Whether this value is a boolean, number or string
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Boolean(_) | Value::Smi(_) | Value::Double(_) | Value::String(_)
        )
    }

    /// Numeric payload of a `Smi` or `Double`
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Smi(n) => Some(f64::from(*n)),
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// The primitive this value already is, if any.
    ///
    /// Objects and functions return `None`; they need extraction.
    pub fn as_primitive(&self) -> Option<Primitive> {
        match self {
            Value::Undefined => Some(Primitive::Undefined),
            Value::Null => Some(Primitive::Null),
            Value::Boolean(b) => Some(Primitive::Boolean(*b)),
            Value::Smi(n) => Some(Primitive::Number(f64::from(*n))),
            Value::Double(n) => Some(Primitive::Number(*n)),
            Value::String(s) => Some(Primitive::String(s.clone())),
            Value::Object(_) | Value::Function(_) => None,
        }
    }

    /// Returns the host `typeof` result for this value.
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Null.type_of(), "object");
    /// assert_eq!(Value::function(|| Ok(Value::Null)).type_of(), "function");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object", // host quirk
            Value::Boolean(_) => "boolean",
            Value::Smi(_) | Value::Double(_) => "number",
            Value::String(_) => "string",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Smi(n) => f.debug_tuple("Smi").field(n).finish(),
            Value::Double(n) => f.debug_tuple("Double").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Object(_) => write!(f, "Object(...)"),
            Value::Function(_) => write!(f, "Function(...)"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Smi(a), Value::Smi(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// Host string conversion (`String(value)`), used for diagnostics.
///
/// ```
/// use core_types::Value;
///
/// assert_eq!(Value::Undefined.to_string(), "undefined");
/// assert_eq!(Value::Boolean(true).to_string(), "true");
/// assert_eq!(Value::Double(1e21).to_string(), "1e+21");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Smi(n) => write!(f, "{}", n),
            Value::Double(n) => f.write_str(&format_number(*n)),
            Value::String(s) => f.write_str(s),
            Value::Object(_) => f.write_str(crate::OBJECT_MARKER),
            Value::Function(_) => write!(f, "function () {{ [native code] }}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Smi(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<std::string::String> for Value {
    fn from(s: std::string::String) -> Self {
        Value::String(s)
    }
}

impl From<Primitive> for Value {
    fn from(p: Primitive) -> Self {
        match p {
            Primitive::Undefined => Value::Undefined,
            Primitive::Null => Value::Null,
            Primitive::Boolean(b) => Value::Boolean(b),
            Primitive::Number(n) => Value::Double(n),
            Primitive::String(s) => Value::String(s),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

/// A value with no accessors of its own.
///
/// `Undefined` doubles as the indeterminate marker during extraction: it is
/// what a failed or ambiguous extraction produces. `Null` is a defined
/// result and stays distinct from it.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// undefined / indeterminate
    Undefined,
    /// null
    Null,
    /// boolean
    Boolean(bool),
    /// number (any `f64`, including NaN and the infinities)
    Number(f64),
    /// string
    String(std::string::String),
}

impl Primitive {
    /// Whether this is a boolean, number or string
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Primitive::Boolean(_) | Primitive::Number(_) | Primitive::String(_)
        )
    }

    /// Whether this is the indeterminate marker
    pub fn is_undefined(&self) -> bool {
        matches!(self, Primitive::Undefined)
    }

    /// Host `typeof` name
    pub fn type_of(&self) -> &'static str {
        match self {
            Primitive::Undefined => "undefined",
            Primitive::Null => "object",
            Primitive::Boolean(_) => "boolean",
            Primitive::Number(_) => "number",
            Primitive::String(_) => "string",
        }
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self {
        Primitive::Boolean(b)
    }
}

impl From<f64> for Primitive {
    fn from(n: f64) -> Self {
        Primitive::Number(n)
    }
}

impl From<i32> for Primitive {
    fn from(n: i32) -> Self {
        Primitive::Number(f64::from(n))
    }
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        Primitive::String(s.to_string())
    }
}

impl From<std::string::String> for Primitive {
    fn from(s: std::string::String) -> Self {
        Primitive::String(s)
    }
}
