//! Shared inputs: accessor functions, echo wrappers and functions returning
//! echo wrappers, one per interesting primitive.

#![allow(dead_code)]

use core_types::{Object, Value};

pub fn func(value: impl Into<Value>) -> Value {
    let value = value.into();
    Value::function(move || Ok(value.clone()))
}

pub fn echo(value: impl Into<Value>) -> Value {
    Object::echo(value).into_value()
}

pub fn func_echo(value: impl Into<Value>) -> Value {
    let value = value.into();
    Value::function(move || Ok(Object::echo(value.clone()).into_value()))
}

/// The same eleven primitives the fixtures are built from
pub fn primitives() -> Vec<(&'static str, Value)> {
    vec![
        ("NaN", Value::Double(f64::NAN)),
        ("0", Value::Smi(0)),
        ("1", Value::Smi(1)),
        ("2", Value::Smi(2)),
        ("\"Huh?\"", Value::from("Huh?")),
        ("\"0\"", Value::from("0")),
        ("\"1\"", Value::from("1")),
        ("\"2\"", Value::from("2")),
        ("true", Value::Boolean(true)),
        ("false", Value::Boolean(false)),
        ("null", Value::Null),
    ]
}

/// `{ valueOf: () => 101, toString: () => "one oh one" }`
pub fn o101() -> Value {
    Object::new()
        .with_value_of(|| Ok(Value::Smi(101)))
        .with_string_of(|| Ok(Value::from("one oh one")))
        .into_value()
}

/// `{}`
pub fn empty_object() -> Value {
    Object::empty().into_value()
}
