//! Unit tests for Booleanifier

use conversion::{booleanify, BooleanOptions, Booleanifier};
use core_types::{AccessorError, Object, Primitive, Value};

use crate::fixtures::{echo, empty_object, func, func_echo, o101, primitives};

fn expected_boolean(label: &str) -> Option<bool> {
    match label {
        "0" | "\"0\"" | "false" => Some(false),
        "1" | "\"1\"" | "true" => Some(true),
        _ => None,
    }
}

#[cfg(test)]
mod fixture_tests {
    use super::*;

    #[test]
    fn test_function_argument() {
        for (label, value) in primitives() {
            assert_eq!(booleanify(&func(value)), expected_boolean(label), "() => {}", label);
        }
    }

    #[test]
    fn test_object_argument() {
        for (label, value) in primitives() {
            assert_eq!(booleanify(&echo(value)), expected_boolean(label), "echo({})", label);
        }
    }

    #[test]
    fn test_function_returning_object_argument() {
        for (label, value) in primitives() {
            assert_eq!(
                booleanify(&func_echo(value)),
                expected_boolean(label),
                "() => echo({})",
                label
            );
        }
    }

    #[test]
    fn test_plain_values() {
        for (label, value) in primitives() {
            assert_eq!(booleanify(&value), expected_boolean(label), "{}", label);
        }
    }

    #[test]
    fn test_composite_without_boolean_meaning() {
        assert_eq!(booleanify(&o101()), None);
        assert_eq!(booleanify(&empty_object()), None);
        assert_eq!(booleanify(&Value::Undefined), None);
    }
}

#[cfg(test)]
mod primitive_tests {
    use super::*;

    #[test]
    fn test_only_zero_and_one_are_boolean_numbers() {
        let b = Booleanifier::default();
        assert_eq!(b.boolean(&Primitive::Number(1.0)), Some(true));
        assert_eq!(b.boolean(&Primitive::Number(0.0)), Some(false));
        for n in [2.0, -1.0, 0.1, f64::NAN, f64::INFINITY] {
            assert_eq!(b.boolean(&Primitive::Number(n)), None, "{}", n);
        }
    }

    #[test]
    fn test_host_truthiness_is_not_used() {
        let b = Booleanifier::default();
        for s in ["true", "false", "yes", "", "01", "1.0"] {
            assert_eq!(b.boolean(&Primitive::from(s)), None, "{:?}", s);
        }
    }

    #[test]
    fn test_trim_applies_to_custom_and_canonical_strings() {
        let b = Booleanifier::new(BooleanOptions {
            truthy_strings: vec!["yes".into()],
            falsy_strings: vec!["no".into()],
            trim_string: true,
        });
        assert_eq!(b.boolean(&Primitive::from("\t0\n")), Some(false));
        assert_eq!(b.boolean(&Primitive::from("  yes")), Some(true));
        assert_eq!(b.boolean(&Primitive::from("no ")), Some(false));
        assert_eq!(b.boolean(&Primitive::from("YES")), None);
    }

    #[test]
    fn test_custom_strings_do_not_override_canonical_classes() {
        let b = Booleanifier::new(BooleanOptions {
            truthy_strings: vec!["0".into()],
            ..BooleanOptions::default()
        });
        assert_eq!(b.boolean(&Primitive::from("0")), Some(false));
    }

    #[test]
    fn test_custom_strings_need_exact_match_without_trim() {
        let b = Booleanifier::new(BooleanOptions {
            truthy_strings: vec!["on".into()],
            ..BooleanOptions::default()
        });
        assert_eq!(b.boolean(&Primitive::from("on")), Some(true));
        assert_eq!(b.boolean(&Primitive::from(" on")), None);
    }
}

#[cfg(test)]
mod wrapper_tests {
    use super::*;

    #[test]
    fn test_string_accessor_used_when_value_accessor_indeterminate() {
        let o = Object::new()
            .with_value_of(|| Ok(Value::Smi(7)))
            .with_string_of(|| Ok(Value::from("1")))
            .into_value();
        assert_eq!(booleanify(&o), Some(true));
    }

    #[test]
    fn test_value_accessor_wins() {
        let o = Object::new()
            .with_value_of(|| Ok(Value::Smi(0)))
            .with_string_of(|| Ok(Value::from("1")))
            .into_value();
        assert_eq!(booleanify(&o), Some(false));
    }

    #[test]
    fn test_failing_value_accessor_falls_back() {
        let o = Object::new()
            .with_value_of(|| Err(AccessorError::thrown("boom")))
            .with_string_of(|| Ok(Value::from("0")))
            .into_value();
        assert_eq!(booleanify(&o), Some(false));
    }

    #[test]
    fn test_primitive_hint_receives_default() {
        let o = Object::new()
            .with_to_primitive(|hint| Ok(Value::Boolean(hint.as_str() == "default")))
            .with_value_of(|| Ok(Value::Boolean(false)))
            .into_value();
        assert_eq!(booleanify(&o), Some(true));
    }

    #[test]
    fn test_throwing_function_is_indeterminate() {
        let f = Value::function(|| Err(AccessorError::thrown("boom")));
        assert_eq!(booleanify(&f), None);
    }
}
