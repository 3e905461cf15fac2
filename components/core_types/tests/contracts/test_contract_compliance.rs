//! Contract compliance tests for core_types
//!
//! These tests pin the public surface the conversion crate relies on.

use core_types::{
    format_number, AccessorError, AccessorFn, AccessorResult, Hint, Object, PreferredKind,
    Primitive, Value, Wrapper,
};

#[cfg(test)]
mod value_contract_tests {
    use super::*;

    /// Contract: Value must have all runtime kinds
    #[test]
    fn test_value_has_all_variants() {
        let _: Value = Value::Undefined;
        let _: Value = Value::Null;
        let _: Value = Value::Boolean(true);
        let _: Value = Value::Smi(0);
        let _: Value = Value::Double(0.0);
        let _: Value = Value::String(String::new());
        let _: Value = Object::empty().into_value();
        let _: Value = Value::Function(AccessorFn::new(|| Ok(Value::Undefined)));
    }

    /// Contract: Primitive must have undefined and null as separate variants
    #[test]
    fn test_primitive_has_all_variants() {
        let _: Primitive = Primitive::Undefined;
        let _: Primitive = Primitive::Null;
        let _: Primitive = Primitive::Boolean(false);
        let _: Primitive = Primitive::Number(0.0);
        let _: Primitive = Primitive::String(String::new());
    }

    /// Contract: Value must be Clone
    #[test]
    fn test_value_is_clone() {
        let v = Object::echo(1).into_value();
        let _ = v.clone();
    }
}

#[cfg(test)]
mod wrapper_contract_tests {
    use super::*;

    struct Bare;
    impl Wrapper for Bare {}

    /// Contract: every Wrapper capability is optional
    #[test]
    fn test_wrapper_defaults_are_absent() {
        let b = Bare;
        assert!(b.value_of().is_none());
        assert!(b.string_of().is_none());
        assert!(b.to_primitive(Hint::String).is_none());
    }

    /// Contract: accessor results are Result<Value, AccessorError>
    #[test]
    fn test_accessor_result_type() {
        let ok: AccessorResult = Ok(Value::Null);
        let err: AccessorResult = Err(AccessorError::thrown("x"));
        assert!(ok.is_ok());
        assert!(err.is_err());
    }

    /// Contract: preferred kinds map onto hints
    #[test]
    fn test_preferred_kind_to_hint() {
        let hints: Vec<Hint> = [
            PreferredKind::Number,
            PreferredKind::String,
            PreferredKind::Boolean,
        ]
        .into_iter()
        .map(Hint::from)
        .collect();
        assert_eq!(hints, vec![Hint::Number, Hint::String, Hint::Default]);
    }
}

#[cfg(test)]
mod format_contract_tests {
    use super::*;

    /// Contract: format_number is total over f64
    #[test]
    fn test_format_number_total() {
        for n in [0.0, -0.0, 1.0, -1.5, 1e300, 5e-324, f64::MAX, f64::NAN] {
            assert!(!format_number(n).is_empty());
        }
    }

    #[test]
    fn test_format_number_extremes() {
        assert_eq!(format_number(5e-324), "5e-324");
        assert_eq!(format_number(f64::MAX), "1.7976931348623157e+308");
    }
}
