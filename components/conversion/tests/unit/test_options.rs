//! Unit tests for option loading

use conversion::{
    BooleanOptions, ConversionOptions, Conversely, LenientOptions, NumberOptions, StringOptions,
};
use core_types::Value;
use serde_json::json;

#[cfg(test)]
mod number_option_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = NumberOptions::default();
        assert_eq!(options.value_of_null, None);
        assert_eq!(options.value_of_blank, None);
        assert!(options.ignore_hex && options.ignore_bin && options.ignore_octal);
        assert!(options.ignore_exp && options.ignore_infinity);
        assert!(!options.no_leading_zero);
    }

    #[test]
    fn test_invalid_entries_keep_defaults() {
        let options = NumberOptions::from_json(&json!({
            "valueOfNull": "zero",
            "valueOfBlank": 0,
            "ignoreHex": "no",
            "ignoreBin": 0,
            "noLeadingZero": 2,
            "unknown": true
        }));
        assert_eq!(options.value_of_null, None);
        assert_eq!(options.value_of_blank, Some(0.0));
        assert!(options.ignore_hex);
        assert!(!options.ignore_bin);
        assert!(!options.no_leading_zero);
    }

    #[test]
    fn test_null_resets_policy() {
        let mut options = NumberOptions {
            value_of_nan: Some(-1.0),
            ..NumberOptions::default()
        };
        options.apply_json(&json!({ "valueOfNaN": null }));
        assert_eq!(options.value_of_nan, None);
    }

    #[test]
    fn test_non_object_config_is_ignored() {
        assert_eq!(NumberOptions::from_json(&json!([1, 2])), NumberOptions::default());
        assert_eq!(NumberOptions::from_json(&json!("ignoreHex")), NumberOptions::default());
    }

    #[test]
    fn test_deserialize_never_fails_on_bad_entries() {
        let options: NumberOptions =
            serde_json::from_str(r#"{ "ignoreExp": false, "valueOfInfinity": [1] }"#)
                .expect("lenient deserialize");
        assert!(!options.ignore_exp);
        assert_eq!(options.value_of_infinity, None);
    }
}

#[cfg(test)]
mod table_option_tests {
    use super::*;

    #[test]
    fn test_boolean_lists() {
        let options = BooleanOptions::from_json(&json!({
            "truthyStrings": ["yes", "on"],
            "falsyStrings": ["no", 0],
            "trimString": true
        }));
        assert_eq!(options.truthy_strings, vec!["yes".to_string(), "on".to_string()]);
        assert!(options.falsy_strings.is_empty());
        assert!(options.trim_string);
    }

    #[test]
    fn test_string_policies() {
        let options = StringOptions::from_json(&json!({
            "valueOfNull": "null",
            "valueOfTrue": 1,
            "valueOfFalse": "false",
            "valueOfInfinity": "Infinity"
        }));
        assert_eq!(options.value_of_null, Some("null".into()));
        assert_eq!(options.value_of_true, "1");
        assert_eq!(options.value_of_false, "false");
        assert_eq!(options.value_of_infinity, Some("Infinity".into()));
    }

    #[test]
    fn test_nested_tables() {
        let options: ConversionOptions = serde_json::from_value(json!({
            "valueOfBlank": 0,
            "boolean": { "truthyStrings": ["y"] },
            "string": "not a table",
            "ignorePrimitiveHint": 1
        }))
        .expect("lenient deserialize");
        assert_eq!(options.number.value_of_blank, Some(0.0));
        assert_eq!(options.boolean.truthy_strings, vec!["y".to_string()]);
        assert_eq!(options.string, StringOptions::default());
        assert!(options.ignore_primitive_hint);
    }

    #[test]
    fn test_serialize_then_load_preserves_options() {
        let mut original = ConversionOptions::default();
        original.number.value_of_blank = Some(0.0);
        original.number.ignore_hex = false;
        original.boolean.falsy_strings = vec!["off".into()];
        original.string.value_of_nan = Some("NaN".into());

        let json = serde_json::to_value(&original).expect("serialize");
        assert_eq!(ConversionOptions::from_json(&json), original);
    }
}

#[cfg(test)]
mod instance_option_tests {
    use super::*;

    #[test]
    fn test_instances_are_independent() {
        let lenient = Conversely::from_json(&json!({ "valueOfBlank": 0 }));
        let strict = Conversely::new();
        assert_eq!(lenient.numberify(&Value::from("")), Some(0.0));
        assert_eq!(strict.numberify(&Value::from("")), None);
    }

    #[test]
    fn test_options_snapshot_does_not_alter_instance() {
        let conversely = Conversely::new();
        let mut snapshot = conversely.options();
        snapshot.number.ignore_hex = false;
        assert!(conversely.options().number.ignore_hex);
        assert_eq!(conversely.numberify(&Value::from("0x10")), None);
    }

    #[test]
    fn test_version() {
        assert_eq!(Conversely::version(), env!("CARGO_PKG_VERSION"));
    }
}
