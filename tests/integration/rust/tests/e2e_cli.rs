//! End-to-End CLI Integration Tests
//!
//! Tests the CLI Runtime against the library it fronts: a literal typed on
//! the command line converts exactly like the value built in code.

use std::fs;

use conversely_cli::runtime::load_options;
use conversely_cli::{parse_literal, Runtime, Target};
use conversion::{ConversionOptions, Conversely};
use core_types::{Object, Value};
use tempfile::TempDir;

#[test]
fn test_e2e_literals_match_library_values() {
    let cases = [
        ("1", Value::Smi(1)),
        ("\"0\"", Value::from("0")),
        ("Huh?", Value::from("Huh?")),
        ("false", Value::Boolean(false)),
        ("null", Value::Null),
        ("-Infinity", Value::Double(f64::NEG_INFINITY)),
    ];
    let conversely = Conversely::new();
    let runtime = Runtime::new(ConversionOptions::default());

    for (literal, value) in cases {
        let conversion = runtime.convert(literal);
        assert_eq!(conversion.number, conversely.numberify(&value), "{}", literal);
        assert_eq!(conversion.string, conversely.stringify(&value), "{}", literal);
        assert_eq!(conversion.boolean, conversely.booleanify(&value), "{}", literal);
    }
}

#[test]
fn test_e2e_wrapper_literal_matches_object() {
    let literal = r#"{"valueOf": 101, "toString": "one oh one"}"#;
    let object = Object::new()
        .with_value_of(|| Ok(Value::Smi(101)))
        .with_string_of(|| Ok(Value::from("one oh one")))
        .into_value();
    let conversely = Conversely::new();

    let conversion = Runtime::default().convert(literal);

    assert_eq!(conversion.number, conversely.numberify(&object));
    assert_eq!(conversion.string, conversely.stringify(&object));
    assert_eq!(conversion.boolean, conversely.booleanify(&object));
    assert!(parse_literal(literal).is_object());
}

#[test]
fn test_e2e_config_file_workflow() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("conversely.json");
    fs::write(
        &path,
        r#"{ "valueOfNull": 0, "string": { "valueOfNull": "" }, "boolean": { "falsyStrings": ["off"] } }"#,
    )
    .expect("write config");

    let options = load_options(Some(path.as_path()), &[]).expect("load options");
    let runtime = Runtime::new(options);

    assert_eq!(
        runtime.execute_string("null"),
        r#"{"boolean":null,"number":0,"string":""}"#
    );
    assert_eq!(
        runtime.clone().with_target(Target::Boolean).execute_string("off"),
        "false"
    );
}

#[test]
fn test_e2e_default_runtime_prints_json() {
    let output = Runtime::default().execute_string(r#"{"$fn": "2"}"#);
    let json: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");

    assert_eq!(json["number"], serde_json::json!(2));
    assert_eq!(json["string"], serde_json::json!("2"));
    assert_eq!(json["boolean"], serde_json::Value::Null);
}
