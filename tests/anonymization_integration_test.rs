//! Integration tests for the anonymization engine

use serde_json::{json, Value};
use veil::anonymization::calendar::MONTH_NAMES;
use veil::anonymization::AnonymizationEngine;

/// Check that two values have identical structure: same type at every
/// level, same key set and order, same array lengths. Only leaf string
/// content may differ.
fn assert_isomorphic(input: &Value, output: &Value) {
    match (input, output) {
        (Value::Null, Value::Null) => {}
        (Value::Bool(a), Value::Bool(b)) => assert_eq!(a, b),
        (Value::Number(a), Value::Number(b)) => assert_eq!(a, b),
        (Value::String(_), Value::String(_)) => {}
        (Value::Array(a), Value::Array(b)) => {
            assert_eq!(a.len(), b.len());
            for (x, y) in a.iter().zip(b) {
                assert_isomorphic(x, y);
            }
        }
        (Value::Object(a), Value::Object(b)) => {
            let a_keys: Vec<&String> = a.keys().collect();
            let b_keys: Vec<&String> = b.keys().collect();
            assert_eq!(a_keys, b_keys, "Key set or order changed");
            for (key, value) in a {
                assert_isomorphic(value, &b[key]);
            }
        }
        (i, o) => panic!("Type changed: {i:?} -> {o:?}"),
    }
}

#[test]
fn test_scenario_document() {
    let engine = AnonymizationEngine::new();
    let input = r#"{"month":"January","count":5,"site":"https://example.com","note":"N/A","again":"January"}"#;
    let output: Value = serde_json::from_str(&engine.anonymize(input).unwrap()).unwrap();

    assert_eq!(output["count"], json!(5));
    assert_eq!(output["site"], json!("https://example.com"));
    assert_eq!(output["note"], json!("N/A"));

    let month = output["month"].as_str().unwrap();
    assert!(MONTH_NAMES.contains(&month));
    // A second run-local occurrence of "January" maps to the same month.
    assert_eq!(output["again"], output["month"]);
}

#[test]
fn test_hello_world_scenario() {
    let engine = AnonymizationEngine::new();
    let output: Value = serde_json::from_str(
        &engine
            .anonymize(r#"{"a":"Hello World","b":"Hello","c":"World"}"#)
            .unwrap(),
    )
    .unwrap();

    let sentence = output["a"].as_str().unwrap();
    let words: Vec<&str> = sentence.split(' ').collect();
    assert_eq!(words.len(), 2);
    for word in &words {
        assert!(word.chars().next().unwrap().is_uppercase());
    }

    // "Hello" and "World" recur elsewhere and keep their replacements.
    assert_eq!(output["b"].as_str().unwrap(), words[0]);
    assert_eq!(output["c"].as_str().unwrap(), words[1]);
}

#[test]
fn test_urls_numbers_and_blanks_pass_through() {
    let engine = AnonymizationEngine::new();
    let output: Value = serde_json::from_str(
        &engine
            .anonymize(
                r#"{
                    "url": "https://example.com/path?q=1#frag",
                    "int": "42",
                    "float": "3.14",
                    "negative": "-7",
                    "percent": "95%",
                    "prefixed": "12abc",
                    "na": "N/A",
                    "na_lower": "n/a",
                    "empty": ""
                }"#,
            )
            .unwrap(),
    )
    .unwrap();

    assert_eq!(output["url"], json!("https://example.com/path?q=1#frag"));
    assert_eq!(output["int"], json!("42"));
    assert_eq!(output["float"], json!("3.14"));
    assert_eq!(output["negative"], json!("-7"));
    assert_eq!(output["percent"], json!("95%"));
    assert_eq!(output["prefixed"], json!("12abc"));
    assert_eq!(output["na"], json!("N/A"));
    assert_eq!(output["na_lower"], json!("n/a"));
    assert_eq!(output["empty"], json!(""));
}

#[test]
fn test_non_string_scalars_unchanged() {
    let engine = AnonymizationEngine::new();
    let output: Value = serde_json::from_str(
        &engine
            .anonymize(r#"{"n": 5, "f": 2.5, "t": true, "x": null}"#)
            .unwrap(),
    )
    .unwrap();

    assert_eq!(output["n"], json!(5));
    assert_eq!(output["f"], json!(2.5));
    assert_eq!(output["t"], json!(true));
    assert_eq!(output["x"], json!(null));
}

#[test]
fn test_structural_isomorphism() {
    let engine = AnonymizationEngine::new();
    let input = json!({
        "zulu": "some words here",
        "alpha": [1, "two", {"deep": ["nested", "values", null]}],
        "mike": {"inner": {"leaf": "text", "flag": false}},
        "count": 7
    });
    let output = engine.anonymize_value(&input).unwrap();
    assert_isomorphic(&input, &output);
}

#[test]
fn test_month_consistency_across_nesting() {
    let engine = AnonymizationEngine::new();
    let input = json!({
        "top": "March",
        "list": ["March", {"deep": "March"}]
    });
    let output = engine.anonymize_value(&input).unwrap();

    let month = output["top"].as_str().unwrap().to_string();
    assert!(MONTH_NAMES.contains(&month.as_str()));
    assert_eq!(output["list"][0].as_str().unwrap(), month);
    assert_eq!(output["list"][1]["deep"].as_str().unwrap(), month);
}

#[test]
fn test_generic_consistency_across_nesting() {
    let engine = AnonymizationEngine::new();
    let input = json!({
        "a": "confidential",
        "b": ["confidential"],
        "c": {"d": "confidential report"}
    });
    let output = engine.anonymize_value(&input).unwrap();

    let replacement = output["a"].as_str().unwrap().to_string();
    assert_eq!(output["b"][0].as_str().unwrap(), replacement);
    assert!(output["c"]["d"]
        .as_str()
        .unwrap()
        .starts_with(&replacement));
}

#[test]
fn test_rewalking_output_applies_same_rules() {
    // No special "already anonymized" marker: a second walk treats the
    // first walk's output like any other document, preserving URLs and
    // numbers and re-replacing words.
    let engine = AnonymizationEngine::new();
    let input = json!({"site": "https://example.com", "count": 5, "word": "secret"});
    let once = engine.anonymize_value(&input).unwrap();
    let twice = engine.anonymize_value(&once).unwrap();

    assert_eq!(twice["site"], json!("https://example.com"));
    assert_eq!(twice["count"], json!(5));
    assert!(twice["word"]
        .as_str()
        .unwrap()
        .chars()
        .next()
        .unwrap()
        .is_uppercase());
    assert_isomorphic(&once, &twice);
}

#[test]
fn test_pretty_printed_with_two_space_indent() {
    let engine = AnonymizationEngine::new();
    let output = engine.anonymize(r#"{"a":{"b":1}}"#).unwrap();
    assert_eq!(output, "{\n  \"a\": {\n    \"b\": 1\n  }\n}");
}

#[test]
fn test_seeded_engine_is_reproducible() {
    let input = r#"{"notes": "meeting with the client in January", "amount": "120 USD"}"#;
    let first = AnonymizationEngine::with_seed(123).anonymize(input).unwrap();
    let second = AnonymizationEngine::with_seed(123).anonymize(input).unwrap();
    assert_eq!(first, second);
}
