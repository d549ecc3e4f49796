//! Tests for the array combinator: aggregation across elements, index-order
//! paths, and success ordering.

use conform::{Parse, Parser, Value};
use serde_json::json;
use stillwater::Validation;

fn unwrap_success<T, E: std::fmt::Debug>(v: Validation<T, E>) -> T {
    v.into_result().unwrap()
}

fn unwrap_failure<T: std::fmt::Debug, E>(v: Validation<T, E>) -> E {
    v.into_result().unwrap_err()
}

#[test]
fn test_accepts_all_valid_elements() {
    let parser = Parse::array_of(Parse::number());
    let result = parser.parse(&Value::from(json!([1, 2, 3])));
    assert!(result.is_success());
}

#[test]
fn test_success_ordering() {
    // The k-th output is the k-th element's validated output.
    let parser = Parse::array_of(Parse::string());
    let parsed = unwrap_success(parser.parse(&Value::from(json!(["a", "b", "c"]))));
    assert_eq!(
        parsed,
        vec![
            Value::String("a".into()),
            Value::String("b".into()),
            Value::String("c".into())
        ]
    );
}

#[test]
fn test_rejects_non_array() {
    let parser = Parse::array_of(Parse::number());

    for input in [
        Value::Null,
        Value::Number(42.0),
        Value::from(json!({"0": 1})),
    ] {
        assert!(parser.parse(&input).is_failure());
    }

    let errors = unwrap_failure(parser.parse(&Value::from(json!({"0": 1}))));
    assert_eq!(
        errors.first().to_string(),
        "(root): expected array but got object"
    );
}

#[test]
fn test_single_failing_element() {
    let parser = Parse::array_of(Parse::number());
    let errors = unwrap_failure(parser.parse(&Value::from(json!([1, "two", 3]))));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().path.to_string(), "[1]");
    assert_eq!(
        errors.first().to_string(),
        "[1]: expected number but got string"
    );
}

#[test]
fn test_aggregation_in_index_order() {
    // Elements at indices 1 and 3 fail; both are reported, in index order,
    // even though the failure at 1 was already known.
    let parser = Parse::array_of(Parse::number());
    let errors = unwrap_failure(parser.parse(&Value::from(json!([0, "a", 2, "b"]))));

    assert_eq!(errors.len(), 2);
    let paths: Vec<_> = errors.iter().map(|e| e.path.to_string()).collect();
    assert_eq!(paths, vec!["[1]", "[3]"]);
}

#[test]
fn test_no_partial_success() {
    // Every element but one passes; the result is still only the errors.
    let parser = Parse::array_of(Parse::number());
    let result = parser.parse(&Value::from(json!([1, 2, "three", 4])));
    assert!(result.is_failure());
}

#[test]
fn test_failing_element_with_multiple_errors() {
    // A record element can fail several fields at once; all of them keep
    // their element index.
    let element = Parse::simple_dict()
        .field("a", Parse::number())
        .field("b", Parse::string());
    let parser = Parse::array_of(element);

    let input = Value::from(json!([{"a": 1, "b": "ok"}, {"a": "x", "b": 2}]));
    let errors = unwrap_failure(parser.parse(&input));

    let rendered: Vec<_> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "[1].a: expected number but got string",
            "[1].b: expected string but got number",
        ]
    );
}

#[test]
fn test_nested_arrays() {
    let parser = Parse::array_of(Parse::array_of(Parse::number()));
    let input = Value::from(json!([[1, 2], [3, "x"]]));
    let errors = unwrap_failure(parser.parse(&input));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().path.to_string(), "[1][1]");
}

#[test]
fn test_large_array() {
    let parser = Parse::array_of(Parse::number());
    let large: Vec<i64> = (0..1000).collect();
    let result = parser.parse(&Value::from(json!(large)));
    assert_eq!(unwrap_success(result).len(), 1000);
}
