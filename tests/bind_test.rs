//! Tests for the composition protocol: bind's short-circuit, associativity,
//! the chaining accessors, and custom stages.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use conform::{Parse, ParseError, ParseErrorSet, Parser, ParserExt, Value};
use stillwater::Validation;

fn unwrap_failure<T: std::fmt::Debug, E>(v: Validation<T, E>) -> E {
    v.into_result().unwrap_err()
}

// ====== Short-circuit ======

#[test]
fn test_bind_runs_second_stage_on_success() {
    let parser = Parse::object().bind(Parse::object());
    let input = Value::from(serde_json::json!({"a": 1}));
    assert!(parser.parse(&input).is_success());
}

#[test]
fn test_bind_short_circuits_on_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_seen = Arc::clone(&calls);

    let second = Parse::custom(move |v: &Value| {
        calls_seen.fetch_add(1, Ordering::SeqCst);
        Validation::Success(v.clone())
    });
    let parser = Parse::number().bind(second);

    let errors = unwrap_failure(parser.parse(&Value::String("no".into())));

    // The second stage was never evaluated, and the first stage's error
    // set came through unchanged: single error, empty path.
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(errors.len(), 1);
    assert!(errors.first().path.is_root());
    assert_eq!(
        errors.first().to_string(),
        "(root): expected number but got string"
    );
}

#[test]
fn test_bind_adds_no_path_element() {
    // bind is not an aggregation boundary; a three-stage chain still
    // reports its failure at the root.
    let parser = Parse::object().bind(Parse::object()).bind(Parse::number());
    let input = Value::from(serde_json::json!({}));
    let errors = unwrap_failure(parser.parse(&input));
    assert!(errors.first().path.is_root());
}

// ====== Associativity ======

#[test]
fn test_bind_is_associative() {
    fn reject_small(v: &Value) -> conform::ParseResult<Value> {
        match v.as_number() {
            Some(n) if n >= 10.0 => Validation::Success(v.clone()),
            _ => Validation::Failure(ParseErrorSet::single(ParseError::at_root(
                "expected a number of at least 10",
            ))),
        }
    }

    let left = Parse::number().bind(Parse::number()).bind(Parse::custom(reject_small));
    let right = Parse::number().bind(Parse::number().bind(Parse::custom(reject_small)));

    for input in [
        Value::Number(50.0),
        Value::Number(3.0),
        Value::String("x".into()),
    ] {
        let a = left.parse(&input).into_result();
        let b = right.parse(&input).into_result();
        assert_eq!(a, b);
    }
}

// ====== Chaining accessors ======

#[test]
fn test_chaining_accessor_equals_bind_with_leaf() {
    let chained = Parse::object().number();
    let bound = Parse::object().bind(Parse::number());

    let input = Value::from(serde_json::json!({"a": 1}));
    assert_eq!(
        chained.parse(&input).into_result(),
        bound.parse(&input).into_result()
    );
}

#[test]
fn test_chaining_accessors_compose() {
    // An object is never a number, so the chain fails at the second leaf.
    let parser = Parse::object().number();
    let input = Value::from(serde_json::json!({}));
    let errors = unwrap_failure(parser.parse(&input));
    assert_eq!(
        errors.first().to_string(),
        "(root): expected number but got object"
    );
}

#[test]
fn test_each_chaining_accessor_reaches_its_leaf() {
    assert!(Parse::object().string().parse(&Value::from(serde_json::json!({}))).is_failure());
    assert!(Parse::array().array().parse(&Value::Array(vec![])).is_success());
    assert!(Parse::object().object().parse(&Value::from(serde_json::json!({}))).is_success());
    assert!(Parse::null().null().parse(&Value::Null).is_success());
    assert!(Parse::undefined().undefined().parse(&Value::Undefined).is_success());
    assert!(Parse::boolean().boolean().parse(&Value::Bool(true)).is_success());
    assert!(Parse::function()
        .function()
        .parse(&Value::function(|_| Value::Null))
        .is_success());
}

// ====== Custom stages ======

#[test]
fn test_custom_range_check() {
    let parser = Parse::number().bind(Parse::custom(|v: &Value| match v.as_number() {
        Some(n) if (0.0..=100.0).contains(&n) => Validation::Success(n),
        Some(n) => Validation::Failure(ParseErrorSet::single(ParseError::at_root(format!(
            "expected a score between 0 and 100, got {}",
            n
        )))),
        None => Validation::Failure(ParseErrorSet::single(ParseError::at_root(
            "expected a score",
        ))),
    }));

    assert!(parser.parse(&Value::Number(55.0)).is_success());

    let errors = unwrap_failure(parser.parse(&Value::Number(140.0)));
    assert_eq!(
        errors.first().to_string(),
        "(root): expected a score between 0 and 100, got 140"
    );
}

#[test]
fn test_custom_enum_membership() {
    let parser = Parse::string().bind(Parse::custom(|v: &Value| match v.as_str() {
        Some("red") | Some("green") | Some("blue") => Validation::Success(v.clone()),
        _ => Validation::Failure(ParseErrorSet::single(ParseError::at_root(
            "expected one of red, green, blue",
        ))),
    }));

    assert!(parser.parse(&Value::String("green".into())).is_success());
    assert!(parser.parse(&Value::String("mauve".into())).is_failure());
}

#[test]
fn test_custom_pattern_check() {
    let ident = regex::Regex::new(r"^[a-z_][a-z0-9_]*$").unwrap();
    let parser = Parse::string().bind(Parse::custom(move |v: &Value| match v.as_str() {
        Some(s) if ident.is_match(s) => Validation::Success(v.clone()),
        _ => Validation::Failure(ParseErrorSet::single(ParseError::at_root(
            "expected a lowercase identifier",
        ))),
    }));

    assert!(parser.parse(&Value::String("snake_case".into())).is_success());

    let errors = unwrap_failure(parser.parse(&Value::String("Not-An-Ident".into())));
    assert_eq!(
        errors.first().to_string(),
        "(root): expected a lowercase identifier"
    );
}

#[test]
fn test_custom_typed_output() {
    // A custom stage can narrow to a plain Rust type.
    let parser = Parse::number().bind(Parse::custom(|v: &Value| match v.as_number() {
        Some(n) => Validation::Success(n),
        None => Validation::Failure(ParseErrorSet::single(ParseError::at_root(
            "expected a number",
        ))),
    }));

    let n: f64 = parser.parse(&Value::Number(2.5)).into_result().unwrap();
    assert_eq!(n, 2.5);
}
