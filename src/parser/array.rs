//! Array combinator.

use stillwater::Validation;

use super::traits::{type_mismatch, Parser};
use crate::error::{ParseError, ParseErrorSet};
use crate::value::Value;
use crate::ParseResult;

/// Validates every element of an array-shaped input against one element
/// parser.
///
/// Array validation is an aggregation boundary, not a short-circuit: every
/// element is attempted in index order regardless of earlier failures, and
/// each failing element's errors are prepended with that element's index.
/// If any element fails, the result is the concatenation of all failing
/// elements' error sets, in index order; no partial success value is
/// returned even though the passing elements were computed.
///
/// # Example
///
/// ```rust
/// use conform::{Parse, Parser, Value};
///
/// let parser = Parse::array_of(Parse::number());
///
/// let input = Value::from(serde_json::json!([1, "two", 3, "four"]));
/// let errors = parser.parse(&input).into_result().unwrap_err();
///
/// // Both bad elements reported, in index order.
/// assert_eq!(errors.len(), 2);
/// let paths: Vec<_> = errors.iter().map(|e| e.path.to_string()).collect();
/// assert_eq!(paths, vec!["[1]", "[3]"]);
/// ```
pub struct ArrayParser<P> {
    element: P,
}

impl<P: Parser<Value>> ArrayParser<P> {
    /// Creates an array combinator from an element parser.
    pub fn new(element: P) -> Self {
        Self { element }
    }
}

impl<P: Parser<Value>> Parser for ArrayParser<P> {
    type Output = Vec<Value>;

    fn parse(&self, input: &Value) -> ParseResult<Vec<Value>> {
        let items = match input.as_array() {
            Some(items) => items,
            None => return Validation::Failure(type_mismatch("array", input)),
        };

        let mut errors: Vec<ParseError> = Vec::new();
        let mut parsed = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match self.element.parse_to_value(item) {
                Validation::Success(value) => parsed.push(value),
                Validation::Failure(set) => errors.extend(set.prepend_index(index)),
            }
        }

        if errors.is_empty() {
            Validation::Success(parsed)
        } else {
            Validation::Failure(ParseErrorSet::from_vec(errors))
        }
    }

    fn parse_to_value(&self, input: &Value) -> ParseResult<Value> {
        self.parse(input).map(Value::Array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parse;
    use serde_json::json;

    #[test]
    fn test_accepts_empty_array() {
        let parser = Parse::array_of(Parse::string());
        let result = parser.parse(&Value::Array(vec![]));
        assert!(result.into_result().unwrap().is_empty());
    }

    #[test]
    fn test_success_preserves_length_and_order() {
        let parser = Parse::array_of(Parse::number());
        let input = Value::from(json!([1, 2, 3]));
        let parsed = parser.parse(&input).into_result().unwrap();
        assert_eq!(
            parsed,
            vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]
        );
    }

    #[test]
    fn test_rejects_non_array_with_leaf_message() {
        let parser = Parse::array_of(Parse::string());
        let errors = parser
            .parse(&Value::String("nope".into()))
            .into_result()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.first().to_string(),
            "(root): expected array but got string"
        );
    }

    #[test]
    fn test_every_element_attempted() {
        let parser = Parse::array_of(Parse::number());
        let input = Value::from(json!(["a", "b", "c"]));
        let errors = parser.parse(&input).into_result().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_parse_to_value_wraps_array() {
        let parser = Parse::array_of(Parse::number());
        let input = Value::from(json!([4, 5]));
        let value = parser.parse_to_value(&input).into_result().unwrap();
        assert_eq!(
            value,
            Value::Array(vec![Value::Number(4.0), Value::Number(5.0)])
        );
    }
}
