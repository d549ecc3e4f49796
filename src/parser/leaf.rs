//! Predicate-based leaf parsers.
//!
//! A leaf narrows an untyped input to one primitive category and nothing
//! more. Construct them through the [`Parse`](crate::Parse) factory.

use stillwater::Validation;

use super::traits::{type_mismatch, Parser};
use crate::value::Value;
use crate::ParseResult;

/// A parser performing one primitive-category check.
///
/// On success the input is returned as-is, not coerced. On failure the
/// result is a single error with an empty path and the message
/// `expected <type name> but got <category>`; a leaf never allocates more
/// than one error.
#[derive(Clone)]
pub struct LeafParser {
    type_name: &'static str,
    predicate: fn(&Value) -> bool,
}

impl LeafParser {
    pub(crate) const fn new(type_name: &'static str, predicate: fn(&Value) -> bool) -> Self {
        Self {
            type_name,
            predicate,
        }
    }

    /// The human-readable type name this leaf checks for, as it appears in
    /// failure messages.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl Parser for LeafParser {
    type Output = Value;

    fn parse(&self, input: &Value) -> ParseResult<Value> {
        if (self.predicate)(input) {
            Validation::Success(input.clone())
        } else {
            Validation::Failure(type_mismatch(self.type_name, input))
        }
    }

    fn parse_to_value(&self, input: &Value) -> ParseResult<Value> {
        self.parse(input)
    }
}
