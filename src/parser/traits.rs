//! Traits for parser polymorphism.
//!
//! This module provides the [`Parser`] trait that every validation stage
//! implements, and the type-erased [`ValueParser`] used where parsers with
//! different output types must live side by side (record fields, array
//! elements behind a function transform, and so on).

use crate::error::ParseErrorSet;
use crate::value::Value;
use crate::ParseResult;

/// A reusable, composable check-and-convert step.
///
/// A parser is a pure function of its input: `parse` either narrows the
/// input to a typed `Output` or returns a non-empty [`ParseErrorSet`].
/// There is no third state and no exception-based failure path. Parsers
/// hold no mutable state, so a single instance can be applied repeatedly
/// and shared freely across threads.
///
/// The input type defaults to [`Value`], the untyped model every chain
/// starts from; composition stages further down a [`bind`] chain see the
/// previous stage's output type instead.
///
/// [`bind`]: crate::ParserExt::bind
///
/// # Example
///
/// ```rust
/// use conform::{Parse, Parser, Value};
///
/// let parser = Parse::number();
/// let result = parser.parse(&Value::Number(42.0));
/// assert!(result.is_success());
///
/// let result = parser.parse(&Value::String("42".into()));
/// assert!(result.is_failure());
/// ```
pub trait Parser<In = Value>: Send + Sync {
    /// The typed output produced by successful validation.
    type Output;

    /// Validates the input, producing either the typed output or every
    /// failure discovered, each annotated with its path.
    fn parse(&self, input: &In) -> ParseResult<Self::Output>;

    /// Validates the input and returns the result as a [`Value`].
    ///
    /// This is what lets parsers with different output types be stored
    /// uniformly behind [`ValueParser`] in record and array positions.
    fn parse_to_value(&self, input: &In) -> ParseResult<Value>;
}

/// A type-erased parser over [`Value`] inputs and outputs.
///
/// Record combinators store their field parsers as `Box<dyn ValueParser>`;
/// the function-result transform holds its result parser the same way. Any
/// `Parser<Value>` implements this automatically.
pub trait ValueParser: Send + Sync {
    /// Validates a value and returns the result as a [`Value`].
    fn parse_value(&self, input: &Value) -> ParseResult<Value>;
}

impl<P: Parser<Value>> ValueParser for P {
    fn parse_value(&self, input: &Value) -> ParseResult<Value> {
        self.parse_to_value(input)
    }
}

/// Builds the single-error set every leaf-style shape check produces.
///
/// The message format is fixed: `expected <type name> but got <category>`,
/// with an empty path until an enclosing context wraps it.
pub(crate) fn type_mismatch(expected: &str, got: &Value) -> ParseErrorSet {
    ParseErrorSet::single(crate::error::ParseError::at_root(format!(
        "expected {} but got {}",
        expected,
        got.category()
    )))
}
