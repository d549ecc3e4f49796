//! Function-result transform.

use std::fmt;
use std::sync::Arc;

use stillwater::Validation;

use super::traits::{type_mismatch, Parser, ValueParser};
use crate::value::{Value, ValueFn};
use crate::ParseResult;

/// Wraps a callable input so that invoking it yields a validated result.
///
/// Given a parser for the return type, this transform checks that the input
/// is callable and succeeds with a new callable, [`CheckedFn`]. Calling the
/// wrapper invokes the original with the given arguments and applies the
/// return-type parser to whatever comes back, so every invocation yields a
/// `ParseResult` instead of a raw value — validation is deferred from
/// call-construction time to each call.
///
/// # Example
///
/// ```rust
/// use conform::{Parse, Parser, Value};
///
/// let parser = Parse::function_result(Parse::number());
///
/// let f = Value::function(|_| Value::Number(5.0));
/// let checked = parser.parse(&f).into_result().unwrap();
/// assert_eq!(checked.call(&[]).into_result().unwrap(), Value::Number(5.0));
///
/// let g = Value::function(|_| Value::String("5".into()));
/// let checked = parser.parse(&g).into_result().unwrap();
/// let errors = checked.call(&[]).into_result().unwrap_err();
/// assert_eq!(
///     errors.first().to_string(),
///     "(root): expected number but got string"
/// );
/// ```
pub struct FunctionResultParser {
    result: Arc<dyn ValueParser>,
}

impl FunctionResultParser {
    /// Creates a transform validating each invocation's return value with
    /// `result`.
    pub fn new<P>(result: P) -> Self
    where
        P: Parser<Value> + 'static,
    {
        Self {
            result: Arc::new(result),
        }
    }
}

impl Parser for FunctionResultParser {
    type Output = CheckedFn;

    fn parse(&self, input: &Value) -> ParseResult<CheckedFn> {
        match input.as_function() {
            Some(func) => Validation::Success(CheckedFn {
                func: Arc::clone(func),
                result: Arc::clone(&self.result),
            }),
            None => Validation::Failure(type_mismatch("function", input)),
        }
    }

    /// In type-erased positions the checked wrapper is not representable as
    /// a [`Value`], so this validates callability and passes the original
    /// function value through unchanged. Use [`parse`](Parser::parse) to
    /// obtain the [`CheckedFn`].
    fn parse_to_value(&self, input: &Value) -> ParseResult<Value> {
        match input.as_function() {
            Some(_) => Validation::Success(input.clone()),
            None => Validation::Failure(type_mismatch("function", input)),
        }
    }
}

/// A callable whose return value is validated on every invocation.
#[derive(Clone)]
pub struct CheckedFn {
    func: ValueFn,
    result: Arc<dyn ValueParser>,
}

impl CheckedFn {
    /// Calls the underlying function with `args` and validates whatever it
    /// returns.
    pub fn call(&self, args: &[Value]) -> ParseResult<Value> {
        let raw = (self.func)(args);
        self.result.parse_value(&raw)
    }
}

impl fmt::Debug for CheckedFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CheckedFn(..)")
    }
}
