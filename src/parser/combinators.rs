//! Sequential composition of parsers.
//!
//! This module provides the composition protocol: [`Bind`] for feeding one
//! parser's success into the next, [`Custom`] for lifting an arbitrary
//! function into a composition stage, and [`ParserExt`] with the chaining
//! conveniences every parser picks up.

use std::marker::PhantomData;

use stillwater::Validation;

use super::leaf::LeafParser;
use super::traits::Parser;
use super::Parse;
use crate::value::Value;
use crate::ParseResult;

/// Sequential composition of two parsers.
///
/// Runs the first parser and, only if it succeeds, feeds the success value
/// into the second. If the first fails, the second is never evaluated and
/// the first's error set is returned unchanged: bind is fail-fast and is
/// *not* an aggregation boundary, so no path element is added here.
///
/// Composition is associative; `a.bind(b).bind(c)` and `a.bind(b.bind(c))`
/// behave identically.
pub struct Bind<A, B> {
    first: A,
    second: B,
}

impl<A, B> Bind<A, B> {
    /// Composes two parsers sequentially.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<In, A, B> Parser<In> for Bind<A, B>
where
    A: Parser<In>,
    B: Parser<A::Output>,
{
    type Output = B::Output;

    fn parse(&self, input: &In) -> ParseResult<Self::Output> {
        match self.first.parse(input) {
            Validation::Success(value) => self.second.parse(&value),
            Validation::Failure(errors) => Validation::Failure(errors),
        }
    }

    fn parse_to_value(&self, input: &In) -> ParseResult<Value> {
        match self.first.parse(input) {
            Validation::Success(value) => self.second.parse_to_value(&value),
            Validation::Failure(errors) => Validation::Failure(errors),
        }
    }
}

/// An ad hoc validation stage lifted from a function.
///
/// `Custom` turns any `Fn(&In) -> ParseResult<Out>` into a parser, for
/// checks not expressible as simple type narrowing: range checks, enum
/// membership, cross-field consistency. Construct through
/// [`Parse::custom`].
///
/// # Example
///
/// ```rust
/// use conform::{Parse, ParseError, ParseErrorSet, Parser, ParserExt, Value};
/// use stillwater::Validation;
///
/// let positive = Parse::number().bind(Parse::custom(|v: &Value| {
///     match v.as_number() {
///         Some(n) if n > 0.0 => Validation::Success(n),
///         _ => Validation::Failure(ParseErrorSet::single(ParseError::at_root(
///             "expected a positive number",
///         ))),
///     }
/// }));
///
/// assert!(positive.parse(&Value::Number(3.0)).is_success());
/// assert!(positive.parse(&Value::Number(-3.0)).is_failure());
/// ```
pub struct Custom<F, In, Out> {
    run: F,
    _types: PhantomData<fn(&In) -> Out>,
}

impl<F, In, Out> Custom<F, In, Out>
where
    F: Fn(&In) -> ParseResult<Out> + Send + Sync,
{
    pub(crate) fn new(run: F) -> Self {
        Self {
            run,
            _types: PhantomData,
        }
    }
}

impl<F, In, Out> Parser<In> for Custom<F, In, Out>
where
    F: Fn(&In) -> ParseResult<Out> + Send + Sync,
    Out: Into<Value>,
{
    type Output = Out;

    fn parse(&self, input: &In) -> ParseResult<Out> {
        (self.run)(input)
    }

    fn parse_to_value(&self, input: &In) -> ParseResult<Value> {
        (self.run)(input).map(Into::into)
    }
}

/// Chaining conveniences available on every parser.
///
/// `bind` is the general composition operator; the named accessors chain a
/// fixed leaf onto the current parser and are plain shorthand for
/// `self.bind(Parse::<leaf>())`.
pub trait ParserExt<In>: Parser<In> + Sized {
    /// Sequentially composes this parser with `next`.
    ///
    /// See [`Bind`] for the short-circuit semantics.
    fn bind<Next>(self, next: Next) -> Bind<Self, Next>
    where
        Next: Parser<Self::Output>,
    {
        Bind::new(self, next)
    }

    /// Chains the null leaf onto this parser.
    fn null(self) -> Bind<Self, LeafParser>
    where
        Self: Parser<In, Output = Value>,
    {
        self.bind(Parse::null())
    }

    /// Chains the undefined leaf onto this parser.
    fn undefined(self) -> Bind<Self, LeafParser>
    where
        Self: Parser<In, Output = Value>,
    {
        self.bind(Parse::undefined())
    }

    /// Chains the boolean leaf onto this parser.
    fn boolean(self) -> Bind<Self, LeafParser>
    where
        Self: Parser<In, Output = Value>,
    {
        self.bind(Parse::boolean())
    }

    /// Chains the number leaf onto this parser.
    fn number(self) -> Bind<Self, LeafParser>
    where
        Self: Parser<In, Output = Value>,
    {
        self.bind(Parse::number())
    }

    /// Chains the string leaf onto this parser.
    fn string(self) -> Bind<Self, LeafParser>
    where
        Self: Parser<In, Output = Value>,
    {
        self.bind(Parse::string())
    }

    /// Chains the array-shape leaf onto this parser.
    fn array(self) -> Bind<Self, LeafParser>
    where
        Self: Parser<In, Output = Value>,
    {
        self.bind(Parse::array())
    }

    /// Chains the object leaf onto this parser.
    fn object(self) -> Bind<Self, LeafParser>
    where
        Self: Parser<In, Output = Value>,
    {
        self.bind(Parse::object())
    }

    /// Chains the function leaf onto this parser.
    fn function(self) -> Bind<Self, LeafParser>
    where
        Self: Parser<In, Output = Value>,
    {
        self.bind(Parse::function())
    }
}

impl<In, P: Parser<In>> ParserExt<In> for P {}
