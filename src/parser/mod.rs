//! Parsers: leaves, composition, and the combinators built from them.
//!
//! A caller builds a parser expression by composing leaves with
//! [`bind`](ParserExt::bind)/[`custom`](Parse::custom) and the array/record
//! combinators, then applies it once to an input. Data flows downward
//! (input into parser); errors flow upward, accumulating path context at
//! each aggregation boundary they pass.
//!
//! # Example
//!
//! ```rust
//! use conform::{Parse, Parser, SimpleDictParser, Value};
//!
//! let parser = SimpleDictParser::new()
//!     .field("name", Parse::string())
//!     .field("scores", Parse::array_of(Parse::number()));
//!
//! let input = Value::from(serde_json::json!({
//!     "name": "Alice",
//!     "scores": [90, 95]
//! }));
//! assert!(parser.parse(&input).is_success());
//! ```

mod array;
mod combinators;
mod dict;
mod function;
mod leaf;
mod traits;

pub use array::ArrayParser;
pub use combinators::{Bind, Custom, ParserExt};
pub use dict::{DictParser, SimpleDictParser};
pub use function::{CheckedFn, FunctionResultParser};
pub use leaf::LeafParser;
pub use traits::{Parser, ValueParser};

use crate::value::Value;
use crate::ParseResult;

/// Entry point for creating parsers.
///
/// `Parse` provides the leaf parsers — each a single primitive-category
/// check — plus constructors for the composition stages and combinators.
/// Everything returned here is immutable and freely shareable.
///
/// # Example
///
/// ```rust
/// use conform::{Parse, Parser, Value};
///
/// assert!(Parse::null().parse(&Value::Null).is_success());
/// assert!(Parse::number().parse(&Value::String("42".into())).is_failure());
/// ```
pub struct Parse;

impl Parse {
    /// The null leaf: accepts exactly `Value::Null`.
    pub fn null() -> LeafParser {
        LeafParser::new("null", Value::is_null)
    }

    /// The undefined leaf: accepts exactly `Value::Undefined`.
    ///
    /// Null is not undefined; it fails here with
    /// `expected undefined but got object` (null's runtime category is the
    /// generic object category, see [`Value::category`]).
    pub fn undefined() -> LeafParser {
        LeafParser::new("undefined", Value::is_undefined)
    }

    /// The boolean leaf.
    pub fn boolean() -> LeafParser {
        LeafParser::new("boolean", Value::is_boolean)
    }

    /// The number leaf.
    pub fn number() -> LeafParser {
        LeafParser::new("number", Value::is_number)
    }

    /// The string leaf.
    pub fn string() -> LeafParser {
        LeafParser::new("string", Value::is_string)
    }

    /// The array-shape leaf. Checks shape only; use
    /// [`Parse::array_of`] to validate elements.
    pub fn array() -> LeafParser {
        LeafParser::new("array", Value::is_array)
    }

    /// The generic-object leaf.
    ///
    /// Accepts real objects only: null is rejected here even though its
    /// runtime *category* string is `"object"`.
    pub fn object() -> LeafParser {
        LeafParser::new("object", Value::is_object)
    }

    /// The callable leaf.
    pub fn function() -> LeafParser {
        LeafParser::new("function", Value::is_function)
    }

    /// Lifts a function into a composition stage.
    ///
    /// See [`Custom`] for an example.
    pub fn custom<In, Out, F>(run: F) -> Custom<F, In, Out>
    where
        F: Fn(&In) -> ParseResult<Out> + Send + Sync,
    {
        Custom::new(run)
    }

    /// The array combinator: validates every element of an array-shaped
    /// input against `element`, aggregating all element failures.
    pub fn array_of<P>(element: P) -> ArrayParser<P>
    where
        P: Parser<Value>,
    {
        ArrayParser::new(element)
    }

    /// The general record combinator; see [`DictParser`].
    pub fn dict() -> DictParser {
        DictParser::new()
    }

    /// The one-key-per-field record combinator; see [`SimpleDictParser`].
    pub fn simple_dict() -> SimpleDictParser {
        SimpleDictParser::new()
    }

    /// The function-result transform: wraps a callable input so each
    /// invocation's return value is validated by `result`.
    pub fn function_result<P>(result: P) -> FunctionResultParser
    where
        P: Parser<Value> + 'static,
    {
        FunctionResultParser::new(result)
    }
}
