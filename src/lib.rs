//! # Conform
//!
//! A validation library that converts values of unknown, untyped shape —
//! decoded wire payloads, dynamic configuration, foreign-function return
//! values — into typed values, producing either the typed result or a
//! structured, path-annotated error report.
//!
//! ## Overview
//!
//! Small parsers compose into parsers for arrays, records, and transformed
//! function results. Sequential composition ([`ParserExt::bind`]) is
//! fail-fast; the array and record combinators are fail-accumulate: every
//! element and field is attempted and all failures are reported together,
//! each annotated with its root-to-leaf path, so a single pass reports
//! every problem in a payload. Error accumulation rides on stillwater's
//! `Validation` type.
//!
//! ## Core Types
//!
//! - [`Value`]: the untyped input model (null, undefined, numbers, strings,
//!   arrays, objects, callables)
//! - [`Parser`]: a composable check-and-convert step; [`Parse`] is the
//!   factory for leaves and combinators
//! - [`ParseError`] / [`ParseErrorSet`]: one failure with its [`Path`] / a
//!   non-empty ordered collection of failures
//! - [`ParseErrorAlternatives`]: reserved shape for union-style failures
//!
//! ## Example
//!
//! ```rust
//! use conform::{Parse, Parser, SimpleDictParser, Value};
//!
//! let parser = SimpleDictParser::new()
//!     .field("list", Parse::array_of(SimpleDictParser::new().field("x", Parse::number())));
//!
//! let input = Value::from(serde_json::json!({"list": [{"x": 1}, {"x": "bad"}]}));
//! let errors = parser.parse(&input).into_result().unwrap_err();
//!
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.first().path.to_string(), "list[1].x");
//! assert_eq!(
//!     errors.first().to_string(),
//!     "list[1].x: expected number but got string"
//! );
//! ```
//!
//! ## Limits
//!
//! Evaluation is synchronous and recursive: a `parse` call walks the input
//! tree on the call stack, so recursion depth is bounded by input nesting
//! depth and pathologically deep input can exhaust the stack. There is no
//! built-in depth cap.

pub mod error;
pub mod parser;
pub mod path;
pub mod value;

pub use error::{ErrorDetail, ParseError, ParseErrorAlternatives, ParseErrorSet};
pub use parser::{
    ArrayParser, Bind, CheckedFn, Custom, DictParser, FunctionResultParser, LeafParser, Parse,
    Parser, ParserExt, SimpleDictParser, ValueParser,
};
pub use path::{Path, PathElement};
pub use value::{Value, ValueFn};

/// A validation attempt yields exactly one of a typed success or a
/// non-empty error set.
pub type ParseResult<T> = stillwater::Validation<T, ParseErrorSet>;
