//! Record combinators.
//!
//! Two variants, differing in what each field parser observes:
//! [`DictParser`] hands every field parser the whole candidate input, so a
//! field can derive its value from several source keys;
//! [`SimpleDictParser`] first extracts the value at the field's own key and
//! validates that alone, which is the common one-key-per-field case.
//!
//! Both are aggregation boundaries: every field is attempted in declared
//! order, failing fields' errors are prepended with the field name, and the
//! record fails iff at least one field fails. Both validate exactly the
//! declared field set and are silent about extra keys in the input.

use indexmap::IndexMap;
use stillwater::Validation;

use super::traits::{type_mismatch, Parser, ValueParser};
use crate::error::{ParseError, ParseErrorSet};
use crate::value::Value;
use crate::ParseResult;

/// Runs the declared fields against an input, aggregating failures.
///
/// `observe` decides what each field parser sees; everything else (visit
/// order, path prepending, all-or-nothing success) is shared between the
/// two record variants.
fn parse_fields(
    fields: &IndexMap<String, Box<dyn ValueParser>>,
    observe: impl Fn(&str, &dyn ValueParser) -> ParseResult<Value>,
) -> ParseResult<IndexMap<String, Value>> {
    let mut errors: Vec<ParseError> = Vec::new();
    let mut parsed = IndexMap::with_capacity(fields.len());
    for (name, parser) in fields {
        match observe(name, parser.as_ref()) {
            Validation::Success(value) => {
                parsed.insert(name.clone(), value);
            }
            Validation::Failure(set) => errors.extend(set.prepend_key(name.clone())),
        }
    }

    if errors.is_empty() {
        Validation::Success(parsed)
    } else {
        Validation::Failure(ParseErrorSet::from_vec(errors))
    }
}

/// A record combinator whose field parsers see the whole candidate input.
///
/// Built from an ordered mapping of field name to parser. Each field parser
/// is applied to the **entire** input, not the value at its own key, which
/// lets a field derive its result from multiple source keys. On total
/// success the output is a record containing exactly the declared keys,
/// each set to its field's success value.
///
/// For the common case where each field reads only its own key, use
/// [`SimpleDictParser`].
///
/// # Example
///
/// ```rust
/// use conform::{DictParser, Parse, ParseErrorSet, Parser, Value};
/// use stillwater::Validation;
///
/// // `span` is derived from two source keys of the same input.
/// let parser = DictParser::new().field(
///     "span",
///     Parse::custom(|v: &Value| match (v.get("start"), v.get("end")) {
///         (Some(Value::Number(a)), Some(Value::Number(b))) => {
///             Validation::Success(Value::Number(b - a))
///         }
///         _ => Validation::Failure(ParseErrorSet::single(
///             conform::ParseError::at_root("expected start and end numbers"),
///         )),
///     }),
/// );
///
/// let input = Value::from(serde_json::json!({"start": 3, "end": 10}));
/// let record = parser.parse(&input).into_result().unwrap();
/// assert_eq!(record["span"], Value::Number(7.0));
/// ```
#[derive(Default)]
pub struct DictParser {
    fields: IndexMap<String, Box<dyn ValueParser>>,
}

impl DictParser {
    /// Creates a record combinator with no fields.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Creates a record combinator from an already-built field mapping.
    pub fn from_fields(fields: IndexMap<String, Box<dyn ValueParser>>) -> Self {
        Self { fields }
    }

    /// Declares a field. Fields are visited in declaration order, both for
    /// the success value and for error concatenation.
    pub fn field<P>(mut self, name: impl Into<String>, parser: P) -> Self
    where
        P: Parser<Value> + 'static,
    {
        self.fields.insert(name.into(), Box::new(parser));
        self
    }
}

impl Parser for DictParser {
    type Output = IndexMap<String, Value>;

    fn parse(&self, input: &Value) -> ParseResult<IndexMap<String, Value>> {
        parse_fields(&self.fields, |_, parser| parser.parse_value(input))
    }

    fn parse_to_value(&self, input: &Value) -> ParseResult<Value> {
        self.parse(input).map(Value::Object)
    }
}

/// A record combinator whose field parsers see only their own key's value.
///
/// Before applying each field parser, the candidate is required to be a
/// generic object and the value at the field's key is extracted — absent
/// keys extract as [`Value::Undefined`]. The field parser is then applied
/// to that single value only. This is exactly [`DictParser`] with every
/// field pre-composed with "extract key K, then validate"; one visible
/// consequence is that a non-object input produces one
/// `expected object but got …` error per declared field, each at that
/// field's path.
///
/// # Example
///
/// ```rust
/// use conform::{Parse, Parser, SimpleDictParser, Value};
///
/// let parser = SimpleDictParser::new()
///     .field("a", Parse::number())
///     .field("b", Parse::string());
///
/// let input = Value::from(serde_json::json!({"a": "x", "b": 5}));
/// let errors = parser.parse(&input).into_result().unwrap_err();
///
/// let rendered: Vec<_> = errors.iter().map(|e| e.to_string()).collect();
/// assert_eq!(rendered, vec![
///     "a: expected number but got string",
///     "b: expected string but got number",
/// ]);
/// ```
#[derive(Default)]
pub struct SimpleDictParser {
    fields: IndexMap<String, Box<dyn ValueParser>>,
}

impl SimpleDictParser {
    /// Creates a record combinator with no fields.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Creates a record combinator from an already-built field mapping.
    pub fn from_fields(fields: IndexMap<String, Box<dyn ValueParser>>) -> Self {
        Self { fields }
    }

    /// Declares a field, validated against the value at `name` in the
    /// input. Fields are visited in declaration order.
    pub fn field<P>(mut self, name: impl Into<String>, parser: P) -> Self
    where
        P: Parser<Value> + 'static,
    {
        self.fields.insert(name.into(), Box::new(parser));
        self
    }
}

impl Parser for SimpleDictParser {
    type Output = IndexMap<String, Value>;

    fn parse(&self, input: &Value) -> ParseResult<IndexMap<String, Value>> {
        static UNDEFINED: Value = Value::Undefined;
        parse_fields(&self.fields, |name, parser| match input.as_object() {
            Some(map) => parser.parse_value(map.get(name).unwrap_or(&UNDEFINED)),
            None => Validation::Failure(type_mismatch("object", input)),
        })
    }

    fn parse_to_value(&self, input: &Value) -> ParseResult<Value> {
        self.parse(input).map(Value::Object)
    }
}
