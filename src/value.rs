//! Dynamic value model for untyped input.
//!
//! This module provides [`Value`], the untyped input representation the
//! parsers consume. It is deliberately wider than JSON: it distinguishes an
//! explicit `null` from an absent/`undefined` value, and it can carry
//! callables, which the function-result transform wraps with return-value
//! checking.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// A callable stored inside a [`Value`].
///
/// Functions take a slice of argument values and return a raw, unvalidated
/// value. They are reference-counted so cloning a `Value` stays cheap.
pub type ValueFn = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// An untyped input value.
///
/// Every parser in this crate takes a `&Value` and narrows it to something
/// typed. The variants mirror the coarse runtime categories the failure
/// messages report; see [`Value::category`] for the exact mapping.
///
/// # Example
///
/// ```rust
/// use conform::Value;
/// use serde_json::json;
///
/// // Decoded JSON payloads convert directly.
/// let input = Value::from(json!({"name": "Alice", "age": 30}));
/// assert!(input.is_object());
/// assert_eq!(input.get("age"), Some(&Value::Number(30.0)));
/// ```
#[derive(Clone)]
pub enum Value {
    /// An explicit null.
    Null,
    /// An absent value, distinct from `null`. Record extraction produces
    /// this for missing keys.
    Undefined,
    /// A boolean.
    Bool(bool),
    /// A number. All numbers are carried as `f64`, matching the untyped
    /// sources this crate consumes.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A record of string keys to values, in insertion order.
    Object(IndexMap<String, Value>),
    /// A callable producing a raw value.
    Function(ValueFn),
}

impl Value {
    /// Wraps a closure as a function value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conform::Value;
    ///
    /// let double = Value::function(|args| match args.first() {
    ///     Some(Value::Number(n)) => Value::Number(n * 2.0),
    ///     _ => Value::Undefined,
    /// });
    /// assert!(double.is_function());
    /// ```
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Function(Arc::new(f))
    }

    /// Returns the coarse runtime category of this value, as used in
    /// failure messages.
    ///
    /// The categorization is fixed and deliberately mirrors how the untyped
    /// sources this crate models report their values:
    ///
    /// - `Null` reports `"object"` — null is a degenerate composite in those
    ///   sources, and the leaf failure messages depend on this (see the
    ///   `undefined` leaf rejecting null as `"expected undefined but got
    ///   object"`). The `object` *predicate* still rejects null; only the
    ///   category string overlaps.
    /// - `Array` reports `"array"`, never a generic `"object"`, so that a
    ///   mistyped array is identifiable in diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            Value::Null => "object",
            Value::Undefined => "undefined",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }

    /// Returns true for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for `Value::Undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns true for `Value::Bool`.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true for `Value::Number`.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true for `Value::String`.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true for `Value::Array`.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true for `Value::Object`. Null is not an object here, even
    /// though its [category](Value::category) string is `"object"`.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns true for `Value::Function`.
    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Returns the boolean if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is an `Array`.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the key map if this is an `Object`.
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the callable if this is a `Function`.
    pub fn as_function(&self) -> Option<&ValueFn> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Looks up a key on an object value. Returns `None` for non-objects
    /// and for absent keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Undefined, Value::Undefined) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            // Functions have no structural equality; identity is the best
            // available notion.
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Undefined => write!(f, "Undefined"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Object(map) => f.debug_tuple("Object").field(map).finish(),
            Value::Function(_) => write!(f, "Function(..)"),
        }
    }
}

impl From<serde_json::Value> for Value {
    /// Converts a decoded JSON payload into the dynamic value model.
    ///
    /// JSON has no `undefined` and no functions, so those variants never
    /// come out of this conversion. Numbers are widened to `f64`.
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Object(map)
    }
}
