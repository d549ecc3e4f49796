//! Parse error types.

use std::fmt::{self, Display};

use stillwater::prelude::*;
use thiserror::Error;

use crate::path::{Path, PathElement};

/// What went wrong at one point of the input.
///
/// Almost every failure carries a plain message. The `Alternatives` variant
/// is the reserved shape for "none of several candidate shapes matched";
/// see [`ParseErrorAlternatives`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorDetail {
    /// A human-readable description of a single failure.
    #[error("{0}")]
    Message(String),
    /// The failures of every alternative shape that was attempted.
    #[error("{0}")]
    Alternatives(ParseErrorAlternatives),
}

/// A single validation failure with its location.
///
/// The path is built outermost-first: errors are created with an empty path
/// at the failing leaf, and each enclosing array or record context prepends
/// its own element as the error passes upward (see
/// [`ParseErrorSet::prepend`]), so the final sequence reads root-to-leaf.
///
/// # Example
///
/// ```rust
/// use conform::{ParseError, Path};
///
/// let error = ParseError::new(Path::from_key("email"), "expected string but got number");
/// assert_eq!(error.to_string(), "email: expected string but got number");
///
/// let root = ParseError::at_root("expected null but got undefined");
/// assert!(root.path.is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path}: {error}")]
pub struct ParseError {
    /// Where in the input the failure occurred.
    pub path: Path,
    /// What went wrong there.
    pub error: ErrorDetail,
}

impl ParseError {
    /// Creates an error with the given path and message.
    pub fn new(path: Path, message: impl Into<String>) -> Self {
        Self {
            path,
            error: ErrorDetail::Message(message.into()),
        }
    }

    /// Creates an error at the root path.
    ///
    /// This is how leaf failures start out; enclosing contexts add path
    /// elements as the error travels upward.
    pub fn at_root(message: impl Into<String>) -> Self {
        Self::new(Path::root(), message)
    }

    /// Creates an error carrying the failures of several attempted
    /// alternatives.
    pub fn alternatives(path: Path, alternatives: ParseErrorAlternatives) -> Self {
        Self {
            path,
            error: ErrorDetail::Alternatives(alternatives),
        }
    }

    /// Returns a copy of this error with `element` prepended to its path.
    ///
    /// For an `Alternatives` error only the outer path moves; the error
    /// sets inside each alternative stay relative to the point where the
    /// alternatives were attempted.
    fn prepend(&self, element: PathElement) -> Self {
        Self {
            path: self.path.prepend(element),
            error: self.error.clone(),
        }
    }
}

/// A failed attempt to satisfy one of several alternative shapes.
///
/// Each attempted alternative contributes its own [`ParseErrorSet`]. This
/// type is an extension point for a future one-of combinator: the data
/// shape is defined and rendered, but no combinator in this crate
/// constructs it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseErrorAlternatives {
    alternatives: Vec<ParseErrorSet>,
}

impl ParseErrorAlternatives {
    /// Creates an alternatives record from the error set of each attempted
    /// alternative.
    pub fn new(alternatives: Vec<ParseErrorSet>) -> Self {
        Self { alternatives }
    }

    /// Returns the number of attempted alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns true if no alternatives were recorded.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Returns an iterator over the per-alternative error sets.
    pub fn iter(&self) -> impl Iterator<Item = &ParseErrorSet> {
        self.alternatives.iter()
    }
}

impl Display for ParseErrorAlternatives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no alternative matched ({} candidate shape(s) failed)",
            self.alternatives.len()
        )
    }
}

/// A non-empty, ordered collection of validation failures.
///
/// `ParseErrorSet` wraps a `NonEmptyVec<ParseError>` so a failure always
/// carries at least one error, which is what makes it usable as the failure
/// side of `Validation<T, ParseErrorSet>`. Order reflects discovery order
/// and is preserved by every operation.
///
/// # Combining errors
///
/// `ParseErrorSet` implements `Semigroup`, which is how sibling failures
/// are accumulated at array and record boundaries:
///
/// ```rust
/// use conform::{ParseError, ParseErrorSet};
/// use stillwater::prelude::*;
///
/// let first = ParseErrorSet::single(ParseError::at_root("expected number but got string"));
/// let second = ParseErrorSet::single(ParseError::at_root("expected string but got number"));
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParseErrorSet(NonEmptyVec<ParseError>);

impl ParseErrorSet {
    /// Creates a set containing a single error.
    pub fn single(error: ParseError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a set from a `NonEmptyVec` of errors.
    pub fn from_non_empty(errors: NonEmptyVec<ParseError>) -> Self {
        Self(errors)
    }

    /// Creates a set from a `Vec` of errors.
    ///
    /// Use this when a combinator has already collected its failures and
    /// checked there is at least one.
    ///
    /// # Panics
    ///
    /// Panics if the provided vec is empty.
    pub fn from_vec(errors: Vec<ParseError>) -> Self {
        Self(NonEmptyVec::from_vec(errors).expect("ParseErrorSet requires at least one error"))
    }

    /// Returns the number of errors in this set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false; the set is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &ParseError> {
        self.0.iter()
    }

    /// Returns the first error in the set.
    pub fn first(&self) -> &ParseError {
        self.0.head()
    }

    /// Converts this set into a `Vec<ParseError>`.
    pub fn into_vec(self) -> Vec<ParseError> {
        self.0.into_vec()
    }

    /// Returns a new set where every member has `element` inserted at the
    /// front of its path, preserving order.
    ///
    /// This is the sole mechanism for building root-to-leaf paths: each
    /// aggregation boundary (array element, record field) calls it exactly
    /// once as the errors pass upward through it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conform::{ParseError, ParseErrorSet, PathElement};
    ///
    /// let errors = ParseErrorSet::single(ParseError::at_root("expected number but got string"))
    ///     .prepend(PathElement::index(1))
    ///     .prepend(PathElement::key("list"));
    ///
    /// assert_eq!(errors.first().path.to_string(), "list[1]");
    /// ```
    pub fn prepend(self, element: PathElement) -> Self {
        let errors: Vec<ParseError> = self
            .0
            .into_vec()
            .iter()
            .map(|e| e.prepend(element.clone()))
            .collect();
        Self::from_vec(errors)
    }

    /// Prepends a record-key element to every member's path.
    pub fn prepend_key(self, name: impl Into<String>) -> Self {
        self.prepend(PathElement::Key(name.into()))
    }

    /// Prepends an array-index element to every member's path.
    pub fn prepend_index(self, index: usize) -> Self {
        self.prepend(PathElement::Index(index))
    }
}

impl Semigroup for ParseErrorSet {
    fn combine(self, other: Self) -> Self {
        ParseErrorSet(self.0.combine(other.0))
    }
}

impl Display for ParseErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrorSet {}

impl IntoIterator for ParseErrorSet {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a ParseErrorSet {
    type Item = &'a ParseError;
    type IntoIter = Box<dyn Iterator<Item = &'a ParseError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

// All fields are owned types, so both error types stay Send + Sync; these
// assertions keep that true if the types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ParseError>();
    assert_sync::<ParseError>();
    assert_send::<ParseErrorSet>();
    assert_sync::<ParseErrorSet>();
};
