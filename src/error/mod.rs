//! Error tree for validation failures.
//!
//! This module provides [`ParseError`] for single failures,
//! [`ParseErrorSet`] for accumulating multiple failures, and
//! [`ParseErrorAlternatives`] as the reserved shape for union-style
//! failures.

mod parse_error;

pub use parse_error::{ErrorDetail, ParseError, ParseErrorAlternatives, ParseErrorSet};
