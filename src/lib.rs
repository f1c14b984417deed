//! # letcalc
//!
//! letcalc evaluates a small expression language written in prefix call
//! syntax. It supports integer literals, variables, the arithmetic functions
//! `add`, `sub`, `multi` and `div`, and lexically scoped `let` bindings, as in
//! `let(a, 5, let(b, multi(a, 10), add(b, a)))`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::EvalResult,
    interpreter::{evaluator::core::evaluate_tree, lexer::tokenize, parser::core::parse_tree},
};

/// Defines the call tree.
///
/// This module declares the `Node` enum, which represents a parsed expression
/// as a tree of arithmetic calls, `let` bindings, literals and variables. The
/// tree is built by the parser and consumed by the evaluator.
pub mod ast;
/// Provides the error type shared by every stage.
///
/// This module defines `EvaluationError`, the closed set of failures that
/// lexing, parsing and evaluating an expression can produce, together with
/// the `EvalResult` alias.
pub mod error;
/// Runs the lexer, the parser and the evaluator.
///
/// This module ties the three stages together. Data flows strictly from the
/// lexer to the parser to the evaluator; no stage calls back into an earlier
/// one.
pub mod interpreter;
/// Stack growth for deeply nested expressions.
mod stack;

/// Evaluates an expression and returns its integer value.
///
/// The expression is tokenized, parsed into a call tree and reduced. Keywords
/// and variable names are case-insensitive and whitespace is ignored. Pass
/// `None` to model an absent expression.
///
/// # Errors
/// Returns the first [`error::EvaluationError`] met by any stage.
///
/// # Examples
/// ```
/// use letcalc::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("add(1, multi(2, 3))").unwrap(), 7);
/// assert_eq!(evaluate("let(a, 5, let(b, multi(a, 10), add(b, a)))").unwrap(), 55);
///
/// // 'b' is never bound.
/// let err = evaluate("let(a, 5, add(a, b))").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidArguments);
///
/// assert_eq!(evaluate(None::<&str>).unwrap_err().kind(), ErrorKind::InputMissing);
/// ```
pub fn evaluate<'a>(raw: impl Into<Option<&'a str>>) -> EvalResult<i32> {
    let raw = raw.into().unwrap_or_default();
    debug!("evaluating '{raw}'");

    let tokens = tokenize(raw)?;
    let tree = parse_tree(&tokens)?;
    let result = evaluate_tree(tree)?;

    debug!("'{raw}' evaluated to {result}");
    Ok(result)
}
