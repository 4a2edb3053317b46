//! # calcrepl
//!
//! calcrepl is an interactive arithmetic expression evaluator written in Rust.
//! It reads characters from an input stream, tokenizes them, and evaluates
//! each expression with standard precedence as it parses, printing every
//! result in a read-eval-print loop.

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

use crate::{
    error::{Error, ParseError},
    interpreter::{lexer::Token, parser::expression, token_stream::TokenStream},
};

/// Provides the error types for lexing, parsing and input.
///
/// This module defines every error that can stop an evaluation. Each one
/// carries the line it was raised on, and all of them render as a single
/// human-readable sentence for the loop's diagnostic line.
///
/// # Responsibilities
/// - Defines `LexError` and `ParseError` for the two failure stages.
/// - Unifies them with input failures in `Error` so `?` composes.
pub mod error;
/// Holds the whole evaluation pipeline.
///
/// This module ties together the lexer, the token stream, the parser and the
/// read-eval-print loop.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Parses and evaluates expressions in a single pass.
/// - Drives the interactive loop and its error policy.
pub mod interpreter;

pub use interpreter::repl::{Outcome, Session, SessionOptions};

/// Evaluates a single expression held in a string.
///
/// Separators (`;`, newlines, NUL) may surround the expression, but anything
/// else after it is an error.
///
/// # Errors
/// Returns an error if the source does not lex, does not parse, contains no
/// expression, or holds more than one.
///
/// # Examples
/// ```
/// use calcrepl::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("5 / 0").unwrap(), f64::INFINITY);
///
/// // A missing closing bracket is an error.
/// assert!(evaluate("(2 + 3").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    let mut tokens = TokenStream::new(source.as_bytes());

    let first = tokens.skip_separators()?;
    tokens.putback(first);
    let value = expression(&mut tokens)?;

    match tokens.skip_separators()? {
        Token::EndOfInput => Ok(value),
        token => Err(ParseError::TrailingTokens { token: token.to_string(),
                                                  line:  tokens.line(), }.into()),
    }
}
