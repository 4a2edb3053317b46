use crate::error::Error;

/// Additive and multiplicative levels.
///
/// Left-associative folds over `+`/`-` (`expression`) and `*`/`/`/`%`
/// (`term`).
pub mod binary;
/// Primary level.
///
/// Numbers, unary signs and parenthesised groups.
pub mod unary;

pub use binary::{expression, term};
pub use unary::primary;

/// Result type used by the parser.
///
/// Parsing and evaluation happen in the same pass, so every routine yields
/// either the computed value or the error that stopped it. Lexing and input
/// errors surface here too, since tokens are pulled lazily.
pub type EvalResult<T> = Result<T, Error>;
