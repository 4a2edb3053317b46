/// The lexer module declares the token type and its scanning rules.
///
/// Tokens are recognised with a `logos`-derived scanner: numerals, the five
/// arithmetic operators, round brackets and the three statement separators.
///
/// # Responsibilities
/// - Defines the `Token` sum type and its payload enums.
/// - Declares which character sequences form which token.
/// - Renders tokens readably for diagnostics.
pub mod lexer;
/// The parser module evaluates expressions while parsing them.
///
/// Three mutually recursive routines, `expression`, `term` and `primary`,
/// implement operator-precedence recursive descent. Each consumes tokens and
/// returns a number directly; no syntax tree is built.
///
/// # Responsibilities
/// - Enforces precedence and left associativity.
/// - Applies the arithmetic, including the division by zero policy.
/// - Reports grammar violations with line information.
pub mod parser;
/// The read-eval-print loop.
///
/// Sequences prompt, separator skipping, evaluation and output, and owns the
/// error boundary that decides whether a failure ends the session.
pub mod repl;
/// The token stream feeds the parser.
///
/// Wraps any buffered reader, scans lines lazily into tokens and supports
/// pushback for one token of lookahead.
pub mod token_stream;
