use std::fmt;

/// Lexing errors.
///
/// Raised by the token stream when a character does not start any known
/// lexeme. A lexing error is never recovered from inside an expression; it
/// unwinds straight to the read-eval-print loop.
pub mod lex_error;
/// Parsing errors.
///
/// Raised by the parser when a token appears where the grammar forbids it,
/// such as a missing closing bracket or an operator with no operand.
pub mod parse_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Every failure that can end an evaluation cycle.
///
/// The parser routines pull tokens lazily from the input, so a single call to
/// `expression` can fail while lexing, while parsing, or while reading the
/// underlying source. This enum unifies the three so `?` composes across the
/// whole pipeline.
#[derive(Debug)]
pub enum Error {
    /// The lexer met a character it does not recognise.
    Lex(LexError),
    /// The parser met a token the grammar does not allow.
    Parse(ParseError),
    /// Reading from the input source failed.
    Io(std::io::Error),
}

impl Error {
    /// Returns `true` if the input source itself failed, which no amount of
    /// skipping ahead can recover from.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl Error {
    /// The source line a lexing or parsing error was raised on. Input
    /// failures have no line.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.line()),
            Self::Parse(e) => Some(e.line()),
            Self::Io(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "Input error: {e}."),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
