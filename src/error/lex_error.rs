#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning characters into tokens.
pub enum LexError {
    /// A character sequence that does not begin any known lexeme.
    UnknownLexeme {
        /// The offending source text.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl LexError {
    /// The source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownLexeme { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLexeme { lexeme, line } => write!(f,
                                                           "Lexer error on line {line}: Unknown lexeme '{}'.",
                                                           lexeme.escape_debug()),
        }
    }
}

impl std::error::Error for LexError {}
