#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// A parenthesised group was not closed with `)`.
    ExpectedClosingBracket {
        /// The token found instead of `)`.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found a token that cannot start a primary expression.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The input ended in the middle of an expression.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A complete expression was followed by something other than a
    /// separator.
    TrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// The source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedClosingBracket { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::TrailingTokens { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedClosingBracket { found, line } => write!(f,
                                                                   "Primary error on line {line}: Closing round bracket expected, found {found}."),

            Self::UnexpectedToken { token, line } => {
                write!(f, "Primary error on line {line}: Unexpected token {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Primary error on line {line}: Unexpected end of input.")
            },

            Self::TrailingTokens { token, line } => write!(f,
                                                           "Error on line {line}: Extra tokens after expression, starting at {token}."),
        }
    }
}

impl std::error::Error for ParseError {}
