use std::fmt;

use logos::Logos;

/// Represents a lexical token in the input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Each variant carries exactly the payload its kind needs, so a number always
/// has a value and nothing else does.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\f\r]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Arithmetic operators: `+`, `-`, `*`, `/` and `%`.
    #[token("+", |_| Operator::Plus)]
    #[token("-", |_| Operator::Minus)]
    #[token("*", |_| Operator::Star)]
    #[token("/", |_| Operator::Slash)]
    #[token("%", |_| Operator::Percent)]
    Operator(Operator),
    /// Round brackets used for grouping.
    #[token("(", |_| Bracket::LeftRound)]
    #[token(")", |_| Bracket::RightRound)]
    Bracket(Bracket),
    /// Statement separators: `;`, a newline, or a NUL character.
    #[token(";", |_| Separator::EndOfStatement)]
    #[token("\n", |_| Separator::EndOfLine)]
    #[token("\0", |_| Separator::EndOfString)]
    Separator(Separator),
    /// The input source has no more characters.
    ///
    /// Never produced by the scanner itself; the token stream emits it once
    /// the underlying reader is exhausted.
    EndOfInput,
}

/// Binary and unary arithmetic operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
}

/// Grouping brackets.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Bracket {
    /// `(`
    LeftRound,
    /// `)`
    RightRound,
}

/// Tokens that end a statement without ending the input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Separator {
    /// `;`
    EndOfStatement,
    /// A newline character.
    EndOfLine,
    /// A NUL character.
    EndOfString,
}

impl Token {
    /// Returns `true` for `;`, newline and NUL, the tokens the read-eval-print
    /// loop skips between expressions.
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(self, Self::Separator(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Operator(op) => write!(f, "'{op}'"),
            Self::Bracket(bracket) => write!(f, "'{bracket}'"),
            Self::Separator(Separator::EndOfStatement) => write!(f, "';'"),
            Self::Separator(Separator::EndOfLine) => write!(f, "end of line"),
            Self::Separator(Separator::EndOfString) => write!(f, "end of string"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
            Self::Percent => '%',
        };
        write!(f, "{symbol}")
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeftRound => write!(f, "("),
            Self::RightRound => write!(f, ")"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid float, which the lexer reports as an
///   error.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
