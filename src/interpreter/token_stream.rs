use std::io::BufRead;

use log::{debug, trace};
use logos::Logos;

use crate::{
    error::{Error, LexError},
    interpreter::lexer::Token,
};

/// A lazily scanned stream of tokens with pushback.
///
/// Characters are pulled from the source one physical line at a time and only
/// when the next token is actually needed, so an interactive session blocks on
/// the terminal exactly when the parser is waiting for more input.
///
/// Tokens handed back with [`TokenStream::putback`] are kept on a stack and
/// returned, most recent first, before any new input is scanned.
///
/// # Example
/// ```
/// use calcrepl::interpreter::{lexer::Token, token_stream::TokenStream};
///
/// let mut tokens = TokenStream::new("1 2".as_bytes());
/// let one = tokens.get().unwrap();
/// tokens.putback(one);
/// assert_eq!(tokens.get().unwrap(), Token::Number(1.0));
/// assert_eq!(tokens.get().unwrap(), Token::Number(2.0));
/// assert_eq!(tokens.get().unwrap(), Token::EndOfInput);
/// ```
pub struct TokenStream<R> {
    source:    R,
    /// Raw bytes of the last physical line read from `source`.
    raw:       Vec<u8>,
    /// The physical line currently being scanned, including its newline.
    /// Invalid UTF-8 is replaced with U+FFFD, which no lexeme accepts.
    line_buf:  String,
    /// Byte offset of the first unscanned character in `line_buf`.
    cursor:    usize,
    line:      usize,
    buffer:    Vec<Token>,
    exhausted: bool,
}

impl<R> TokenStream<R> where R: BufRead
{
    /// Creates a token stream over `source`. Nothing is read until the first
    /// call to [`TokenStream::get`].
    pub const fn new(source: R) -> Self {
        Self { source,
               raw: Vec::new(),
               line_buf: String::new(),
               cursor: 0,
               line: 0,
               buffer: Vec::new(),
               exhausted: false }
    }

    /// Returns the next token.
    ///
    /// Pushed back tokens are returned first, in last-in first-out order.
    /// Otherwise the next lexeme is scanned from the source. Once the source
    /// is exhausted every further call yields [`Token::EndOfInput`].
    ///
    /// # Errors
    /// - [`Error::Lex`] if the next characters do not form a known lexeme. The
    ///   offending characters are consumed.
    /// - [`Error::Io`] if reading from the source fails.
    pub fn get(&mut self) -> Result<Token, Error> {
        if let Some(token) = self.buffer.pop() {
            trace!("replaying {token:?}");
            return Ok(token);
        }

        loop {
            if self.cursor >= self.line_buf.len() {
                if !self.fill_line()? {
                    return Ok(Token::EndOfInput);
                }
                continue;
            }

            let rest = &self.line_buf[self.cursor..];
            let mut lexer = Token::lexer(rest);
            match lexer.next() {
                Some(Ok(token)) => {
                    self.cursor += lexer.span().end;
                    trace!("line {}: scanned {token:?}", self.line);
                    return Ok(token);
                },
                Some(Err(())) => {
                    // Report and consume a single character so the cursor
                    // always lands on a char boundary.
                    let start = lexer.span().start;
                    let bad = rest[start..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                    self.cursor += start + bad.len_utf8();
                    return Err(LexError::UnknownLexeme { lexeme: bad.to_string(),
                                                         line:   self.line, }.into());
                },
                // Only skippable whitespace is left on this line.
                None => self.cursor = self.line_buf.len(),
            }
        }
    }

    /// Pushes `token` back so the next [`TokenStream::get`] returns it without
    /// touching the source.
    pub fn putback(&mut self, token: Token) {
        debug!("putback {token:?} (pending: {})", self.buffer.len() + 1);
        self.buffer.push(token);
    }

    /// Reads tokens until one that is not a separator, and returns it.
    ///
    /// Blank lines and lines holding only `;` are consumed silently. The
    /// returned token is not pushed back.
    ///
    /// # Errors
    /// Propagates any error from [`TokenStream::get`].
    pub fn skip_separators(&mut self) -> Result<Token, Error> {
        loop {
            let token = self.get()?;
            if !token.is_separator() {
                return Ok(token);
            }
        }
    }

    /// Drops every pending pushback and the unscanned rest of the current
    /// line.
    ///
    /// The next [`TokenStream::get`] starts on a fresh line of input.
    pub fn discard_line(&mut self) {
        debug!("discarding the rest of line {}", self.line);
        self.buffer.clear();
        self.cursor = self.line_buf.len();
    }

    /// The 1-based number of the line currently being scanned, or `0` if
    /// nothing has been read yet.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Number of tokens waiting in the pushback stack.
    #[must_use]
    pub const fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Loads the next physical line into `line_buf`.
    ///
    /// Returns `false` once the source has no more data.
    fn fill_line(&mut self) -> Result<bool, Error> {
        if self.exhausted {
            return Ok(false);
        }

        self.raw.clear();
        self.cursor = 0;
        if self.source.read_until(b'\n', &mut self.raw)? == 0 {
            self.line_buf.clear();
            debug!("input exhausted after {} line(s)", self.line);
            self.exhausted = true;
            return Ok(false);
        }
        self.line += 1;
        self.line_buf = String::from_utf8_lossy(&self.raw).into_owned();
        Ok(true)
    }
}
