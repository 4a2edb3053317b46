use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::{
    error::Error,
    interpreter::{lexer::Token, parser::expression, token_stream::TokenStream},
};

/// Prompt written before each expression is read.
pub const PROMPT: &str = "> ";
/// Marker written before each result.
pub const RESULT_MARKER: &str = ": ";
/// Marker written before each error message.
pub const ERROR_MARKER: &str = "Catch: ";

/// Behaviour switches for a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Write [`PROMPT`] before each expression.
    pub prompt:     bool,
    /// Report errors and carry on with the next line instead of ending the
    /// session at the first one.
    pub keep_going: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { prompt:     true,
               keep_going: false, }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The input ran out and no error was reported.
    Finished,
    /// At least one error was reported.
    Failed,
}

/// A read-eval-print loop over one input source.
///
/// The session owns the only [`TokenStream`] for its input and threads it
/// through the parser for every expression.
///
/// # Example
/// ```
/// use calcrepl::interpreter::repl::{Outcome, Session, SessionOptions};
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut session = Session::new("1 + 2\n".as_bytes(), SessionOptions::default());
///
/// assert_eq!(session.run(&mut out, &mut err).unwrap(), Outcome::Finished);
/// assert_eq!(String::from_utf8(out).unwrap(), "> : 3\n> ");
/// assert!(err.is_empty());
/// ```
pub struct Session<R> {
    tokens:  TokenStream<R>,
    options: SessionOptions,
}

impl<R> Session<R> where R: BufRead
{
    /// Creates a session reading from `input`.
    pub const fn new(input: R, options: SessionOptions) -> Self {
        Self { tokens: TokenStream::new(input),
               options }
    }

    /// Runs the loop until the input is exhausted or, unless
    /// [`SessionOptions::keep_going`] is set, until the first error.
    ///
    /// Results go to `out` as `": <value>"` lines. Errors go to `err` as
    /// `"Catch: <message>"` lines. Input failures always end the session.
    ///
    /// # Errors
    /// Returns an error only if writing to `out` or `err` fails. Evaluation
    /// failures are reported on `err` and reflected in the [`Outcome`].
    pub fn run<W, E>(&mut self, out: &mut W, err: &mut E) -> io::Result<Outcome>
        where W: Write,
              E: Write
    {
        info!("session started (prompt: {}, keep going: {})",
              self.options.prompt,
              self.options.keep_going);

        let mut outcome = Outcome::Finished;
        self.prompt(out)?;

        loop {
            match self.cycle() {
                Ok(Some(value)) => {
                    writeln!(out, "{RESULT_MARKER}{value}")?;
                    self.prompt(out)?;
                },
                Ok(None) => break,
                Err(e) => {
                    match e.line() {
                        Some(line) => warn!("evaluation failed on line {line}: {e}"),
                        None => warn!("reading input failed: {e}"),
                    }
                    out.flush()?;
                    writeln!(err, "{ERROR_MARKER}{e}")?;
                    err.flush()?;
                    outcome = Outcome::Failed;

                    if !self.options.keep_going || e.is_io() {
                        break;
                    }
                    self.tokens.discard_line();
                    self.prompt(out)?;
                },
            }
        }

        out.flush()?;
        info!("session ended after line {}: {outcome:?}", self.tokens.line());
        Ok(outcome)
    }

    /// Evaluates the next expression.
    ///
    /// Leading separators are skipped. Returns `None` when the input ends
    /// before another expression starts.
    fn cycle(&mut self) -> Result<Option<f64>, Error> {
        let token = self.tokens.skip_separators()?;
        if token == Token::EndOfInput {
            return Ok(None);
        }
        self.tokens.putback(token);

        let value = expression(&mut self.tokens)?;
        debug!("line {}: evaluated to {value}", self.tokens.line());
        Ok(Some(value))
    }

    fn prompt<W>(&self, out: &mut W) -> io::Result<()>
        where W: Write
    {
        if self.options.prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        Ok(())
    }
}
