use std::io::BufRead;

use log::debug;

use crate::interpreter::{
    lexer::{Operator, Token},
    parser::{EvalResult, unary::primary},
    token_stream::TokenStream,
};

/// Parses and evaluates addition and subtraction.
///
/// This is the entry point for a full expression. Operators are folded left
/// to right, so `8 - 3 - 2` is `(8 - 3) - 2`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// The first token that is not `+` or `-` is pushed back and left for the
/// caller.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of an expression.
///
/// # Returns
/// The value of the expression.
///
/// # Example
/// ```
/// use calcrepl::interpreter::{parser::expression, token_stream::TokenStream};
///
/// let mut tokens = TokenStream::new("2 + 3 * 4".as_bytes());
/// assert_eq!(expression(&mut tokens).unwrap(), 14.0);
/// ```
pub fn expression<R>(tokens: &mut TokenStream<R>) -> EvalResult<f64>
    where R: BufRead
{
    let mut left = term(tokens)?;
    loop {
        match tokens.get()? {
            Token::Operator(Operator::Plus) => left += term(tokens)?,
            Token::Operator(Operator::Minus) => left -= term(tokens)?,
            other => {
                tokens.putback(other);
                debug!("expression = {left}");
                return Ok(left);
            },
        }
    }
}

/// Parses and evaluates multiplication, division and remainder.
///
/// Operators are folded left to right. Division by exactly zero does not
/// fail: the running value becomes positive infinity and the fold carries on.
/// `%` is the floating-point remainder, which takes the sign of the dividend.
///
/// The rule is: `term := primary (("*" | "/" | "%") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a term.
///
/// # Returns
/// The value of the term.
#[allow(clippy::float_cmp)]
pub fn term<R>(tokens: &mut TokenStream<R>) -> EvalResult<f64>
    where R: BufRead
{
    let mut left = primary(tokens)?;
    loop {
        match tokens.get()? {
            Token::Operator(Operator::Star) => left *= primary(tokens)?,
            Token::Operator(Operator::Slash) => {
                let right = primary(tokens)?;
                left = if right == 0.0 {
                    debug!("division of {left} by zero yields infinity");
                    f64::INFINITY
                } else {
                    left / right
                };
            },
            Token::Operator(Operator::Percent) => left %= primary(tokens)?,
            other => {
                tokens.putback(other);
                return Ok(left);
            },
        }
    }
}
