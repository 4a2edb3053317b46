use std::io::BufRead;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Bracket, Operator, Token},
        parser::{EvalResult, binary::expression},
        token_stream::TokenStream,
    },
};

/// Parses and evaluates a primary expression.
///
/// Primary expressions are the highest-precedence level:
/// - numeric literals
/// - a unary `+` or `-` applied to another primary
/// - a parenthesised expression
///
/// Unary signs recurse into `primary`, so they bind tighter than any binary
/// operator and stack: `--5` is `5`, `-+5` is `-5`.
///
/// Grammar:
/// ```text
///     primary := number
///              | ("+" | "-") primary
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a primary expression.
///
/// # Returns
/// The value of the primary expression.
///
/// # Errors
/// - `ParseError::ExpectedClosingBracket` if a group is not closed by `)`.
/// - `ParseError::UnexpectedEndOfInput` if the input ends first.
/// - `ParseError::UnexpectedToken` for any other token.
/// - Propagates lexing and input errors from the token stream.
pub fn primary<R>(tokens: &mut TokenStream<R>) -> EvalResult<f64>
    where R: BufRead
{
    match tokens.get()? {
        Token::Number(value) => Ok(value),
        Token::Operator(Operator::Plus) => primary(tokens),
        Token::Operator(Operator::Minus) => Ok(-primary(tokens)?),
        Token::Bracket(Bracket::LeftRound) => {
            let value = expression(tokens)?;
            match tokens.get()? {
                Token::Bracket(Bracket::RightRound) => Ok(value),
                other => Err(ParseError::ExpectedClosingBracket { found: other.to_string(),
                                                                  line:  tokens.line(), }.into()),
            }
        },
        Token::EndOfInput => Err(ParseError::UnexpectedEndOfInput { line: tokens.line() }.into()),
        other => Err(ParseError::UnexpectedToken { token: other.to_string(),
                                                   line:  tokens.line(), }.into()),
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn eval(source: &str) -> EvalResult<f64> {
        primary(&mut TokenStream::new(source.as_bytes()))
    }

    #[test]
    fn unary_signs_recurse() {
        assert_eq!(eval("--5").unwrap(), 5.0);
        assert_eq!(eval("-+5").unwrap(), -5.0);
        assert_eq!(eval("+5").unwrap(), 5.0);
        assert_eq!(eval("- - - 2").unwrap(), -2.0);
    }

    #[test]
    fn unary_minus_applies_to_a_group() {
        assert_eq!(eval("-(2 - 5)").unwrap(), 3.0);
    }

    #[test]
    fn nested_groups() {
        assert_eq!(eval("((((1.5))))").unwrap(), 1.5);
    }

    #[test]
    fn unclosed_group_expects_a_closing_bracket() {
        match eval("(2 + 3") {
            Err(Error::Parse(e @ ParseError::ExpectedClosingBracket { .. })) => {
                assert!(e.to_string().contains("Closing round bracket expected"));
                assert!(e.to_string().contains("end of input"));
            },
            other => panic!("expected a missing bracket error, got {other:?}"),
        }
    }

    #[test]
    fn group_closed_by_the_wrong_token() {
        assert!(matches!(eval("(2 3)"),
                         Err(Error::Parse(ParseError::ExpectedClosingBracket { .. }))));
    }

    #[test]
    fn unexpected_token_is_named_in_the_message() {
        match eval(")") {
            Err(Error::Parse(e @ ParseError::UnexpectedToken { .. })) => {
                assert_eq!(e.to_string(), "Primary error on line 1: Unexpected token ')'.");
            },
            other => panic!("expected an unexpected token error, got {other:?}"),
        }
    }

    #[test]
    fn operator_without_operand() {
        assert!(matches!(eval("*2"), Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
    }

    #[test]
    fn empty_input_is_unexpected_end() {
        assert!(matches!(eval(""),
                         Err(Error::Parse(ParseError::UnexpectedEndOfInput { line: 0 }))));
    }

    #[test]
    fn lexer_errors_propagate() {
        assert!(matches!(eval("(1 + x)"), Err(Error::Lex(_))));
    }
}
