use calcrepl::{
    error::{Error, LexError, ParseError},
    evaluate,
};

#[allow(clippy::float_cmp)]
fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!(value == expected,
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("10 % 4", 2.0);
}

#[test]
fn left_associativity() {
    assert_value("8 - 3 - 2", 3.0);
    assert_value("2 * 6 / 3", 4.0);
    assert_value("100 / 10 / 5", 2.0);
    assert_value("17 % 10 % 4", 3.0);
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * (3 + 4) * 5", 70.0);
    assert_value("1 + 10 % 4", 3.0);
    assert_value("((2))", 2.0);
}

#[test]
fn unary_operators() {
    assert_value("--5", 5.0);
    assert_value("-+5", -5.0);
    assert_value("-3 * -3", 9.0);
    assert_value("2 - -2", 4.0);
    assert_value("-(1 + 2) * 2", -6.0);
}

#[test]
fn numerals() {
    assert_value(".5 + .5", 1.0);
    assert_value("3.", 3.0);
    assert_value("1e3 + 2.5E-1", 1000.25);
    assert_value("0.1 * 10", 1.0);
}

#[test]
fn division_by_zero_is_infinity_not_an_error() {
    assert_value("5 / 0", f64::INFINITY);
    assert_value("0 / 0", f64::INFINITY);
    assert_value("1 / (3 - 3) + 1", f64::INFINITY);
}

#[test]
fn well_formed_expressions_stay_finite() {
    for src in ["1 + 2 * 3 - 4 / 5 % 6",
                "((1 + 2) * (3 - 4)) / 5",
                "-(-(-(1.5 * 2)))",
                "9 % 4 * 2 + 1"]
    {
        let value = evaluate(src).unwrap_or_else(|e| panic!("{src:?} failed: {e}"));
        assert!(value.is_finite(), "{src:?} evaluated to {value}");
    }
}

#[test]
fn surrounding_separators_are_allowed() {
    assert_value("\n;;\n 4 * 4 ;\n", 16.0);
    assert_value("\u{0}1\u{0}", 1.0);
}

#[test]
fn unbalanced_bracket_is_a_parse_error() {
    let e = assert_failure("(2 + 3");
    assert!(matches!(e, Error::Parse(ParseError::ExpectedClosingBracket { .. })));
    assert!(e.to_string().contains("Closing round bracket expected"));
}

#[test]
fn unknown_character_is_a_lex_error() {
    let e = assert_failure("2 @ 3");
    assert!(matches!(e, Error::Lex(LexError::UnknownLexeme { ref lexeme, line: 1 }) if lexeme == "@"));
}

#[test]
fn identifiers_are_not_lexemes() {
    assert!(matches!(assert_failure("x + 1"), Error::Lex(_)));
}

#[test]
fn empty_input_is_an_error() {
    assert!(matches!(assert_failure(""),
                     Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(assert_failure(";\n"),
                     Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn stray_closing_bracket_is_an_error() {
    assert!(matches!(assert_failure(")"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("1)"), Error::Parse(ParseError::TrailingTokens { .. })));
}

#[test]
fn more_than_one_expression_is_an_error() {
    let e = assert_failure("1; 2");
    assert_eq!(e.to_string(),
               "Error on line 1: Extra tokens after expression, starting at number 2.");
}

#[test]
fn missing_operand_is_an_error() {
    assert!(matches!(assert_failure("2 *"),
                     Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(assert_failure("2 * / 3"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
}
