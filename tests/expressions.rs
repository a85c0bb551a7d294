use treecalc::{
    error::{Error, ParseError, RuntimeError},
    eval_str, evaluate, parse,
};

fn assert_value(src: &str, expected: f64) {
    match eval_str(src) {
        Ok(value) => assert_eq!(value, expected, "wrong result for {src:?}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match parse(src) {
        Ok(_) => panic!("{src:?} parsed but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_grouping() {
    assert_value("1+2*3", 7.0);
    assert_value("(1+2)*3", 9.0);
    assert_value("2*(3+4)/7", 2.0);
    assert_value("1+10/2", 6.0);
}

#[test]
fn left_associativity_of_equal_precedence_operators() {
    assert_value("8-3-2", 3.0);
    assert_value("4/2/2", 1.0);
    assert_value("10-4+2", 8.0);
}

#[test]
fn unary_minus_binds_tighter_than_binary_operators() {
    assert_value("-3*2", -6.0);
    assert_value("2*-3", -6.0);
    assert_value("2--3", 5.0);
    assert_value("--3", 3.0);
    assert_value("-(1+2)", -3.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(eval_str("  1 + 2  ").unwrap(), eval_str("1+2").unwrap());
    assert_value("\t7 *\n 6", 42.0);
}

#[test]
fn division_by_zero_is_reported_not_computed() {
    assert_eq!(
        eval_str("10/0"),
        Err(Error::Runtime(RuntimeError::DivisionByZero))
    );
    // The guard is on the evaluated value of the divisor, not its shape.
    assert_eq!(
        eval_str("10/(4-4)"),
        Err(Error::Runtime(RuntimeError::DivisionByZero))
    );
    assert_value("0/5", 0.0);
}

#[test]
fn trailing_input_is_rejected() {
    assert!(matches!(
        parse_error("1+2)"),
        ParseError::TrailingInput { ch: ')', .. }
    ));
    assert!(matches!(
        parse_error("5!"),
        ParseError::TrailingInput { ch: '!', .. }
    ));
    assert!(matches!(
        parse_error("(1 2)"),
        ParseError::TrailingInput { ch: '2', .. }
    ));
}

#[test]
fn unmatched_parenthesis_points_at_the_opener() {
    assert!(matches!(
        parse_error("(1+2"),
        ParseError::UnmatchedParenthesis { offset: 0 }
    ));
    assert!(matches!(
        parse_error("((3)"),
        ParseError::UnmatchedParenthesis { offset: 0 }
    ));
    assert!(matches!(
        parse_error("1+(2*(3+4)"),
        ParseError::UnmatchedParenthesis { offset: 2 }
    ));
}

#[test]
fn malformed_factors() {
    assert!(matches!(parse_error(""), ParseError::UnexpectedEnd { .. }));
    assert!(matches!(parse_error("   "), ParseError::UnexpectedEnd { .. }));
    assert!(matches!(parse_error("1+"), ParseError::UnexpectedEnd { .. }));
    assert!(matches!(
        parse_error("1++2"),
        ParseError::UnexpectedChar { ch: '+', .. }
    ));
    assert!(matches!(
        parse_error("a+1"),
        ParseError::UnexpectedChar { ch: 'a', offset: 0 }
    ));
}

#[test]
fn oversized_literals_do_not_wrap() {
    assert_value("9223372036854775807", 9_223_372_036_854_775_807_i64 as f64);
    assert!(matches!(
        parse_error("9223372036854775808"),
        ParseError::NumberTooLarge { offset: 0 }
    ));
}

#[test]
fn nesting_depth_is_bounded() {
    let deep_ok = format!("{}1{}", "(".repeat(64), ")".repeat(64));
    assert_value(&deep_ok, 1.0);

    let too_deep = format!("{}1{}", "(".repeat(65), ")".repeat(65));
    assert!(matches!(
        parse_error(&too_deep),
        ParseError::TooDeeplyNested { .. }
    ));
}

#[test]
fn tree_lifecycle_guards_double_free() {
    let mut tree = parse("1+2").unwrap();
    assert_eq!(evaluate(&tree), Ok(3.0));
    assert_eq!(tree.free(), Ok(()));
    assert_eq!(tree.free(), Err(RuntimeError::NullTree));
    assert_eq!(evaluate(&tree), Err(RuntimeError::NullTree));
}

#[test]
fn tree_renders_in_prefix_form() {
    let tree = parse("1+2*3").unwrap();
    assert_eq!(tree.to_string(), "(+ 1 (* 2 3))");

    let tree = parse("-3*2").unwrap();
    assert_eq!(tree.to_string(), "(* (* 3 -1) 2)");
}

#[test]
fn results_are_finite_for_valid_input() {
    for src in ["1", "12*12", "100/3", "(2+3)*(4-1)", "-(-(-8))/2"] {
        let value = eval_str(src).unwrap();
        assert!(value.is_finite(), "{src:?} produced {value}");
    }
}
