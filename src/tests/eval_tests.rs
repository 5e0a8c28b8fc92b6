//! End-to-end evaluation tests for the full pipeline.

use crate::{Calc, CalcError, InputFormat, evaluate};

fn eval(input: &str) -> f64 {
    evaluate(input, InputFormat::Normal).unwrap()
}

fn eval_err(input: &str) -> CalcError {
    evaluate(input, InputFormat::Normal).unwrap_err()
}

// ============================================================
// PRECEDENCE AND ASSOCIATIVITY
// ============================================================

#[test]
fn test_precedence() {
    assert_eq!(eval("2+3*4"), 14.0);
    assert_eq!(eval("2*3+4"), 10.0);
    assert_eq!(eval("2+3*4^2"), 50.0);
    assert_eq!(eval("7%4+1"), 4.0);
    assert_eq!(eval("2^10"), 1024.0);
}

#[test]
fn test_parentheses() {
    assert_eq!(eval("(2+3)*4"), 20.0);
    assert_eq!(eval("((2+3))*4"), 20.0);
    assert_eq!(eval("2*(3+4*(5+6))"), 94.0);
}

#[test]
fn test_left_associativity() {
    assert_eq!(eval("10-2-3"), 5.0);
    assert_eq!(eval("100/10/5"), 2.0);
    // power climbs like every other operator, so it is left-associative
    assert_eq!(eval("2^3^2"), 64.0);
}

#[test]
fn test_bracket_kinds_are_interchangeable() {
    assert_eq!(eval("[2+3]*{4}"), 20.0);
    // any closer matches any opener
    assert_eq!(eval("(1+2]"), 3.0);
}

// ============================================================
// IMPLICIT MULTIPLICATION
// ============================================================

#[test]
fn test_implicit_multiplication_before_bracket() {
    assert_eq!(eval("2(3+4)"), 14.0);
    assert_eq!(eval("(2+3)(4+5)"), 45.0);
    assert_eq!(eval("2(3)(4)"), 24.0);
}

#[test]
fn test_implicit_multiplication_after_group() {
    assert_eq!(eval("(3)2"), 6.0);
}

// ============================================================
// UNARY MINUS
// ============================================================

#[test]
fn test_unary_minus() {
    assert_eq!(eval("-5+3"), -2.0);
    assert_eq!(eval("3*-4"), -12.0);
    assert_eq!(eval("-(2+3)"), -5.0);
    assert_eq!(eval("5--3"), 8.0);
    assert_eq!(eval("--5"), 5.0);
}

#[test]
fn test_unary_minus_against_power() {
    // the desugared multiplication binds tighter than every operator
    assert_eq!(eval("2^-2"), 0.25);
    assert_eq!(eval("-2^2"), -4.0);
    assert_eq!(eval("2^-2+1"), 1.25);
}

// ============================================================
// LITERAL BASES
// ============================================================

#[test]
fn test_based_literals() {
    assert_eq!(eval("ffh"), 255.0);
    assert_eq!(eval("0xff"), 255.0);
    assert_eq!(eval("1010b"), 10.0);
    assert_eq!(eval("17o"), 15.0);
    assert_eq!(eval("ffh+1"), 256.0);
    assert_eq!(eval("ffh-0xf0"), 15.0);
}

#[test]
fn test_unicode_operators() {
    assert_eq!(eval("6÷2"), 3.0);
    assert_eq!(eval("6×2"), 12.0);
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(eval(" 2 + 3 * 4 "), 14.0);
}

// ============================================================
// FLOATING-POINT SEMANTICS
// ============================================================

#[test]
fn test_division_by_zero_is_a_value() {
    assert_eq!(eval("1/0"), f64::INFINITY);
    assert_eq!(eval("-1/0"), f64::NEG_INFINITY);
    assert!(eval("0/0").is_nan());
    assert!(eval("5%0").is_nan());
}

#[test]
fn test_float_arithmetic() {
    assert_eq!(eval("3.5+1.5"), 5.0);
    assert_eq!(eval("0.1*10"), 0.1 * 10.0);
}

// ============================================================
// IEEE-754 INPUT FORMATS
// ============================================================

#[test]
fn test_ieee754_32_literal() {
    let pi = evaluate("40490FDBh", InputFormat::Ieee754_32).unwrap();
    assert!((pi - 3.14159265).abs() < 1e-6);

    // the same token is a plain integer in normal mode
    assert_eq!(eval("40490FDBh"), 1_078_530_011.0);
}

#[test]
fn test_ieee754_literals_in_arithmetic() {
    let two_pi = evaluate("40490FDBh*2", InputFormat::Ieee754_32).unwrap();
    assert!((two_pi - 2.0 * std::f64::consts::PI).abs() < 1e-5);

    let sum = evaluate("3F800000h+C0200000h", InputFormat::Ieee754_32).unwrap();
    assert_eq!(sum, -1.5);
}

#[test]
fn test_ieee754_64_literal() {
    let pi = evaluate("400921FB54442D18h", InputFormat::Ieee754_64).unwrap();
    assert_eq!(pi, std::f64::consts::PI);
}

// ============================================================
// ERRORS
// ============================================================

#[test]
fn test_invalid_literal() {
    assert_eq!(
        eval_err("3+@"),
        CalcError::InvalidLiteral {
            literal: "@".to_string()
        }
    );
    assert!(matches!(eval_err("1..2"), CalcError::InvalidLiteral { .. }));
    assert!(matches!(eval_err("12z+1"), CalcError::InvalidLiteral { .. }));
}

#[test]
fn test_unbalanced_brackets() {
    assert_eq!(eval_err("(1+2"), CalcError::UnterminatedGroup);
    assert_eq!(eval_err("((1+2)"), CalcError::UnterminatedGroup);
    assert!(matches!(eval_err("1+2)"), CalcError::UnexpectedToken { .. }));
}

#[test]
fn test_empty_input() {
    assert_eq!(eval_err(""), CalcError::EmptyExpression);
    assert_eq!(eval_err("   "), CalcError::EmptyExpression);
    assert_eq!(eval_err("()"), CalcError::EmptyExpression);
    assert_eq!(eval_err("1+()"), CalcError::EmptyExpression);
}

#[test]
fn test_malformed_operator_sequences() {
    assert!(matches!(eval_err("+5"), CalcError::UnexpectedToken { .. }));
    assert!(matches!(eval_err("3+*4"), CalcError::UnexpectedToken { .. }));
    assert_eq!(eval_err("1+"), CalcError::IncompleteExpression);
    assert_eq!(eval_err("1+2*"), CalcError::IncompleteExpression);
}

#[test]
fn test_nesting_limit() {
    let calc = Calc::new().max_depth(8);
    assert_eq!(calc.evaluate("((((1))))").unwrap(), 1.0);
    assert_eq!(
        calc.evaluate("((((((((((1))))))))))").unwrap_err(),
        CalcError::NestingTooDeep { limit: 8 }
    );
}

#[test]
fn test_long_flat_chain_stays_within_default_limit() {
    let input = vec!["1"; 100].join("+");
    assert_eq!(eval(&input), 100.0);
}
