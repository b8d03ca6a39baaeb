use super::*;
use crate::errors::EvalError;
use pretty_assertions::assert_eq;

fn eval(op: BinaryOp, left: i64, right: i64) -> i64 {
    match evaluate_binary(op, left, right, Span::default()) {
        Ok(value) => value,
        Err(err) => panic!("{left} {op} {right} failed: {err}"),
    }
}

// === Arithmetic ===

#[test]
fn add_sub_mul() {
    assert_eq!(eval(BinaryOp::Add, 2, 3), 5);
    assert_eq!(eval(BinaryOp::Sub, 2, 3), -1);
    assert_eq!(eval(BinaryOp::Mul, -4, 3), -12);
}

#[test]
fn add_wraps_on_overflow() {
    assert_eq!(eval(BinaryOp::Add, i64::MAX, 1), i64::MIN);
    assert_eq!(eval(BinaryOp::Sub, i64::MIN, 1), i64::MAX);
    assert_eq!(eval(BinaryOp::Mul, i64::MAX, 2), -2);
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(eval(BinaryOp::Div, 7, 2), 3);
    assert_eq!(eval(BinaryOp::Div, -7, 2), -3);
    assert_eq!(eval(BinaryOp::Div, 7, -2), -3);
}

#[test]
fn remainder_takes_sign_of_dividend() {
    assert_eq!(eval(BinaryOp::Mod, 7, 3), 1);
    assert_eq!(eval(BinaryOp::Mod, -7, 3), -1);
    assert_eq!(eval(BinaryOp::Mod, 7, -3), 1);
}

#[test]
fn min_divided_by_minus_one_wraps() {
    assert_eq!(eval(BinaryOp::Div, i64::MIN, -1), i64::MIN);
    assert_eq!(eval(BinaryOp::Mod, i64::MIN, -1), 0);
}

#[test]
fn zero_divisor_is_an_error_for_div_and_mod() {
    let span = Span::new(1, 2);
    assert_eq!(
        evaluate_binary(BinaryOp::Div, 1, 0, span),
        Err(EvalError::DivisionByZero {
            op: BinaryOp::Div,
            span
        })
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Mod, 0, 0, span),
        Err(EvalError::DivisionByZero {
            op: BinaryOp::Mod,
            span
        })
    );
}

// === Comparison ===

#[test]
fn comparisons_yield_zero_or_one() {
    assert_eq!(eval(BinaryOp::Lt, 1, 2), 1);
    assert_eq!(eval(BinaryOp::LtEq, 2, 2), 1);
    assert_eq!(eval(BinaryOp::Gt, 1, 2), 0);
    assert_eq!(eval(BinaryOp::GtEq, 1, 2), 0);
    assert_eq!(eval(BinaryOp::Eq, 3, 3), 1);
    assert_eq!(eval(BinaryOp::NotEq, 3, 3), 0);
}

// === Logical ===

#[test]
fn logical_ops_treat_nonzero_as_true() {
    assert_eq!(eval(BinaryOp::And, 5, -1), 1);
    assert_eq!(eval(BinaryOp::And, 5, 0), 0);
    assert_eq!(eval(BinaryOp::Or, 0, 9), 1);
    assert_eq!(eval(BinaryOp::Or, 0, 0), 0);
}

#[test]
fn display_uses_source_symbol() {
    assert_eq!(BinaryOp::NotEq.to_string(), "!=");
    assert_eq!(BinaryOp::Mod.to_string(), "%");
}
