//! Binary operator implementations for the evaluator.
//!
//! All values are `i64`. Arithmetic is two's-complement modular: `+ - *`
//! wrap, and `/ %` truncate toward zero with `i64::MIN / -1` wrapping back to
//! `i64::MIN`. Comparisons and logical operators produce 0 or 1.

use std::fmt;

use intexpr_lexer::Span;

use crate::errors::{division_by_zero, EvalResult};

/// Infix operators, one per operator token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
    And,
    Or,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Apply `op` to two already-evaluated operands.
///
/// `span` is the operator token's, used only for the division-by-zero error.
pub fn evaluate_binary(op: BinaryOp, left: i64, right: i64, span: Span) -> EvalResult {
    let value = match op {
        BinaryOp::Add => left.wrapping_add(right),
        BinaryOp::Sub => left.wrapping_sub(right),
        BinaryOp::Mul => left.wrapping_mul(right),
        BinaryOp::Div | BinaryOp::Mod if right == 0 => return Err(division_by_zero(op, span)),
        BinaryOp::Div => left.wrapping_div(right),
        BinaryOp::Mod => left.wrapping_rem(right),
        BinaryOp::Lt => i64::from(left < right),
        BinaryOp::LtEq => i64::from(left <= right),
        BinaryOp::Gt => i64::from(left > right),
        BinaryOp::GtEq => i64::from(left >= right),
        BinaryOp::Eq => i64::from(left == right),
        BinaryOp::NotEq => i64::from(left != right),
        BinaryOp::And => i64::from(left != 0 && right != 0),
        BinaryOp::Or => i64::from(left != 0 || right != 0),
    };
    Ok(value)
}

#[cfg(test)]
mod tests;
