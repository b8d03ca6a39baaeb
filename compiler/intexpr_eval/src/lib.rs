//! Integer expression engine.
//!
//! Evaluates expressions such as `x + y * 2 >= limit && count != 0` to a
//! single `i64`, resolving identifiers against a caller-supplied
//! [`Environment`].
//!
//! ```text
//! evaluate("x+y*2", &Values::new().with("x", 1).with("y", 2)) == Ok(5)
//! ```
//!
//! # Semantics
//!
//! - Arithmetic wraps on overflow (two's-complement `i64`).
//! - `/` and `%` truncate toward zero; a zero divisor is an error.
//! - Comparisons, `&&` and `||` yield 0 or 1; any nonzero operand is true.
//!   Both operands of `&&` and `||` are always evaluated.
//! - There are no unary operators: `-2` and `+2` are syntax errors.
//!
//! Evaluation is pure: no state survives between calls, so concurrent calls
//! are safe as long as each environment is not mutated during its call.

mod cursor;
mod environment;
mod errors;
mod operators;
mod parser;
mod stack;

use tracing::debug;

use parser::Parser;

pub use environment::{Environment, Values};
pub use errors::{Error, ErrorKind, EvalError, EvalResult, SyntaxErrorKind};
pub use intexpr_lexer::{tokenize, LexError, Span, Token, TokenKind, TokenList};
pub use operators::BinaryOp;

/// Lex, parse and evaluate `expression`.
pub fn evaluate<E: Environment + ?Sized>(expression: &str, env: &E) -> Result<i64, Error> {
    let result = tokenize(expression)
        .map_err(Error::from)
        .and_then(|tokens| evaluate_tokens(&tokens, env).map_err(Error::from));

    match &result {
        Ok(value) => debug!(len = expression.len(), value, "evaluated expression"),
        Err(err) => debug!(len = expression.len(), kind = ?err.kind(), %err, "expression failed"),
    }

    result
}

/// Parse and evaluate an already-lexed token stream.
///
/// Fails with [`SyntaxErrorKind::EmptyExpression`] if the stream holds only EOF.
pub fn evaluate_tokens<E: Environment + ?Sized>(tokens: &TokenList, env: &E) -> EvalResult {
    Parser::new(tokens, env).evaluate()
}
