//! Precedence-climbing parser that evaluates as it parses.
//!
//! Grammar, lowest precedence first. Every tier is left-associative.
//!
//! ```text
//! or             = and { "||" and } .
//! and            = comparison { "&&" comparison } .
//! comparison     = additive { ( "<" | "<=" | ">" | ">=" | "==" | "!=" ) additive } .
//! additive       = multiplicative { ( "+" | "-" ) multiplicative } .
//! multiplicative = primary { ( "*" | "/" | "%" ) primary } .
//! primary        = number | identifier | "(" or ")" .
//! ```
//!
//! No syntax tree is built: each tier returns the value of what it consumed,
//! folding operators left to right. There are no unary operators, so an
//! operator where `primary` is expected is a missing operand.

use intexpr_lexer::{TokenKind, TokenList};
use tracing::trace;

use crate::cursor::Cursor;
use crate::environment::Environment;
use crate::errors::{
    empty_expression, missing_operand, unexpected_trailing_input, unmatched_parenthesis,
    undefined_variable, EvalResult,
};
use crate::operators::{evaluate_binary, BinaryOp};
use crate::stack::ensure_sufficient_stack;

pub(crate) struct Parser<'a, E: Environment + ?Sized> {
    cursor: Cursor<'a>,
    env: &'a E,
}

impl<'a, E: Environment + ?Sized> Parser<'a, E> {
    pub fn new(tokens: &'a TokenList, env: &'a E) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            env,
        }
    }

    /// Parse and evaluate the whole token stream.
    pub fn evaluate(mut self) -> EvalResult {
        if self.cursor.is_at_end() {
            return Err(empty_expression(self.cursor.current_span()));
        }

        let value = self.parse_or()?;

        if !self.cursor.is_at_end() {
            let token = self.cursor.current();
            return Err(unexpected_trailing_input(token.kind.clone(), token.span));
        }

        Ok(value)
    }

    /// Parse || (lowest precedence).
    fn parse_or(&mut self) -> EvalResult {
        let mut left = self.parse_and()?;

        while self.cursor.check(&TokenKind::PipePipe) {
            let span = self.cursor.advance().span;
            let right = self.parse_and()?;
            left = evaluate_binary(BinaryOp::Or, left, right, span)?;
        }

        Ok(left)
    }

    /// Parse && (logical and).
    fn parse_and(&mut self) -> EvalResult {
        let mut left = self.parse_comparison()?;

        while self.cursor.check(&TokenKind::AmpAmp) {
            let span = self.cursor.advance().span;
            let right = self.parse_comparison()?;
            left = evaluate_binary(BinaryOp::And, left, right, span)?;
        }

        Ok(left)
    }

    /// Parse comparison and equality operators, which share one tier.
    fn parse_comparison(&mut self) -> EvalResult {
        let mut left = self.parse_additive()?;

        while let Some(op) = self.match_comparison_op() {
            let span = self.cursor.advance().span;
            let right = self.parse_additive()?;
            left = evaluate_binary(op, left, right, span)?;
        }

        Ok(left)
    }

    /// Parse + and -.
    fn parse_additive(&mut self) -> EvalResult {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.match_additive_op() {
            let span = self.cursor.advance().span;
            let right = self.parse_multiplicative()?;
            left = evaluate_binary(op, left, right, span)?;
        }

        Ok(left)
    }

    /// Parse *, / and %.
    fn parse_multiplicative(&mut self) -> EvalResult {
        let mut left = self.parse_primary()?;

        while let Some(op) = self.match_multiplicative_op() {
            let span = self.cursor.advance().span;
            let right = self.parse_primary()?;
            left = evaluate_binary(op, left, right, span)?;
        }

        Ok(left)
    }

    /// Parse a number, an identifier, or a parenthesized expression.
    fn parse_primary(&mut self) -> EvalResult {
        let token = self.cursor.current();
        trace!(kind = %token.kind, span_start = token.span.start, "parse_primary");

        match &token.kind {
            TokenKind::Int(value) => {
                self.cursor.advance();
                Ok(*value)
            }
            TokenKind::Ident(name) => {
                let value = self
                    .env
                    .lookup(name)
                    .ok_or_else(|| undefined_variable(name, token.span))?;
                self.cursor.advance();
                Ok(value)
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let value = ensure_sufficient_stack(|| self.parse_or())?;
                if !self.cursor.check(&TokenKind::RParen) {
                    let found = self.cursor.current();
                    return Err(unmatched_parenthesis(found.kind.clone(), found.span));
                }
                self.cursor.advance();
                Ok(value)
            }
            other => Err(missing_operand(other.clone(), token.span)),
        }
    }

    fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            _ => None,
        }
    }

    fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }
}
