//! Error types and constructors for the evaluator.
//!
//! Every error is fatal: the first one met in the left-to-right scan ends
//! evaluation and is returned as-is. Overflow is not an error; arithmetic
//! wraps.

use std::fmt;

use intexpr_lexer::{LexError, Span, TokenKind};

use crate::operators::BinaryOp;

/// Result of evaluating an expression or subexpression.
pub type EvalResult = Result<i64, EvalError>;

/// Grammar violations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SyntaxErrorKind {
    /// The input held no tokens at all.
    EmptyExpression,
    /// An operand was expected but an operator, `)` or end of input was found.
    MissingOperand,
    /// A `(` subexpression was not followed by `)`.
    UnmatchedParenthesis,
    /// A complete expression was followed by more tokens.
    UnexpectedTrailingInput,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SyntaxErrorKind::EmptyExpression => "empty expression",
            SyntaxErrorKind::MissingOperand => "missing operand",
            SyntaxErrorKind::UnmatchedParenthesis => "unmatched parenthesis",
            SyntaxErrorKind::UnexpectedTrailingInput => "unexpected trailing input",
        })
    }
}

/// Failure while parsing and evaluating a token stream.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvalError {
    #[error("syntax error at position {}: {kind} (found {found})", .span.start)]
    Syntax {
        kind: SyntaxErrorKind,
        /// The token the parser was looking at.
        found: TokenKind,
        span: Span,
    },

    #[error("undefined variable `{name}` at position {}", .span.start)]
    UndefinedVariable { name: String, span: Span },

    /// `/` or `%` with a zero right operand. `span` is the operator's.
    #[error("division by zero in `{op}` at position {}", .span.start)]
    DivisionByZero { op: BinaryOp, span: Span },
}

impl EvalError {
    pub fn span(&self) -> Span {
        match self {
            EvalError::Syntax { span, .. }
            | EvalError::UndefinedVariable { span, .. }
            | EvalError::DivisionByZero { span, .. } => *span,
        }
    }

    /// The grammar violation, if this is a syntax error.
    pub fn syntax_kind(&self) -> Option<SyntaxErrorKind> {
        match self {
            EvalError::Syntax { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

// Syntax Errors

#[cold]
pub fn empty_expression(span: Span) -> EvalError {
    syntax(SyntaxErrorKind::EmptyExpression, TokenKind::Eof, span)
}

#[cold]
pub fn missing_operand(found: TokenKind, span: Span) -> EvalError {
    syntax(SyntaxErrorKind::MissingOperand, found, span)
}

#[cold]
pub fn unmatched_parenthesis(found: TokenKind, span: Span) -> EvalError {
    syntax(SyntaxErrorKind::UnmatchedParenthesis, found, span)
}

#[cold]
pub fn unexpected_trailing_input(found: TokenKind, span: Span) -> EvalError {
    syntax(SyntaxErrorKind::UnexpectedTrailingInput, found, span)
}

fn syntax(kind: SyntaxErrorKind, found: TokenKind, span: Span) -> EvalError {
    EvalError::Syntax { kind, found, span }
}

// Runtime Errors

#[cold]
pub fn undefined_variable(name: &str, span: Span) -> EvalError {
    EvalError::UndefinedVariable {
        name: name.to_owned(),
        span,
    }
}

#[cold]
pub fn division_by_zero(op: BinaryOp, span: Span) -> EvalError {
    EvalError::DivisionByZero { op, span }
}

// Engine Errors

/// The four failure categories a caller can observe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    Lex,
    Syntax,
    UndefinedVariable,
    DivisionByZero,
}

/// Any failure of [`evaluate`](crate::evaluate).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lex(_) => ErrorKind::Lex,
            Error::Eval(EvalError::Syntax { .. }) => ErrorKind::Syntax,
            Error::Eval(EvalError::UndefinedVariable { .. }) => ErrorKind::UndefinedVariable,
            Error::Eval(EvalError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
        }
    }

    /// Location of the offending input. `None` only for oversized sources.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(err) => err.span(),
            Error::Eval(err) => Some(err.span()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_kind_only_for_syntax_errors() {
        let err = missing_operand(TokenKind::Plus, Span::new(0, 1));
        assert_eq!(err.syntax_kind(), Some(SyntaxErrorKind::MissingOperand));
        assert_eq!(undefined_variable("x", Span::new(0, 1)).syntax_kind(), None);
    }

    #[test]
    fn error_kind_covers_each_category() {
        let span = Span::new(3, 4);
        let lex = Error::from(LexError::unexpected_character('=', span));
        let syntax = Error::from(empty_expression(Span::point(0)));
        let undefined = Error::from(undefined_variable("x", span));
        let div = Error::from(division_by_zero(BinaryOp::Div, span));

        assert_eq!(lex.kind(), ErrorKind::Lex);
        assert_eq!(syntax.kind(), ErrorKind::Syntax);
        assert_eq!(undefined.kind(), ErrorKind::UndefinedVariable);
        assert_eq!(div.kind(), ErrorKind::DivisionByZero);
        assert_eq!(div.span(), Some(span));
        assert_eq!(Error::from(LexError::source_too_large(0)).span(), None);
    }
}
