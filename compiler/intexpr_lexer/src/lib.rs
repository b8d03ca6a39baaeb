//! Lexer for intexpr integer expressions, built on logos.
//!
//! Converts expression text into a [`TokenList`] that always ends with an
//! EOF token, or fails on the first character that starts no token.
//!
//! # Accepted input
//!
//! - Decimal digit runs, read as `i64` with two's-complement wraparound
//! - Identifiers: `[A-Za-z_][A-Za-z0-9_]*`
//! - Operators: `+ - * / % < <= > >= == != && ||`
//! - Parentheses `(` `)`
//!
//! Whitespace between tokens is skipped. There is no unary minus at this
//! level or any other: `-2` lexes to `Minus Int(2)` and the parser rejects it.

mod lex_error;
mod raw_token;
mod span;
mod token;

use logos::Logos;

use raw_token::RawToken;

pub use lex_error::LexError;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};

/// Tokenize an expression.
///
/// Runs to completion before any parsing happens, so a bad character
/// anywhere in the input is reported even if the prefix would not parse.
pub fn tokenize(source: &str) -> Result<TokenList, LexError> {
    let Ok(eof_offset) = u32::try_from(source.len()) else {
        return Err(LexError::source_too_large(source.len()));
    };

    let mut tokens = Vec::new();
    for (raw, range) in RawToken::lexer(source).spanned() {
        let span = Span::from_checked_range(range.clone());
        let Ok(raw) = raw else {
            let found = source[range.start..].chars().next().unwrap_or('\0');
            let width = found.len_utf8();
            return Err(LexError::unexpected_character(
                found,
                Span::from_checked_range(range.start..range.start + width),
            ));
        };
        tokens.push(Token::new(convert(raw, &source[range]), span));
    }

    Ok(TokenList::new(tokens, eof_offset))
}

fn convert(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Int(value) => TokenKind::Int(value),
        RawToken::Ident => TokenKind::Ident(slice.to_owned()),
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
    }
}
