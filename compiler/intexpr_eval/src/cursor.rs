//! Token cursor for navigating the token stream.
//!
//! Forward-only: the grammar is LL(1), so the parser never rewinds.

use intexpr_lexer::{Span, Token, TokenKind, TokenList};
use tracing::trace;

/// Cursor over a [`TokenList`].
///
/// Invariant: `pos` always indexes a valid token. The last token is EOF and
/// the parser never advances past it.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        debug_assert!(self.pos < self.tokens.len(), "cursor position out of bounds");
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token is of the same kind as `kind`, ignoring payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    /// Consume the current token. A no-op on EOF.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind,
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use intexpr_lexer::tokenize;

    #[test]
    fn walks_tokens_in_order() {
        let tokens = tokenize("1 + x").unwrap();
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.current_kind(), &TokenKind::Int(1));
        cursor.advance();
        assert!(cursor.check(&TokenKind::Plus));
        cursor.advance();
        assert!(cursor.check(&TokenKind::Ident(String::new())));
        assert_eq!(cursor.current_span(), Span::new(4, 5));
        cursor.advance();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn advance_stops_at_eof() {
        let tokens = tokenize("").unwrap();
        let mut cursor = Cursor::new(&tokens);
        assert!(cursor.is_at_end());
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_at_end());
    }
}
