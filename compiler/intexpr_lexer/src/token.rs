//! Token types produced by the lexer.

use std::fmt;
use std::ops::Index;

use crate::Span;

/// A token with its source span.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Token kinds.
///
/// Operators are flattened into their own variants rather than nested under
/// a single operator variant, so the parser can match them directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Decimal literal, already reduced to `i64` with wraparound.
    Int(i64),
    /// Variable name, resolved against the environment during evaluation.
    Ident(String),

    // Arithmetic
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,

    // Comparison
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,

    // Logical
    /// `&&`
    AmpAmp,
    /// `||`
    PipePipe,

    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,

    /// End of input. Always the last token of a [`TokenList`].
    Eof,
}

impl TokenKind {
    /// Returns `true` for the infix operator tokens.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
                | TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::AmpAmp
                | TokenKind::PipePipe
        )
    }

    /// Source text of fixed-spelling tokens, `None` for literals, names and EOF.
    pub fn symbol(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::AmpAmp => "&&",
            TokenKind::PipePipe => "||",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Int(_) | TokenKind::Ident(_) | TokenKind::Eof => return None,
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(value) => write!(f, "number {value}"),
            TokenKind::Ident(name) => write!(f, "identifier `{name}`"),
            TokenKind::Eof => f.write_str("end of input"),
            other => match other.symbol() {
                Some(symbol) => write!(f, "`{symbol}`"),
                None => f.write_str("token"),
            },
        }
    }
}

/// Ordered tokens of one expression, terminated by [`TokenKind::Eof`].
///
/// Only constructible through [`TokenList::new`], which appends the EOF
/// sentinel, so the list is never empty and the parser never reads past it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Seal `tokens` with an EOF token at `eof_offset`.
    pub fn new(mut tokens: Vec<Token>, eof_offset: u32) -> Self {
        tokens.push(Token::new(TokenKind::Eof, Span::point(eof_offset)));
        TokenList { tokens }
    }

    /// Number of tokens, including the EOF sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`: the EOF sentinel is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// `true` if the list holds nothing but the EOF sentinel.
    #[inline]
    pub fn is_only_eof(&self) -> bool {
        self.tokens.len() == 1
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds of all tokens, in order. Convenient for assertions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind.clone()).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_token_list_appends_eof() {
        let list = TokenList::new(vec![Token::new(TokenKind::Int(1), Span::new(0, 1))], 1);
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(list[1], Token::new(TokenKind::Eof, Span::point(1)));
    }

    #[test]
    fn test_empty_token_list_is_only_eof() {
        let list = TokenList::new(Vec::new(), 0);
        assert!(list.is_only_eof());
        assert_eq!(list.kinds(), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::Int(42).to_string(), "number 42");
        assert_eq!(TokenKind::Ident("x".into()).to_string(), "identifier `x`");
        assert_eq!(TokenKind::LtEq.to_string(), "`<=`");
        assert_eq!(TokenKind::RParen.to_string(), "`)`");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
    }

    #[test]
    fn test_is_operator() {
        assert!(TokenKind::PipePipe.is_operator());
        assert!(TokenKind::Percent.is_operator());
        assert!(!TokenKind::LParen.is_operator());
        assert!(!TokenKind::Int(0).is_operator());
        assert!(!TokenKind::Eof.is_operator());
    }
}
