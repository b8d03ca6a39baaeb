//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! conversion to the public `TokenKind`.

use logos::Logos;

/// Raw token from logos.
///
/// Logos prefers the longest match, so `<=` wins over `<`, `&&` is the only
/// way to consume `&`, and a lone `=` matches nothing and surfaces as an error.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"[0-9]+", |lex| parse_int_wrapping(lex.slice()))]
    Int(i64),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,

    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Fold a run of ASCII digits into an `i64` modulo 2^64.
///
/// Literals past `i64::MAX` wrap the same way evaluation does, so
/// `9223372036854775808` reads as `i64::MIN`.
#[expect(
    clippy::cast_possible_wrap,
    reason = "reinterpreting the u64 magnitude as two's-complement is the wraparound rule"
)]
pub(crate) fn parse_int_wrapping(digits: &str) -> i64 {
    let magnitude = digits.bytes().fold(0u64, |acc, b| {
        acc.wrapping_mul(10).wrapping_add(u64::from(b - b'0'))
    });
    magnitude as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_in_range() {
        assert_eq!(parse_int_wrapping("0"), 0);
        assert_eq!(parse_int_wrapping("007"), 7);
        assert_eq!(parse_int_wrapping("9223372036854775807"), i64::MAX);
    }

    #[test]
    fn parse_wraps_past_i64_max() {
        assert_eq!(parse_int_wrapping("9223372036854775808"), i64::MIN);
        assert_eq!(parse_int_wrapping("18446744073709551615"), -1);
        assert_eq!(parse_int_wrapping("18446744073709551616"), 0);
    }
}
