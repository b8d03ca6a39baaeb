//! Lexer error types.

use crate::Span;

/// A failure to tokenize the source.
///
/// Lexing stops at the first error, so at most one is ever reported.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexError {
    /// A character that starts no token, e.g. a bare `=` or `&`.
    #[error("unexpected character {found:?} at position {}", .span.start)]
    UnexpectedCharacter { found: char, span: Span },

    /// The source does not fit in `u32` byte offsets.
    #[error("expression of {len} bytes is too large")]
    SourceTooLarge { len: usize },
}

impl LexError {
    #[cold]
    pub fn unexpected_character(found: char, span: Span) -> Self {
        LexError::UnexpectedCharacter { found, span }
    }

    #[cold]
    pub fn source_too_large(len: usize) -> Self {
        LexError::SourceTooLarge { len }
    }

    /// Location of the offending input, if there is one.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::UnexpectedCharacter { span, .. } => Some(*span),
            LexError::SourceTooLarge { .. } => None,
        }
    }
}
