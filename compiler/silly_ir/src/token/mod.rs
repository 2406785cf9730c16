//! Token types for the SILLY lexer.
//!
//! A token is its interned text plus a classification computed from that text
//! alone. The lexer decides where tokens start and end; [`TokenKind::classify`]
//! decides what they are.

mod keyword;
mod kind;

pub use keyword::{Keyword, StmtKeyword};
pub use kind::{Delim, TokenKind};

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Name, Span};

/// A token with its text and source span.
///
/// Equality and hashing consider only the text: two `gets` tokens at different
/// positions are the same token.
#[derive(Clone, Copy)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Name,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: Name, span: Span) -> Self {
        Token { kind, text, span }
    }

    /// True if this token is the given non-statement keyword.
    #[inline]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    /// True if this token is the given delimiter.
    #[inline]
    pub fn is_delim(&self, delim: Delim) -> bool {
        self.kind == TokenKind::Delim(delim)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {:?}", self.kind, self.text, self.span)
    }
}

#[cfg(test)]
mod tests;
