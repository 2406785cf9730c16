//! Token cursor over the lazy token stream.
//!
//! Wraps [`TokenStream`] with the consumption helpers the grammar needs. All
//! tokens the parser consumes pass through [`Cursor::advance`].

use silly_ir::{Delim, Keyword, Name, StringInterner, Token, TokenKind};
use silly_lexer::TokenStream;
use tracing::trace;

use crate::error::{unexpected_eof, unexpected_token};
use crate::ParseError;

pub(crate) struct Cursor<'a> {
    tokens: TokenStream<'a>,
    interner: &'a StringInterner,
    /// Number of tokens consumed so far.
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens: TokenStream::new(source, interner),
            interner,
            pos: 0,
        }
    }

    pub(crate) fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Text of a token.
    #[inline]
    pub(crate) fn text(&self, token: Token) -> &'static str {
        self.interner.lookup(token.text)
    }

    #[inline]
    pub(crate) fn peek(&mut self) -> Option<Token> {
        self.tokens.peek()
    }

    #[inline]
    pub(crate) fn is_at_end(&mut self) -> bool {
        !self.tokens.has_next()
    }

    /// Consume the next token, if any.
    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.next_token()?;
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        self.pos += 1;
        Some(token)
    }

    /// Consume the next token, failing with "expected `expected`" at end of
    /// input.
    pub(crate) fn next_or_eof(&mut self, expected: &str) -> Result<Token, ParseError> {
        self.advance().ok_or_else(|| unexpected_eof(expected))
    }

    /// Consume a keyword or fail.
    pub(crate) fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token, ParseError> {
        let expected = format!("`{}`", keyword.as_str());
        let token = self.next_or_eof(&expected)?;
        if token.is_keyword(keyword) {
            Ok(token)
        } else {
            Err(self.unexpected(token, expected))
        }
    }

    /// Consume a delimiter or fail.
    pub(crate) fn expect_delim(&mut self, delim: Delim) -> Result<Token, ParseError> {
        let expected = format!("`{}`", delim.as_str());
        let token = self.next_or_eof(&expected)?;
        if token.is_delim(delim) {
            Ok(token)
        } else {
            Err(self.unexpected(token, expected))
        }
    }

    /// Consume an identifier and return its name.
    pub(crate) fn expect_ident(&mut self) -> Result<Name, ParseError> {
        let expected = TokenKind::Ident.display_name();
        let token = self.next_or_eof(expected)?;
        if token.kind == TokenKind::Ident {
            Ok(token.text)
        } else {
            Err(self.unexpected(token, expected))
        }
    }

    #[cold]
    pub(crate) fn unexpected(&self, token: Token, expected: impl Into<String>) -> ParseError {
        unexpected_token(self.text(token), expected, token.span)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
