//! Lexer for SILLY using logos with string interning.
//!
//! Logos only finds token boundaries. Every token's text is interned and
//! classified by [`TokenKind::classify`], so the lexer and the token model
//! cannot disagree about what a piece of text is.

mod raw_token;

use logos::Logos;
use silly_ir::{Span, StringInterner, Token, TokenKind};

use raw_token::RawToken;

/// Lazy, forward-only token sequence with one token of lookahead.
pub struct TokenStream<'a> {
    lexer: logos::Lexer<'a, RawToken>,
    lookahead: Option<Token>,
    interner: &'a StringInterner,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a str, interner: &'a StringInterner) -> Self {
        TokenStream {
            lexer: RawToken::lexer(source),
            lookahead: None,
            interner,
        }
    }

    /// The next token without consuming it.
    pub fn peek(&mut self) -> Option<Token> {
        if self.lookahead.is_none() {
            self.lookahead = self.scan();
        }
        self.lookahead
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Option<Token> {
        match self.lookahead.take() {
            Some(token) => Some(token),
            None => self.scan(),
        }
    }

    /// True while at least one token remains. Trailing whitespace does not
    /// count as a token.
    pub fn has_next(&mut self) -> bool {
        self.peek().is_some()
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    fn scan(&mut self) -> Option<Token> {
        let raw = self.lexer.next()?;
        let span = Span::from_range(self.lexer.span());
        let slice = self.lexer.slice();
        let text = self.interner.intern(slice);
        let kind = match raw {
            Ok(_) => TokenKind::classify(slice),
            Err(()) => TokenKind::Unknown,
        };
        Some(Token::new(kind, text, span))
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Lex a whole source text eagerly.
pub fn tokenize(source: &str, interner: &StringInterner) -> Vec<Token> {
    TokenStream::new(source, interner).collect()
}
