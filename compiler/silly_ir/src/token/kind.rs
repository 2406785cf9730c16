//! Token classification.

use crate::ast::{BinaryOp, UnaryOp};

use super::{Keyword, StmtKeyword};

/// Grouping delimiters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Delim {
    LParen,
    RParen,
    LBracket,
    RBracket,
}

impl Delim {
    pub const fn as_str(self) -> &'static str {
        match self {
            Delim::LParen => "(",
            Delim::RParen => ")",
            Delim::LBracket => "[",
            Delim::RBracket => "]",
        }
    }

    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "(" => Some(Delim::LParen),
            ")" => Some(Delim::RParen),
            "[" => Some(Delim::LBracket),
            "]" => Some(Delim::RBracket),
            _ => None,
        }
    }
}

/// What a token is, derived purely from its text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Delim(Delim),
    UnaryOp(UnaryOp),
    BinaryOp(BinaryOp),
    Statement(StmtKeyword),
    Keyword(Keyword),
    Ident,
    IntLiteral,
    BoolLiteral(bool),
    StrLiteral,
    Unknown,
}

impl TokenKind {
    /// Classify token text.
    ///
    /// Checks run in a fixed order: delimiters, statement keywords, other
    /// keywords, unary operators, binary operators, booleans, then the
    /// literal and identifier shapes. Anything else is `Unknown`.
    pub fn classify(text: &str) -> TokenKind {
        if let Some(delim) = Delim::from_text(text) {
            return TokenKind::Delim(delim);
        }
        if let Some(kw) = StmtKeyword::from_text(text) {
            return TokenKind::Statement(kw);
        }
        if let Some(kw) = Keyword::from_text(text) {
            return TokenKind::Keyword(kw);
        }
        if let Some(op) = UnaryOp::from_symbol(text) {
            return TokenKind::UnaryOp(op);
        }
        if let Some(op) = BinaryOp::from_symbol(text) {
            return TokenKind::BinaryOp(op);
        }
        match text {
            "true" => return TokenKind::BoolLiteral(true),
            "false" => return TokenKind::BoolLiteral(false),
            _ => {}
        }

        let mut chars = text.chars();
        match chars.next() {
            Some('"') => {
                if text.len() > 1 && text.ends_with('"') {
                    TokenKind::StrLiteral
                } else {
                    TokenKind::Unknown
                }
            }
            Some(c) if c.is_ascii_digit() || (c == '-' && starts_with_digit(chars.as_str())) => {
                if chars.all(|c| c.is_ascii_digit()) {
                    TokenKind::IntLiteral
                } else {
                    TokenKind::Unknown
                }
            }
            Some(c) if c.is_alphabetic() => {
                if chars.all(char::is_alphanumeric) {
                    TokenKind::Ident
                } else {
                    TokenKind::Unknown
                }
            }
            _ => TokenKind::Unknown,
        }
    }

    /// Human-readable category for diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Delim(_) => "delimiter",
            TokenKind::UnaryOp(_) => "unary operator",
            TokenKind::BinaryOp(_) => "binary operator",
            TokenKind::Statement(_) => "statement keyword",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Ident => "identifier",
            TokenKind::IntLiteral => "integer literal",
            TokenKind::BoolLiteral(_) => "boolean literal",
            TokenKind::StrLiteral => "string literal",
            TokenKind::Unknown => "unknown token",
        }
    }
}

fn starts_with_digit(rest: &str) -> bool {
    rest.chars().next().is_some_and(|c| c.is_ascii_digit())
}
