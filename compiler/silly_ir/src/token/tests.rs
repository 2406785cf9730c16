use super::*;
use crate::ast::{BinaryOp, UnaryOp};
use crate::{Name, Span, StringInterner};
use pretty_assertions::assert_eq;

#[test]
fn test_classify_fixed_spellings() {
    assert_eq!(TokenKind::classify("("), TokenKind::Delim(Delim::LParen));
    assert_eq!(TokenKind::classify("]"), TokenKind::Delim(Delim::RBracket));
    assert_eq!(TokenKind::classify("while"), TokenKind::Statement(StmtKeyword::While));
    assert_eq!(TokenKind::classify("endsub"), TokenKind::Keyword(Keyword::Endsub));
    assert_eq!(TokenKind::classify("#"), TokenKind::UnaryOp(UnaryOp::Len));
    assert_eq!(TokenKind::classify("\\"), TokenKind::BinaryOp(BinaryOp::NotEq));
    assert_eq!(TokenKind::classify("@"), TokenKind::BinaryOp(BinaryOp::Index));
    assert_eq!(TokenKind::classify("false"), TokenKind::BoolLiteral(false));
}

#[test]
fn test_classify_literals() {
    assert_eq!(TokenKind::classify("42"), TokenKind::IntLiteral);
    assert_eq!(TokenKind::classify("-17"), TokenKind::IntLiteral);
    assert_eq!(TokenKind::classify("\"hi there\""), TokenKind::StrLiteral);
    assert_eq!(TokenKind::classify("\"\""), TokenKind::StrLiteral);
}

#[test]
fn test_classify_identifiers() {
    assert_eq!(TokenKind::classify("x"), TokenKind::Ident);
    assert_eq!(TokenKind::classify("count2"), TokenKind::Ident);
    // keywords are not identifiers
    assert_eq!(TokenKind::classify("gets"), TokenKind::Keyword(Keyword::Gets));
}

#[test]
fn test_classify_unknown() {
    assert_eq!(TokenKind::classify("\""), TokenKind::Unknown);
    assert_eq!(TokenKind::classify("\"open"), TokenKind::Unknown);
    assert_eq!(TokenKind::classify("-"), TokenKind::Unknown);
    assert_eq!(TokenKind::classify("12ab"), TokenKind::Unknown);
    assert_eq!(TokenKind::classify("a_b"), TokenKind::Unknown);
    assert_eq!(TokenKind::classify("$"), TokenKind::Unknown);
}

#[test]
fn test_token_equality_is_by_text() {
    let interner = StringInterner::new();
    let gets = interner.intern("gets");
    let a = Token::new(TokenKind::Keyword(Keyword::Gets), gets, Span::new(0, 4));
    let b = Token::new(TokenKind::Keyword(Keyword::Gets), gets, Span::new(10, 14));
    let c = Token::new(TokenKind::Ident, interner.intern("x"), Span::new(0, 1));

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a.text, Name::EMPTY);
}

#[test]
fn test_statement_keyword_indices_match_table() {
    for (i, kw) in StmtKeyword::ALL.into_iter().enumerate() {
        assert_eq!(kw.index(), i);
        assert_eq!(StmtKeyword::from_text(kw.as_str()), Some(kw));
    }
}
