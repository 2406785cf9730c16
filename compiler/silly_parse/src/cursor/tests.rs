use super::*;
use pretty_assertions::assert_eq;
use silly_ir::Span;

#[test]
fn test_expect_keyword() {
    let interner = StringInterner::new();
    let mut cursor = Cursor::new("gets do", &interner);

    assert!(cursor.expect_keyword(Keyword::Gets).is_ok());
    assert_eq!(
        cursor.expect_keyword(Keyword::Then),
        Err(ParseError::UnexpectedToken {
            found: "do".to_owned(),
            expected: "`then`".to_owned(),
            span: Span::new(5, 7),
        })
    );
    assert_eq!(
        cursor.expect_keyword(Keyword::Then),
        Err(ParseError::UnexpectedEof {
            expected: "`then`".to_owned()
        })
    );
}

#[test]
fn test_expect_ident() {
    let interner = StringInterner::new();
    let mut cursor = Cursor::new("count 3", &interner);

    let name = cursor.expect_ident().unwrap();
    assert_eq!(interner.lookup(name), "count");
    assert!(matches!(
        cursor.expect_ident(),
        Err(ParseError::UnexpectedToken { found, .. }) if found == "3"
    ));
}

#[test]
fn test_peek_then_advance() {
    let interner = StringInterner::new();
    let mut cursor = Cursor::new("( )", &interner);

    assert!(cursor.peek().unwrap().is_delim(Delim::LParen));
    assert!(cursor.expect_delim(Delim::LParen).is_ok());
    assert!(cursor.expect_delim(Delim::RParen).is_ok());
    assert!(cursor.is_at_end());
    assert_eq!(cursor.pos, 2);
}
