use pretty_assertions::assert_eq;
use silly_ir::{BinaryOp, Expr, Span, StringInterner, UnaryOp};

use crate::{ParseError, Parser};

fn parse_expr(source: &str, interner: &StringInterner) -> Result<Expr, ParseError> {
    Parser::new(source, interner).parse_expr()
}

#[test]
fn test_atoms() {
    let interner = StringInterner::new();
    assert_eq!(parse_expr("42", &interner), Ok(Expr::Int(42)));
    assert_eq!(parse_expr("-7", &interner), Ok(Expr::Int(-7)));
    assert_eq!(parse_expr("false", &interner), Ok(Expr::Bool(false)));
    assert_eq!(
        parse_expr("total", &interner),
        Ok(Expr::Var(interner.intern("total")))
    );
}

#[test]
fn test_string_literal_drops_quotes() {
    let interner = StringInterner::new();
    assert_eq!(
        parse_expr("\"hi there\"", &interner),
        Ok(Expr::Str(interner.intern("hi there")))
    );
    assert_eq!(parse_expr("\"\"", &interner), Ok(Expr::Str(interner.intern(""))));
}

#[test]
fn test_unary_and_binary() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    assert_eq!(
        parse_expr("(! x)", &interner),
        Ok(Expr::unary(UnaryOp::Not, Expr::Var(x)))
    );
    assert_eq!(
        parse_expr("((x + 1) < 10)", &interner),
        Ok(Expr::binary(
            BinaryOp::Lt,
            Expr::binary(BinaryOp::Add, Expr::Var(x), Expr::Int(1)),
            Expr::Int(10),
        ))
    );
}

#[test]
fn test_list_literal() {
    let interner = StringInterner::new();
    assert_eq!(
        parse_expr("[1 [true] \"a\"]", &interner),
        Ok(Expr::List(vec![
            Expr::Int(1),
            Expr::List(vec![Expr::Bool(true)]),
            Expr::Str(interner.intern("a")),
        ]))
    );
    assert_eq!(parse_expr("[]", &interner), Ok(Expr::List(vec![])));
}

#[test]
fn test_arity_mismatch() {
    let interner = StringInterner::new();
    assert_eq!(
        parse_expr("(! a b)", &interner),
        Err(ParseError::UnexpectedToken {
            found: "b".to_owned(),
            expected: "`)`".to_owned(),
            span: Span::new(5, 6),
        })
    );
    assert_eq!(
        parse_expr("(a b)", &interner),
        Err(ParseError::UnexpectedToken {
            found: "b".to_owned(),
            expected: "binary operator".to_owned(),
            span: Span::new(3, 4),
        })
    );
    assert!(matches!(
        parse_expr("(+ 1 2)", &interner),
        Err(ParseError::UnexpectedToken { found, .. }) if found == "+"
    ));
}

#[test]
fn test_premature_end() {
    let interner = StringInterner::new();
    assert_eq!(
        parse_expr("[1 2", &interner),
        Err(ParseError::UnexpectedEof {
            expected: "`]`".to_owned()
        })
    );
    assert_eq!(
        parse_expr("(1 +", &interner),
        Err(ParseError::UnexpectedEof {
            expected: "expression".to_owned()
        })
    );
    assert_eq!(
        parse_expr("", &interner),
        Err(ParseError::UnexpectedEof {
            expected: "expression".to_owned()
        })
    );
}

#[test]
fn test_integer_out_of_range() {
    let interner = StringInterner::new();
    assert_eq!(
        parse_expr("9223372036854775808", &interner),
        Err(ParseError::IntegerOutOfRange {
            text: "9223372036854775808".to_owned(),
            span: Span::new(0, 19),
        })
    );
    assert_eq!(
        parse_expr("-9223372036854775808", &interner),
        Ok(Expr::Int(i64::MIN))
    );
}

#[test]
fn test_deep_nesting() {
    let interner = StringInterner::new();
    let depth = 20_000;
    let source = format!("{}0{}", "(! ".repeat(depth), ")".repeat(depth));

    let mut expr = parse_expr(&source, &interner).unwrap();
    let mut seen = 0;
    while let Expr::Unary { operand, .. } = expr {
        expr = *operand;
        seen += 1;
    }
    assert_eq!(seen, depth);
    assert_eq!(expr, Expr::Int(0));
}
