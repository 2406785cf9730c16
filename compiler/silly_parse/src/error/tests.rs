use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_messages_name_the_token() {
    let err = unexpected_token("endwhile", "`endif`", Span::new(10, 18));
    assert_eq!(err.to_string(), "expected `endif`, found `endwhile` at 10..18");

    let err = unexpected_eof("`)`");
    assert_eq!(err.to_string(), "expected `)`, found end of input");

    let err = unknown_statement("gets", Span::new(0, 4));
    assert_eq!(err.to_string(), "`gets` at 0..4 does not begin a statement");

    let err = integer_out_of_range("99999999999999999999", Span::new(3, 23));
    assert_eq!(
        err.to_string(),
        "integer literal `99999999999999999999` at 3..23 does not fit in 64 bits"
    );
}

#[test]
fn test_kind_names() {
    assert_eq!(unexpected_eof("x").kind_name(), "unexpected end of input");
    assert_eq!(
        unknown_statement("x", Span::DUMMY).kind_name(),
        "unknown statement"
    );
}

#[test]
fn test_nested_subroutine_message() {
    let err = nested_subroutine(Span::new(13, 16));
    assert_eq!(
        err.to_string(),
        "`sub` at 13..16 is inside a block; subroutines are defined at the top level"
    );
    assert_eq!(err.kind_name(), "nested subroutine");
}
