use super::*;
use pretty_assertions::assert_eq;
use silly_ir::Expr;

#[test]
fn test_parse_program() {
    let interner = StringInterner::new();
    let program = parse("var x gets 1\nprint x\n", &interner).unwrap();
    assert_eq!(program.stmts.len(), 2);
    assert_eq!(program.stmts[1], Stmt::Print(Expr::Var(interner.intern("x"))));
}

#[test]
fn test_empty_program() {
    let interner = StringInterner::new();
    assert_eq!(parse("  \n ", &interner), Ok(Program::default()));
}

#[test]
fn test_next_statement_is_incremental() {
    let interner = StringInterner::new();
    let mut parser = Parser::new("exit break )", &interner);

    assert_eq!(parser.next_statement(), Ok(Some(Stmt::Exit)));
    assert_eq!(parser.next_statement(), Ok(Some(Stmt::Break)));
    assert!(parser.has_next());
    assert!(parser.next_statement().is_err());
}

#[test]
fn test_next_statement_at_end() {
    let interner = StringInterner::new();
    let mut parser = Parser::new("exit", &interner);
    assert_eq!(parser.next_statement(), Ok(Some(Stmt::Exit)));
    assert!(!parser.has_next());
    assert_eq!(parser.next_statement(), Ok(None));
}

#[test]
fn test_display_reparses_to_same_tree() {
    let interner = StringInterner::new();
    let source = "\
var i gets 0
while (i < 3) do
  if (i = 1) then
    print \"one\"
  elseif (i = 2) then
    break
  endif
  i gets (i + 1)
endwhile
sub show
  print [i (# \"ab\")]
endsub
call show";
    let program = parse(source, &interner).unwrap();
    let printed = program.display(&interner).to_string();
    assert_eq!(printed, source);
    assert_eq!(parse(&printed, &interner).unwrap(), program);
}
