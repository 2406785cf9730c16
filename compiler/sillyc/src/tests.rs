use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_run_options_flags() {
    let mut options = RunOptions::default();
    assert_eq!(options.max_call_depth, DEFAULT_MAX_CALL_DEPTH);

    assert!(options.apply_flag("--max-depth=25"));
    assert_eq!(options.max_call_depth, 25);

    assert!(!options.apply_flag("--max-depth=lots"));
    assert!(!options.apply_flag("--verbose"));
    assert_eq!(options.max_call_depth, 25);
}

#[test]
fn test_render_tokens() {
    let rendered = render_tokens("print (1 + x)");
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("statement keyword"));
    assert!(lines[0].ends_with("@ 0..5"));
    assert!(lines[3].starts_with("binary operator"));
}

#[test]
fn test_render_ast_is_canonical() {
    let rendered = render_ast("var   x gets(1+2)  print [ x  \"s\"]").unwrap();
    assert_eq!(rendered, "var x gets (1 + 2)\nprint [x \"s\"]");
}

#[test]
fn test_error_messages() {
    let err = render_ast("print (1 +").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error: expected expression, found end of input"
    );

    let err = read_source(Path::new("/nonexistent/program.sil")).unwrap_err();
    assert!(matches!(err, SillyError::Io { .. }));
    assert!(err.to_string().starts_with("cannot read `/nonexistent/program.sil`"));
}
