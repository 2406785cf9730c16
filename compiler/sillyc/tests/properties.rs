//! Property-based tests for evaluation semantics.

use proptest::prelude::*;
use silly_eval::{buffer_handler, Status};
use sillyc::{render_ast, run_source, RunOptions};

/// Run a program and return its printed output, or the error text.
fn eval_print(expr: &str) -> String {
    let handler = buffer_handler();
    match run_source(&format!("print {expr}"), &RunOptions::default(), handler.clone()) {
        Ok(Status::Ok) => handler.get_output().trim_end().to_owned(),
        Ok(status) => format!("{status:?}"),
        Err(err) => err.to_string(),
    }
}

/// Strategy for identifiers that are not keywords or boolean literals.
fn arb_ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,8}".prop_map(|s| format!("x{s}"))
}

fn arb_binop() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("+"),
        Just("*"),
        Just("/"),
        Just("%"),
        Just("^"),
        Just("="),
        Just("\\"),
        Just("<"),
        Just(">"),
        Just("&"),
        Just("|"),
        Just("@"),
    ]
}

/// Strategy for fully parenthesized expressions.
fn arb_expr() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (-1000i64..1000).prop_map(|n| n.to_string()),
        any::<bool>().prop_map(|b| b.to_string()),
        "[a-z ]{0,6}".prop_map(|s| format!("\"{s}\"")),
        arb_ident(),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), arb_binop(), inner.clone())
                .prop_map(|(l, op, r)| format!("({l} {op} {r})")),
            inner.clone().prop_map(|e| format!("(! {e})")),
            inner.clone().prop_map(|e| format!("(# {e})")),
            prop::collection::vec(inner, 0..4).prop_map(|items| format!("[{}]", items.join(" "))),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn division_truncates_toward_zero(a in -1_000_000_000i64..1_000_000_000, b in -1_000_000_000i64..1_000_000_000) {
        prop_assume!(b != 0);
        let expected = (a / b).to_string();
        prop_assert_eq!(eval_print(&format!("({a} / {b})")), expected);
    }

    #[test]
    fn modulo_takes_sign_of_dividend(a in -1_000_000i64..1_000_000, b in 1i64..1000) {
        let result: i64 = eval_print(&format!("({a} % {b})")).parse().unwrap_or(i64::MAX);
        prop_assert!(result.abs() < b);
        prop_assert!(result == 0 || (result < 0) == (a < 0));
    }

    #[test]
    fn concatenation_adds_lengths(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
        let len = eval_print(&format!("(# (\"{a}\" + \"{b}\"))"));
        prop_assert_eq!(len, (a.len() + b.len()).to_string());
    }

    #[test]
    fn lexer_and_parser_never_panic(input in ".{0,80}") {
        let _ = render_ast(&input);
    }

    #[test]
    fn evaluation_never_panics(expr in arb_expr()) {
        let _ = eval_print(&expr);
    }

    #[test]
    fn canonical_form_is_a_fixed_point(expr in arb_expr()) {
        let source = format!("print {expr}");
        let once = render_ast(&source);
        prop_assert!(once.is_ok(), "generated expression failed to parse: {}", source);
        if let Ok(once) = once {
            prop_assert_eq!(render_ast(&once).ok(), Some(once));
        }
    }
}
