use super::*;

#[test]
fn test_passes_through_result() {
    let result: Result<i64, &str> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(result, Ok(7));
}

#[test]
fn test_nested_list_depth() {
    // Mirrors walking `[[[[...]]]]`: one frame per nesting level.
    fn depth(n: u32) -> u32 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    assert_eq!(depth(200_000), 200_000);
}
