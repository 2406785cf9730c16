//! Stack safety for the recursive parser and evaluator.
//!
//! SILLY expressions nest without limit (`((((1 + 2) + 3) + 4) ...)`), and
//! both the parser and the tree-walker recurse once per nesting level. Wrap
//! those recursive entry points with [`ensure_sufficient_stack`] so a deeply
//! nested program grows the stack instead of overflowing it.
//!
//! - **Red zone**: 64KB. If less than this remains, the stack is grown.
//! - **Growth size**: 1MB per growth.

/// Minimum stack space to keep available.
const RED_ZONE: usize = 64 * 1024;

/// Stack space to allocate when growing.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn parse_expr(&mut self) -> Result<Expr, ParseError> {
///     ensure_sufficient_stack(|| self.parse_expr_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
