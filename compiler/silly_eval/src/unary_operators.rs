//! Unary operator implementations for the evaluator.

use silly_ir::UnaryOp;

use crate::errors::{integer_overflow, type_mismatch, EvalResult};
use crate::{StringHeap, Value};

/// Evaluate a unary operation.
///
/// `!` negates a boolean; `#` counts the characters of a string or the
/// elements of a list.
pub fn evaluate_unary(operand: &Value, op: UnaryOp, heap: &StringHeap) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Len, Value::Str(id)) => length(heap.get(*id).chars().count()),
        (UnaryOp::Len, Value::List(items)) => length(items.len()),
        _ => Err(type_mismatch(
            &format!("`{}`", op.as_symbol()),
            operand.kind(),
        )),
    }
}

fn length(len: usize) -> EvalResult {
    i64::try_from(len)
        .map(Value::Int)
        .map_err(|_| integer_overflow(UnaryOp::Len.as_symbol()))
}
