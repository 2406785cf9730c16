//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the operator and value sets are closed, so a
//! match on `(op, left, right)` covers every legal combination and everything
//! else is a type mismatch.

use std::cmp::Ordering;
use std::rc::Rc;

use silly_ir::BinaryOp;

use crate::errors::{
    binary_type_mismatch, division_by_zero, index_out_of_range, integer_overflow, EvalResult,
};
use crate::{EvalError, StringHeap, Value, ValueKind};

// Helper functions for checked integer arithmetic

#[inline]
fn checked_arith(result: Option<i64>, op: BinaryOp) -> EvalResult {
    result
        .map(Value::Int)
        .ok_or_else(|| integer_overflow(op.as_symbol()))
}

/// Checked `/` or `%` with zero guard.
///
/// Zero divisors fail `DivisionByZero`; `i64::MIN / -1` fails `IntegerOverflow`.
#[inline]
fn checked_div<F>(divisor: i64, op: BinaryOp, f: F) -> EvalResult
where
    F: FnOnce() -> Option<i64>,
{
    if divisor == 0 {
        Err(division_by_zero(op.as_symbol()))
    } else {
        checked_arith(f(), op)
    }
}

/// Truncating integer exponentiation.
///
/// A negative exponent yields the truncated reciprocal: `1` and `-1` keep
/// their magnitude, zero has no reciprocal, and anything else truncates to 0.
fn int_pow(base: i64, exp: i64) -> EvalResult {
    let symbol = BinaryOp::Pow.as_symbol();
    let odd = exp % 2 != 0;
    match base {
        0 if exp < 0 => Err(division_by_zero(symbol)),
        0 => Ok(Value::Int(i64::from(exp == 0))),
        1 => Ok(Value::Int(1)),
        -1 => Ok(Value::Int(if odd { -1 } else { 1 })),
        _ if exp < 0 => Ok(Value::Int(0)),
        _ => {
            let exp = u32::try_from(exp).map_err(|_| integer_overflow(symbol))?;
            checked_arith(base.checked_pow(exp), BinaryOp::Pow)
        }
    }
}

/// Bounds-check an index. Negative indices are out of range.
fn checked_index(index: i64, len: usize) -> EvalResult<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or_else(|| index_out_of_range(index, len))
}

// Direct Dispatch Function

/// Evaluate a binary operation on two already-evaluated operands.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Operands are consumed by callers; taking ownership avoids clones at call sites"
)]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp, heap: &mut StringHeap) -> EvalResult {
    if op.is_comparison() {
        return eval_comparison(&left, &right, op, heap);
    }
    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => {
            let joined = format!("{}{}", heap.get(*a), heap.get(*b));
            Ok(Value::string(&joined, heap))
        }
        (Value::List(a), Value::List(b)) if op == BinaryOp::Add => {
            let joined: Rc<[Value]> = a.iter().chain(b.iter()).cloned().collect();
            Ok(Value::List(joined))
        }
        (Value::Str(s), Value::Int(i)) if op == BinaryOp::Index => {
            let text = heap.get(*s);
            let len = text.chars().count();
            let index = checked_index(*i, len)?;
            let ch: String = text.chars().skip(index).take(1).collect();
            Ok(Value::string(&ch, heap))
        }
        (Value::List(items), Value::Int(i)) if op == BinaryOp::Index => {
            let index = checked_index(*i, items.len())?;
            Ok(items[index].clone())
        }
        _ => Err(mismatch(&left, &right, op)),
    }
}

// Type-Specific Evaluation Functions

fn eval_comparison(left: &Value, right: &Value, op: BinaryOp, heap: &StringHeap) -> EvalResult {
    if left.kind() != right.kind() {
        return Err(mismatch(left, right, op));
    }
    let ordering = left.compare(right, heap)?;
    let result = match op {
        BinaryOp::Eq => ordering == Ordering::Equal,
        BinaryOp::NotEq => ordering != Ordering::Equal,
        BinaryOp::Gt => ordering == Ordering::Greater,
        BinaryOp::Lt => ordering == Ordering::Less,
        _ => return Err(mismatch(left, right, op)),
    };
    Ok(Value::Bool(result))
}

/// Integer arithmetic. Every operation is checked.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), op),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), op),
        BinaryOp::Div => checked_div(b, op, || a.checked_div(b)),
        BinaryOp::Mod => checked_div(b, op, || a.checked_rem(b)),
        BinaryOp::Pow => int_pow(a, b),
        _ => Err(binary_type_mismatch(
            &op_label(op),
            ValueKind::Integer,
            ValueKind::Integer,
        )),
    }
}

/// `&` and `|`. Both operands are already evaluated.
fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And => Ok(Value::Bool(a && b)),
        BinaryOp::Or => Ok(Value::Bool(a || b)),
        _ => Err(binary_type_mismatch(
            &op_label(op),
            ValueKind::Boolean,
            ValueKind::Boolean,
        )),
    }
}

fn op_label(op: BinaryOp) -> String {
    format!("`{}`", op.as_symbol())
}

#[cold]
fn mismatch(left: &Value, right: &Value, op: BinaryOp) -> EvalError {
    binary_type_mismatch(&op_label(op), left.kind(), right.kind())
}
