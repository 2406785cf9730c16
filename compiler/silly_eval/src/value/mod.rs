//! Runtime values.
//!
//! Values are immutable. Strings live in the interpreter's [`StringHeap`] and
//! a `Value::Str` holds only its handle; lists share their elements through
//! `Rc`, so cloning any value is cheap.

mod heap;

pub use heap::{StrId, StringHeap};

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::errors::{binary_type_mismatch, EvalResult};

/// Runtime value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Str(StrId),
    Bool(bool),
    List(Rc<[Value]>),
}

/// The four value kinds. Ordering and equality only relate values of one kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueKind {
    Integer,
    String,
    Boolean,
    List,
}

impl ValueKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::List => "list",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value's underlying data, with string handles resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawValue<'v> {
    Int(i64),
    Str(&'v str),
    Bool(bool),
    List(&'v [Value]),
}

impl Value {
    /// String value, storing `text` in the heap.
    pub fn string(text: &str, heap: &mut StringHeap) -> Value {
        Value::Str(heap.intern(text))
    }

    pub fn list(items: Vec<Value>) -> Value {
        Value::List(items.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Integer,
            Value::Str(_) => ValueKind::String,
            Value::Bool(_) => ValueKind::Boolean,
            Value::List(_) => ValueKind::List,
        }
    }

    pub fn raw<'v>(&'v self, heap: &'v StringHeap) -> RawValue<'v> {
        match self {
            Value::Int(n) => RawValue::Int(*n),
            Value::Str(id) => RawValue::Str(heap.get(*id)),
            Value::Bool(b) => RawValue::Bool(*b),
            Value::List(items) => RawValue::List(items),
        }
    }

    /// Source-like rendering: strings quoted, lists as `[e1 e2 ...]`.
    pub fn stringify(&self, heap: &StringHeap) -> String {
        let mut out = String::new();
        self.write_to(&mut out, heap);
        out
    }

    /// Rendering used by `print`: like [`Value::stringify`], except that a
    /// top-level string prints its raw text.
    pub fn display(&self, heap: &StringHeap) -> String {
        match self {
            Value::Str(id) => heap.get(*id).to_owned(),
            _ => self.stringify(heap),
        }
    }

    fn write_to(&self, out: &mut String, heap: &StringHeap) {
        match self {
            Value::Int(n) => out.push_str(&n.to_string()),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Str(id) => {
                out.push('"');
                out.push_str(heap.get(*id));
                out.push('"');
            }
            Value::List(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    item.write_to(out, heap);
                }
                out.push(']');
            }
        }
    }

    /// Order two values of the same kind.
    ///
    /// Integers numerically, strings by text, `false < true`, and lists
    /// element-wise with a proper prefix first.
    pub fn compare(&self, other: &Value, heap: &StringHeap) -> EvalResult<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Ok(heap.get(*a).cmp(heap.get(*b))),
            (Value::Bool(a), Value::Bool(b)) => Ok(a.cmp(b)),
            (Value::List(a), Value::List(b)) => {
                for (x, y) in a.iter().zip(b.iter()) {
                    match x.compare(y, heap)? {
                        Ordering::Equal => {}
                        unequal => return Ok(unequal),
                    }
                }
                Ok(a.len().cmp(&b.len()))
            }
            _ => Err(binary_type_mismatch(
                "comparison",
                self.kind(),
                other.kind(),
            )),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
