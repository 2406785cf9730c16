//! Runtime errors and their constructors.
//!
//! Build errors through the `#[cold]` functions below rather than the
//! variants directly, so the hot evaluation paths stay small.

use thiserror::Error;

use crate::ValueKind;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("variable `{name}` is not declared")]
    UndeclaredVariable { name: String },

    #[error("variable `{name}` is already declared in this scope")]
    AlreadyDeclared { name: String },

    #[error("variable `{name}` is declared but has no value")]
    UnassignedVariable { name: String },

    #[error("type mismatch: {operation} does not accept {found}")]
    TypeMismatch { operation: String, found: String },

    #[error("division by zero in `{op}`")]
    DivisionByZero { op: &'static str },

    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("integer overflow in `{op}`")]
    IntegerOverflow { op: &'static str },

    #[error("subroutine `{name}` is not defined")]
    UndefinedSubroutine { name: String },

    #[error("subroutine calls nested deeper than {limit}")]
    RecursionLimitExceeded { limit: usize },
}

pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

// Variable and Subroutine Errors

#[cold]
pub fn undeclared_variable(name: &str) -> EvalError {
    EvalError::UndeclaredVariable {
        name: name.to_owned(),
    }
}

#[cold]
pub fn already_declared(name: &str) -> EvalError {
    EvalError::AlreadyDeclared {
        name: name.to_owned(),
    }
}

#[cold]
pub fn unassigned_variable(name: &str) -> EvalError {
    EvalError::UnassignedVariable {
        name: name.to_owned(),
    }
}

#[cold]
pub fn undefined_subroutine(name: &str) -> EvalError {
    EvalError::UndefinedSubroutine {
        name: name.to_owned(),
    }
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::RecursionLimitExceeded { limit }
}

// Type Errors

/// `operation` was given a single operand of the wrong kind.
#[cold]
pub fn type_mismatch(operation: &str, found: ValueKind) -> EvalError {
    EvalError::TypeMismatch {
        operation: operation.to_owned(),
        found: found.to_string(),
    }
}

/// `operation` was given an unsupported pair of operand kinds.
#[cold]
pub fn binary_type_mismatch(operation: &str, left: ValueKind, right: ValueKind) -> EvalError {
    EvalError::TypeMismatch {
        operation: operation.to_owned(),
        found: format!("{left} and {right}"),
    }
}

// Arithmetic and Indexing Errors

#[cold]
pub fn division_by_zero(op: &'static str) -> EvalError {
    EvalError::DivisionByZero { op }
}

#[cold]
pub fn integer_overflow(op: &'static str) -> EvalError {
    EvalError::IntegerOverflow { op }
}

#[cold]
pub fn index_out_of_range(index: i64, len: usize) -> EvalError {
    EvalError::IndexOutOfRange { index, len }
}
