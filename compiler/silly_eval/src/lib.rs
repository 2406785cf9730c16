//! Tree-walking evaluator for SILLY.
//!
//! - `value` - runtime values and the interpreter-local string heap
//! - `environment` - scope frames and the runtime stack
//! - `operators` / `unary_operators` - enum-dispatched operator semantics
//! - `interpreter` - statement execution and expression evaluation
//! - `print_handler` - where `print` output goes

mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::{Environment, FrameId, ScopeError};
pub use errors::{EvalError, EvalResult};
pub use interpreter::{
    Interpreter, InterpreterBuilder, ScopedInterpreter, Status, DEFAULT_MAX_CALL_DEPTH,
};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{RawValue, StrId, StringHeap, Value, ValueKind};
