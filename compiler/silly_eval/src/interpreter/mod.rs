//! Tree-walking interpreter for SILLY.
//!
//! The AST is borrowed for the whole run (`'a`); all mutable state lives here.
//!
//! - `statements` - executes `Stmt`s and yields a [`Status`]
//! - `expressions` - evaluates `Expr`s to [`Value`]s
//! - `scope_guard` - RAII frame management for block bodies

mod builder;
mod expressions;
mod scope_guard;
mod statements;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use rustc_hash::FxHashMap;
use silly_ir::{Block, Name, Program, StringInterner};
use tracing::debug;

use crate::environment::{FrameId, ScopeError};
use crate::errors::{already_declared, unassigned_variable, undeclared_variable, EvalResult};
use crate::{Environment, EvalError, SharedPrintHandler, StringHeap};

/// Default bound on nested subroutine calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// How a statement finished.
///
/// `Break` stops at the nearest enclosing loop; `Exit` stops the program.
#[must_use]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Status {
    Ok,
    Break,
    Exit,
}

/// A defined subroutine: its body and the frame it was defined in.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Subroutine<'a> {
    pub(crate) body: &'a Block,
    pub(crate) scope: FrameId,
}

/// Tree-walking interpreter.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) heap: StringHeap,
    pub(crate) env: Environment,
    /// Subroutines by name, registered when their `sub` statement runs.
    pub(crate) subroutines: FxHashMap<Name, Subroutine<'a>>,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) call_depth: usize,
    pub(crate) max_call_depth: usize,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter that prints to stdout.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    /// Run a program in the global frame.
    ///
    /// Stops at the first statement that does not finish `Ok` and returns its
    /// status. A `break` outside any loop therefore ends the program too.
    pub fn run(&mut self, program: &'a Program) -> Result<Status, EvalError> {
        for stmt in &program.stmts {
            let status = self.execute(stmt)?;
            if status != Status::Ok {
                debug!(?status, "program halted");
                return Ok(status);
            }
        }
        Ok(Status::Ok)
    }

    #[inline]
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    #[inline]
    pub fn heap(&self) -> &StringHeap {
        &self.heap
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Check the call depth before entering a subroutine.
    #[inline]
    pub(crate) fn check_recursion_limit(&self) -> EvalResult<()> {
        if self.call_depth >= self.max_call_depth {
            return Err(crate::errors::recursion_limit_exceeded(self.max_call_depth));
        }
        Ok(())
    }

    /// Turn an environment failure into an error naming the variable.
    #[cold]
    pub(crate) fn scope_error(&self, err: ScopeError) -> EvalError {
        match err {
            ScopeError::Undeclared(name) => undeclared_variable(self.interner.lookup(name)),
            ScopeError::AlreadyDeclared(name) => already_declared(self.interner.lookup(name)),
            ScopeError::Unassigned(name) => unassigned_variable(self.interner.lookup(name)),
        }
    }
}
