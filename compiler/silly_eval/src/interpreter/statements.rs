//! Statement execution.

use silly_ir::{Block, Expr, IfBranch, Name, Stmt};
use silly_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use super::{Interpreter, Status, Subroutine};
use crate::environment::ScopeError;
use crate::errors::{already_declared, type_mismatch, undefined_subroutine, EvalResult};
use crate::Value;

impl<'a> Interpreter<'a> {
    /// Execute one statement.
    pub fn execute(&mut self, stmt: &'a Stmt) -> EvalResult<Status> {
        ensure_sufficient_stack(|| self.execute_inner(stmt))
    }

    fn execute_inner(&mut self, stmt: &'a Stmt) -> EvalResult<Status> {
        match stmt {
            Stmt::Assign { name, value } => self.exec_assign(*name, value),
            Stmt::VarDecl { name, value } => self.exec_var_decl(*name, value),
            Stmt::Print(value) => {
                let value = self.evaluate(value)?;
                self.print_handler.println(&value.display(&self.heap));
                Ok(Status::Ok)
            }
            Stmt::If {
                branches,
                else_body,
            } => self.exec_if(branches, else_body.as_ref()),
            Stmt::While { cond, body } => self.exec_while(cond, body),
            Stmt::Repeat { count, body } => self.exec_repeat(count, body),
            Stmt::Sub { name, body } => self.define_subroutine(*name, body),
            Stmt::Call { name } => self.call_subroutine(*name),
            Stmt::Exit => Ok(Status::Exit),
            Stmt::Break => Ok(Status::Break),
        }
    }

    /// Run a block in a fresh frame, stopping at the first non-`Ok` status.
    pub fn execute_body(&mut self, block: &'a Block) -> EvalResult<Status> {
        self.scoped().execute_stmts(block)
    }

    fn execute_stmts(&mut self, block: &'a Block) -> EvalResult<Status> {
        for stmt in &block.stmts {
            let status = self.execute(stmt)?;
            if status != Status::Ok {
                return Ok(status);
            }
        }
        Ok(Status::Ok)
    }

    /// The variable must already be declared; the value is stored in the
    /// frame that declares it.
    fn exec_assign(&mut self, name: Name, value: &Expr) -> EvalResult<Status> {
        if !self.env.is_declared(name) {
            return Err(self.scope_error(ScopeError::Undeclared(name)));
        }
        let value = self.evaluate(value)?;
        self.store(name, value)?;
        Ok(Status::Ok)
    }

    /// Declares first, so the initializer already sees the new, unassigned
    /// binding.
    fn exec_var_decl(&mut self, name: Name, value: &Expr) -> EvalResult<Status> {
        self.env
            .declare_variable(name)
            .map_err(|err| self.scope_error(err))?;
        let value = self.evaluate(value)?;
        self.store(name, value)?;
        Ok(Status::Ok)
    }

    fn store(&mut self, name: Name, value: Value) -> EvalResult<()> {
        self.env
            .store_value(name, value)
            .map_err(|err| self.scope_error(err))
    }

    fn exec_if(
        &mut self,
        branches: &'a [IfBranch],
        else_body: Option<&'a Block>,
    ) -> EvalResult<Status> {
        for branch in branches {
            if self.eval_condition(&branch.cond, "if condition")? {
                return self.execute_body(&branch.body);
            }
        }
        match else_body {
            Some(body) => self.execute_body(body),
            None => Ok(Status::Ok),
        }
    }

    fn exec_while(&mut self, cond: &Expr, body: &'a Block) -> EvalResult<Status> {
        while self.eval_condition(cond, "while condition")? {
            match self.execute_body(body)? {
                Status::Ok => {}
                Status::Break => break,
                Status::Exit => return Ok(Status::Exit),
            }
        }
        Ok(Status::Ok)
    }

    /// The count is evaluated once, before the first iteration.
    fn exec_repeat(&mut self, count: &Expr, body: &'a Block) -> EvalResult<Status> {
        let times = match self.evaluate(count)? {
            Value::Int(n) => n,
            other => return Err(type_mismatch("repeat count", other.kind())),
        };
        trace!(times, "repeat");
        for _ in 0..times {
            match self.execute_body(body)? {
                Status::Ok => {}
                Status::Break => break,
                Status::Exit => return Ok(Status::Exit),
            }
        }
        Ok(Status::Ok)
    }

    fn eval_condition(&mut self, cond: &Expr, context: &str) -> EvalResult<bool> {
        match self.evaluate(cond)? {
            Value::Bool(b) => Ok(b),
            other => Err(type_mismatch(context, other.kind())),
        }
    }

    fn define_subroutine(&mut self, name: Name, body: &'a Block) -> EvalResult<Status> {
        if self.subroutines.contains_key(&name) {
            return Err(already_declared(self.interner.lookup(name)));
        }
        debug!(name = self.interner.lookup(name), "define subroutine");
        let scope = self.env.current();
        self.subroutines.insert(name, Subroutine { body, scope });
        Ok(Status::Ok)
    }

    /// Run a subroutine body in a frame whose parent is the frame the
    /// subroutine was defined in, so the caller's locals are not visible.
    /// `break` and `exit` pass through to the caller unchanged.
    #[tracing::instrument(level = "debug", skip_all, fields(name = self.interner.lookup(name)))]
    fn call_subroutine(&mut self, name: Name) -> EvalResult<Status> {
        let Some(&Subroutine { body, scope }) = self.subroutines.get(&name) else {
            return Err(undefined_subroutine(self.interner.lookup(name)));
        };
        self.check_recursion_limit()?;
        self.call_depth += 1;
        let result = self.scoped_in(scope).execute_stmts(body);
        self.call_depth -= 1;
        result
    }
}
