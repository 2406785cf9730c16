//! Expression evaluation. Operands are always evaluated left to right.

use silly_ir::Expr;
use silly_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::EvalResult;
use crate::{evaluate_binary, evaluate_unary, Value};

impl Interpreter<'_> {
    /// Evaluate an expression to a value.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(expr))
    }

    fn evaluate_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Int(n) => Ok(Value::Int(*n)),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Str(text) => Ok(Value::string(self.interner.lookup(*text), &mut self.heap)),
            Expr::Var(name) => self
                .env
                .lookup_value(*name)
                .map_err(|err| self.scope_error(err)),
            Expr::List(items) => {
                let values = items
                    .iter()
                    .map(|item| self.evaluate(item))
                    .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::list(values))
            }
            Expr::Unary { op, operand } => {
                let operand = self.evaluate(operand)?;
                evaluate_unary(&operand, *op, &self.heap)
            }
            Expr::Binary { op, left, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(left, right, *op, &mut self.heap)
            }
        }
    }
}
