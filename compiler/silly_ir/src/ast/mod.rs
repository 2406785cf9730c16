//! Syntax tree for SILLY programs.
//!
//! Built once by the parser and never mutated afterwards: loops re-execute
//! the same nodes, and all runtime state lives in the interpreter.

mod display;
mod operators;

pub use display::{DisplayExpr, DisplayProgram, DisplayStmt};
pub use operators::{BinaryOp, UnaryOp};

use crate::Name;

/// Expression node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal: `42`, `-7`.
    Int(i64),
    /// Boolean literal: `true`, `false`.
    Bool(bool),
    /// String literal contents, without the surrounding quotes.
    Str(Name),
    /// Variable reference.
    Var(Name),
    /// List literal: `[e1 e2 ...]`.
    List(Vec<Expr>),
    /// `(op operand)`
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// `(left op right)`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// A statement body. Each execution runs in its own scope frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Block { stmts }
    }
}

/// One `cond then body` arm of an `if` statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfBranch {
    pub cond: Expr,
    pub body: Block,
}

/// Statement node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    /// `name gets value`
    Assign { name: Name, value: Expr },
    /// `var name gets value`
    VarDecl { name: Name, value: Expr },
    /// `print value`
    Print(Expr),
    /// `if c1 then ... elseif c2 then ... else ... endif`
    If {
        branches: Vec<IfBranch>,
        else_body: Option<Block>,
    },
    /// `while cond do ... endwhile`
    While { cond: Expr, body: Block },
    /// `repeat count times ... endrepeat`
    Repeat { count: Expr, body: Block },
    /// `sub name ... endsub`
    Sub { name: Name, body: Block },
    /// `call name`
    Call { name: Name },
    Exit,
    Break,
}

/// A whole program: top-level statements run in the global frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}
