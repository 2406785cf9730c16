//! Render the syntax tree back to canonical SILLY source.
//!
//! Names are interned, so every adapter borrows the interner that produced
//! the tree. Nested blocks are indented two spaces per level.

use std::fmt::{self, Write};

use super::{Block, Expr, Program, Stmt};
use crate::token::{Keyword, StmtKeyword};
use crate::StringInterner;

const INDENT: &str = "  ";

pub struct DisplayExpr<'a> {
    expr: &'a Expr,
    interner: &'a StringInterner,
}

pub struct DisplayStmt<'a> {
    stmt: &'a Stmt,
    interner: &'a StringInterner,
}

pub struct DisplayProgram<'a> {
    program: &'a Program,
    interner: &'a StringInterner,
}

impl Expr {
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> DisplayExpr<'a> {
        DisplayExpr {
            expr: self,
            interner,
        }
    }
}

impl Stmt {
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> DisplayStmt<'a> {
        DisplayStmt {
            stmt: self,
            interner,
        }
    }
}

impl Program {
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> DisplayProgram<'a> {
        DisplayProgram {
            program: self,
            interner,
        }
    }
}

impl fmt::Display for DisplayExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self.expr, self.interner)
    }
}

impl fmt::Display for DisplayStmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_stmt(f, self.stmt, self.interner, 0)
    }
}

impl fmt::Display for DisplayProgram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.program.stmts.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write_stmt(f, stmt, self.interner, 0)?;
        }
        Ok(())
    }
}

fn write_expr(f: &mut impl Write, expr: &Expr, interner: &StringInterner) -> fmt::Result {
    match expr {
        Expr::Int(n) => write!(f, "{n}"),
        Expr::Bool(b) => write!(f, "{b}"),
        Expr::Str(name) => write!(f, "\"{}\"", interner.lookup(*name)),
        Expr::Var(name) => f.write_str(interner.lookup(*name)),
        Expr::List(items) => {
            f.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                write_expr(f, item, interner)?;
            }
            f.write_char(']')
        }
        Expr::Unary { op, operand } => {
            write!(f, "({} ", op.as_symbol())?;
            write_expr(f, operand, interner)?;
            f.write_char(')')
        }
        Expr::Binary { op, left, right } => {
            f.write_char('(')?;
            write_expr(f, left, interner)?;
            write!(f, " {} ", op.as_symbol())?;
            write_expr(f, right, interner)?;
            f.write_char(')')
        }
    }
}

fn write_indent(f: &mut impl Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

fn write_block(
    f: &mut impl Write,
    block: &Block,
    interner: &StringInterner,
    depth: usize,
) -> fmt::Result {
    for stmt in &block.stmts {
        f.write_char('\n')?;
        write_stmt(f, stmt, interner, depth)?;
    }
    Ok(())
}

/// Writes a closing or separating keyword on its own line at `depth`.
fn write_keyword_line(f: &mut impl Write, keyword: Keyword, depth: usize) -> fmt::Result {
    f.write_char('\n')?;
    write_indent(f, depth)?;
    f.write_str(keyword.as_str())
}

fn write_stmt(
    f: &mut impl Write,
    stmt: &Stmt,
    interner: &StringInterner,
    depth: usize,
) -> fmt::Result {
    write_indent(f, depth)?;
    match stmt {
        Stmt::Assign { name, value } => {
            write!(f, "{} gets ", interner.lookup(*name))?;
            write_expr(f, value, interner)
        }
        Stmt::VarDecl { name, value } => {
            write!(f, "var {} gets ", interner.lookup(*name))?;
            write_expr(f, value, interner)
        }
        Stmt::Print(value) => {
            f.write_str("print ")?;
            write_expr(f, value, interner)
        }
        Stmt::If {
            branches,
            else_body,
        } => {
            for (i, branch) in branches.iter().enumerate() {
                if i == 0 {
                    f.write_str("if ")?;
                } else {
                    f.write_char('\n')?;
                    write_indent(f, depth)?;
                    f.write_str("elseif ")?;
                }
                write_expr(f, &branch.cond, interner)?;
                f.write_str(" then")?;
                write_block(f, &branch.body, interner, depth + 1)?;
            }
            if let Some(body) = else_body {
                write_keyword_line(f, Keyword::Else, depth)?;
                write_block(f, body, interner, depth + 1)?;
            }
            write_keyword_line(f, Keyword::Endif, depth)
        }
        Stmt::While { cond, body } => {
            f.write_str("while ")?;
            write_expr(f, cond, interner)?;
            f.write_str(" do")?;
            write_block(f, body, interner, depth + 1)?;
            write_keyword_line(f, Keyword::Endwhile, depth)
        }
        Stmt::Repeat { count, body } => {
            f.write_str("repeat ")?;
            write_expr(f, count, interner)?;
            f.write_str(" times")?;
            write_block(f, body, interner, depth + 1)?;
            write_keyword_line(f, Keyword::Endrepeat, depth)
        }
        Stmt::Sub { name, body } => {
            write!(f, "sub {}", interner.lookup(*name))?;
            write_block(f, body, interner, depth + 1)?;
            write_keyword_line(f, Keyword::Endsub, depth)
        }
        Stmt::Call { name } => write!(f, "call {}", interner.lookup(*name)),
        Stmt::Exit => f.write_str(StmtKeyword::Exit.as_str()),
        Stmt::Break => f.write_str(StmtKeyword::Break.as_str()),
    }
}
