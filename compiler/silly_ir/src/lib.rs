//! SILLY IR - token and syntax tree types shared by every phase.
//!
//! - Spans for source locations
//! - Names for interned identifiers and literal text
//! - Tokens and their text-derived classification
//! - AST nodes (`Expr`, `Stmt`, `Block`, `Program`)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: token text → `Name(u32)`, so token equality is
//!   text equality at the cost of one integer compare.
//! - **Closed Sums**: the expression and statement sets never grow at runtime,
//!   so both are plain enums matched exhaustively by the evaluator.

pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{BinaryOp, Block, Expr, IfBranch, Program, Stmt, UnaryOp};
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
pub use token::{Delim, Keyword, StmtKeyword, Token, TokenKind};
