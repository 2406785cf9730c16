//! Recursive descent parser for SILLY.
//!
//! Pulls tokens lazily from the lexer with one token of lookahead and builds
//! the AST in a single pass. The first syntax error aborts the parse.

mod cursor;
mod error;
mod grammar;

pub use error::ParseError;

use cursor::Cursor;
use silly_ir::{Program, Stmt, StringInterner};
use tracing::debug;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Number of blocks currently open; zero at the top level.
    block_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(source, interner),
            block_depth: 0,
        }
    }

    /// True while unparsed tokens remain.
    pub fn has_next(&mut self) -> bool {
        !self.cursor.is_at_end()
    }

    /// Parse the next top-level statement, or `None` at end of input.
    pub fn next_statement(&mut self) -> Result<Option<Stmt>, ParseError> {
        if self.cursor.is_at_end() {
            return Ok(None);
        }
        self.parse_statement().map(Some)
    }

    /// Parse every remaining statement.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut stmts = Vec::new();
        while let Some(stmt) = self.next_statement()? {
            stmts.push(stmt);
        }
        debug!(statements = stmts.len(), "parsed program");
        Ok(Program { stmts })
    }
}

/// Parse a complete program.
pub fn parse(source: &str, interner: &StringInterner) -> Result<Program, ParseError> {
    Parser::new(source, interner).parse_program()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
