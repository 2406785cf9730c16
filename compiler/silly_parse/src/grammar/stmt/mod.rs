//! Statement parsing.
//!
//! A statement keyword selects its parser through [`STATEMENT_PARSERS`]; an
//! identifier starts an assignment; anything else is an error.

use silly_ir::{Block, IfBranch, Keyword, Stmt, StmtKeyword, TokenKind};
use silly_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::error::{nested_subroutine, unexpected_eof, unknown_statement};
use crate::{ParseError, Parser};

type StatementParser = fn(&mut Parser<'_>) -> Result<Stmt, ParseError>;

/// Statement parsers in [`StmtKeyword::ALL`] order, indexed by
/// [`StmtKeyword::index`].
///
/// Each parser is entered with its keyword still unconsumed.
const STATEMENT_PARSERS: [StatementParser; StmtKeyword::ALL.len()] = [
    parse_var_decl, // var
    parse_print,    // print
    parse_if,       // if
    parse_while,    // while
    parse_repeat,   // repeat
    parse_sub,      // sub
    parse_call,     // call
    parse_exit,     // exit
    parse_break,    // break
];

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<Stmt, ParseError> {
        let Some(token) = self.cursor.peek() else {
            return Err(unexpected_eof("statement"));
        };
        let stmt = match token.kind {
            TokenKind::Statement(keyword) => {
                STATEMENT_PARSERS[keyword.index()](self)?
            }
            TokenKind::Ident => parse_assignment(self)?,
            _ => return Err(unknown_statement(self.cursor.text(token), token.span)),
        };
        debug!(
            statement = self.cursor.text(token),
            start = token.span.start,
            "parsed statement"
        );
        Ok(stmt)
    }

    /// Parse statements until one of `terminators`, consuming it.
    ///
    /// Returns the block and the terminator that ended it.
    fn parse_block(&mut self, terminators: &[Keyword]) -> Result<(Block, Keyword), ParseError> {
        self.block_depth += 1;
        let result = self.parse_block_inner(terminators);
        self.block_depth -= 1;
        result
    }

    fn parse_block_inner(
        &mut self,
        terminators: &[Keyword],
    ) -> Result<(Block, Keyword), ParseError> {
        let mut stmts = Vec::new();
        loop {
            let Some(token) = self.cursor.peek() else {
                return Err(unexpected_eof(describe(terminators)));
            };
            if let TokenKind::Keyword(keyword) = token.kind {
                if terminators.contains(&keyword) {
                    self.cursor.advance();
                    return Ok((Block::new(stmts), keyword));
                }
            }
            stmts.push(self.parse_statement()?);
        }
    }
}

/// "`a`", "`a` or `b`", "`a`, `b`, or `c`".
fn describe(keywords: &[Keyword]) -> String {
    let quoted: Vec<String> = keywords
        .iter()
        .map(|kw| format!("`{}`", kw.as_str()))
        .collect();
    match quoted.as_slice() {
        [] => String::new(),
        [one] => one.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

fn parse_assignment(p: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    let name = p.cursor.expect_ident()?;
    p.cursor.expect_keyword(Keyword::Gets)?;
    let value = p.parse_expr()?;
    Ok(Stmt::Assign { name, value })
}

fn parse_var_decl(p: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    p.cursor.advance();
    let name = p.cursor.expect_ident()?;
    p.cursor.expect_keyword(Keyword::Gets)?;
    let value = p.parse_expr()?;
    Ok(Stmt::VarDecl { name, value })
}

fn parse_print(p: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    p.cursor.advance();
    Ok(Stmt::Print(p.parse_expr()?))
}

fn parse_if(p: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    const AFTER_BRANCH: [Keyword; 3] = [Keyword::Elseif, Keyword::Else, Keyword::Endif];

    p.cursor.advance();
    let mut branches = Vec::new();
    loop {
        let cond = p.parse_expr()?;
        p.cursor.expect_keyword(Keyword::Then)?;
        let (body, terminator) = p.parse_block(&AFTER_BRANCH)?;
        branches.push(IfBranch { cond, body });
        match terminator {
            Keyword::Elseif => {}
            Keyword::Else => {
                let (else_body, _) = p.parse_block(&[Keyword::Endif])?;
                return Ok(Stmt::If {
                    branches,
                    else_body: Some(else_body),
                });
            }
            _ => {
                return Ok(Stmt::If {
                    branches,
                    else_body: None,
                })
            }
        }
    }
}

fn parse_while(p: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    p.cursor.advance();
    let cond = p.parse_expr()?;
    p.cursor.expect_keyword(Keyword::Do)?;
    let (body, _) = p.parse_block(&[Keyword::Endwhile])?;
    Ok(Stmt::While { cond, body })
}

fn parse_repeat(p: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    p.cursor.advance();
    let count = p.parse_expr()?;
    p.cursor.expect_keyword(Keyword::Times)?;
    let (body, _) = p.parse_block(&[Keyword::Endrepeat])?;
    Ok(Stmt::Repeat { count, body })
}

/// Only allowed at the top level, so every subroutine body is nested in the
/// global frame.
fn parse_sub(p: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    if let Some(keyword) = p.cursor.advance() {
        if p.block_depth > 0 {
            return Err(nested_subroutine(keyword.span));
        }
    }
    let name = p.cursor.expect_ident()?;
    let (body, _) = p.parse_block(&[Keyword::Endsub])?;
    Ok(Stmt::Sub { name, body })
}

fn parse_call(p: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    p.cursor.advance();
    let name = p.cursor.expect_ident()?;
    Ok(Stmt::Call { name })
}

fn parse_exit(p: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    p.cursor.advance();
    Ok(Stmt::Exit)
}

fn parse_break(p: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    p.cursor.advance();
    Ok(Stmt::Break)
}
