//! Expression parsing.
//!
//! ```text
//! expr := atom
//!       | '(' unaryOp expr ')'
//!       | '(' expr binaryOp expr ')'
//!       | '[' expr* ']'
//! atom := IDENTIFIER | INT_LITERAL | STR_LITERAL | BOOL_LITERAL
//! ```
//!
//! Every compound form is fully delimited, so there is no precedence to
//! resolve: the token after `(` alone decides unary versus binary.

use silly_ir::{Delim, Expr, Token, TokenKind};
use silly_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::error::{integer_out_of_range, unexpected_eof};
use crate::{ParseError, Parser};

const EXPECTED_EXPR: &str = "expression";

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.next_or_eof(EXPECTED_EXPR)?;
        match token.kind {
            TokenKind::Delim(Delim::LParen) => self.parse_parenthesized(),
            TokenKind::Delim(Delim::LBracket) => self.parse_list(),
            TokenKind::Ident => Ok(Expr::Var(token.text)),
            TokenKind::BoolLiteral(value) => Ok(Expr::Bool(value)),
            TokenKind::IntLiteral => self.parse_int(token),
            TokenKind::StrLiteral => Ok(self.parse_str(token)),
            _ => Err(self.cursor.unexpected(token, EXPECTED_EXPR)),
        }
    }

    /// After `(`: `unaryOp expr )` or `expr binaryOp expr )`.
    fn parse_parenthesized(&mut self) -> Result<Expr, ParseError> {
        let unary = match self.cursor.peek() {
            Some(Token {
                kind: TokenKind::UnaryOp(op),
                ..
            }) => Some(op),
            Some(_) => None,
            None => return Err(unexpected_eof(EXPECTED_EXPR)),
        };

        let expr = if let Some(op) = unary {
            self.cursor.advance();
            trace!(op = op.as_symbol(), "unary expression");
            let operand = self.parse_expr()?;
            Expr::unary(op, operand)
        } else {
            let left = self.parse_expr()?;
            let token = self.cursor.next_or_eof("binary operator")?;
            let TokenKind::BinaryOp(op) = token.kind else {
                return Err(self.cursor.unexpected(token, "binary operator"));
            };
            trace!(op = op.as_symbol(), "binary expression");
            let right = self.parse_expr()?;
            Expr::binary(op, left, right)
        };

        self.cursor.expect_delim(Delim::RParen)?;
        Ok(expr)
    }

    /// After `[`: elements up to the matching `]`.
    fn parse_list(&mut self) -> Result<Expr, ParseError> {
        let mut items = Vec::new();
        loop {
            match self.cursor.peek() {
                None => return Err(unexpected_eof("`]`")),
                Some(token) if token.is_delim(Delim::RBracket) => {
                    self.cursor.advance();
                    return Ok(Expr::List(items));
                }
                Some(_) => items.push(self.parse_expr()?),
            }
        }
    }

    fn parse_int(&self, token: Token) -> Result<Expr, ParseError> {
        let text = self.cursor.text(token);
        text.parse::<i64>()
            .map(Expr::Int)
            .map_err(|_| integer_out_of_range(text, token.span))
    }

    /// String literal text without its quotes.
    fn parse_str(&self, token: Token) -> Expr {
        let text = self.cursor.text(token);
        let contents = text
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(text);
        Expr::Str(self.cursor.interner().intern(contents))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
