//! Parse errors.
//!
//! Every variant names the offending token text, or says that the input
//! ended. Parsing stops at the first error.

use silly_ir::Span;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected}, found `{found}` at {span}")]
    UnexpectedToken {
        found: String,
        expected: String,
        span: Span,
    },

    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: String },

    #[error("`{found}` at {span} does not begin a statement")]
    UnknownStatement { found: String, span: Span },

    #[error("integer literal `{text}` at {span} does not fit in 64 bits")]
    IntegerOutOfRange { text: String, span: Span },

    #[error("`sub` at {span} is inside a block; subroutines are defined at the top level")]
    NestedSubroutine { span: Span },
}

impl ParseError {
    /// Short category for logs.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "unexpected token",
            ParseError::UnexpectedEof { .. } => "unexpected end of input",
            ParseError::UnknownStatement { .. } => "unknown statement",
            ParseError::IntegerOutOfRange { .. } => "integer out of range",
            ParseError::NestedSubroutine { .. } => "nested subroutine",
        }
    }
}

#[cold]
pub(crate) fn unexpected_token(found: &str, expected: impl Into<String>, span: Span) -> ParseError {
    ParseError::UnexpectedToken {
        found: found.to_owned(),
        expected: expected.into(),
        span,
    }
}

#[cold]
pub(crate) fn unexpected_eof(expected: impl Into<String>) -> ParseError {
    ParseError::UnexpectedEof {
        expected: expected.into(),
    }
}

#[cold]
pub(crate) fn unknown_statement(found: &str, span: Span) -> ParseError {
    ParseError::UnknownStatement {
        found: found.to_owned(),
        span,
    }
}

#[cold]
pub(crate) fn integer_out_of_range(text: &str, span: Span) -> ParseError {
    ParseError::IntegerOutOfRange {
        text: text.to_owned(),
        span,
    }
}


#[cold]
pub(crate) fn nested_subroutine(span: Span) -> ParseError {
    ParseError::NestedSubroutine { span }
}

#[cfg(test)]
mod tests;
