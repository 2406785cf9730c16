//! Token boundaries.
//!
//! Operator and delimiter characters always stand alone. A quoted literal runs
//! to its closing quote (or the end of the line when unclosed). Any other run
//! of characters extends until whitespace or an operator character.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub(crate) enum RawToken {
    #[token("(")]
    #[token(")")]
    #[token("[")]
    #[token("]")]
    Delim,

    #[token("!")]
    #[token("#")]
    #[token("&")]
    #[token("|")]
    #[token("+")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("^")]
    #[token("@")]
    #[token("=")]
    #[token("\\")]
    #[token(">")]
    #[token("<")]
    Operator,

    #[regex(r#""[^"\n]*"?"#)]
    Quoted,

    #[regex(r#"[^\s()\[\]!#&|+*/%^@=\\<>"][^\s()\[\]!#&|+*/%^@=\\<>]*"#)]
    Word,
}
