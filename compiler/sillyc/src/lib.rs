//! SILLY driver library.
//!
//! Glues the phases together: read a file, lex, parse, and run. The `silly`
//! binary is a thin argument parser over these functions; the end-to-end
//! tests call them directly with a capturing print handler.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use silly_eval::{EvalError, InterpreterBuilder, SharedPrintHandler, Status, DEFAULT_MAX_CALL_DEPTH};
use silly_ir::{Program, StringInterner};
use silly_parse::ParseError;
use thiserror::Error;
use tracing::debug;

/// Any failure between reading a file and finishing its run.
#[derive(Debug, Error)]
pub enum SillyError {
    #[error("syntax error: {0}")]
    Syntax(#[from] ParseError),

    #[error("runtime error: {0}")]
    Runtime(#[from] EvalError),

    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Settings for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub max_call_depth: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

impl RunOptions {
    /// Apply one command-line flag. Returns `false` if the flag is not a run
    /// option or its value is invalid.
    pub fn apply_flag(&mut self, flag: &str) -> bool {
        if let Some(depth) = flag.strip_prefix("--max-depth=") {
            if let Ok(depth) = depth.parse() {
                self.max_call_depth = depth;
                return true;
            }
        }
        false
    }
}

pub fn read_source(path: &Path) -> Result<String, SillyError> {
    std::fs::read_to_string(path).map_err(|source| SillyError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a whole program.
pub fn parse_source(source: &str, interner: &StringInterner) -> Result<Program, SillyError> {
    Ok(silly_parse::parse(source, interner)?)
}

/// Parse and run a program, sending `print` output to `handler`.
pub fn run_source(
    source: &str,
    options: &RunOptions,
    handler: SharedPrintHandler,
) -> Result<Status, SillyError> {
    let interner = StringInterner::new();
    let program = parse_source(source, &interner)?;
    debug!(statements = program.stmts.len(), "running program");

    let mut interpreter = InterpreterBuilder::new(&interner)
        .print_handler(handler)
        .max_call_depth(options.max_call_depth)
        .build();
    let status = interpreter.run(&program)?;
    debug!(?status, "run finished");
    Ok(status)
}

/// Read and run a program file.
pub fn run_path(
    path: &Path,
    options: &RunOptions,
    handler: SharedPrintHandler,
) -> Result<Status, SillyError> {
    let source = read_source(path)?;
    run_source(&source, options, handler)
}

/// One line per token: kind, text, and span.
pub fn render_tokens(source: &str) -> String {
    let interner = StringInterner::new();
    let mut out = String::new();
    for token in silly_lexer::tokenize(source, &interner) {
        let _ = writeln!(
            out,
            "{:<18} {:<12} @ {}",
            token.kind.display_name(),
            interner.lookup(token.text),
            token.span
        );
    }
    out
}

/// Canonical source for a parsed program.
pub fn render_ast(source: &str) -> Result<String, SillyError> {
    let interner = StringInterner::new();
    let program = parse_source(source, &interner)?;
    Ok(program.display(&interner).to_string())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
