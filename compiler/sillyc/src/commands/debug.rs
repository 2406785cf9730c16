//! Debug commands: `parse` and `lex` for inspecting the front end.

use std::path::Path;

use crate::{read_source, render_ast, render_tokens, SillyError};

/// Parse a file and print it back as canonical source.
pub fn parse_file(path: &str) -> Result<(), SillyError> {
    let source = read_source(Path::new(path))?;
    println!("{}", render_ast(&source)?);
    Ok(())
}

/// Lex a file and print the token stream.
pub fn lex_file(path: &str) -> Result<(), SillyError> {
    let source = read_source(Path::new(path))?;
    print!("{}", render_tokens(&source));
    Ok(())
}
