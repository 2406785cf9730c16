//! Command handlers for the `silly` CLI.
//!
//! Each handler returns its error instead of exiting, so `main` owns the
//! exit code and the error format.

mod debug;
mod run;

pub use debug::{lex_file, parse_file};
pub use run::run_file;
