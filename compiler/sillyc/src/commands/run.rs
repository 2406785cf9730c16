//! The `run` command.

use std::path::Path;

use silly_eval::{stdout_handler, Status};
use tracing::info;

use crate::{run_path, RunOptions, SillyError};

/// Run a program file, printing to stdout.
pub fn run_file(path: &str, options: &RunOptions) -> Result<(), SillyError> {
    let status = run_path(Path::new(path), options, stdout_handler())?;
    if status != Status::Ok {
        info!(?status, path, "program ended early");
    }
    Ok(())
}
