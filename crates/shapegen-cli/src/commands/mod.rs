pub mod grammar_loader;
pub mod pack;
pub mod records;
pub mod shapes;

#[cfg(test)]
mod grammar_loader_tests;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use shapegen_core::GrammarError;

/// Failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("invalid grammar '{name}': {source}")]
    Grammar { name: String, source: GrammarError },
    #[error("failed to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to write output: {0}")]
    Stdout(#[source] io::Error),
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Report `result` and exit with status 1 on failure.
pub fn exit_on_error(result: Result<(), CliError>) {
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Write `bytes` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, bytes).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => io::stdout().write_all(bytes).map_err(CliError::Stdout),
    }
}
