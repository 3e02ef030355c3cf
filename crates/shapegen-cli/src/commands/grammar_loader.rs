use std::fs;
use std::io::{self, Read};
use std::path::Path;

use shapegen_core::Grammar;

use super::CliError;

/// Load a grammar from `grammar.json`, a packed `.bin` file, or `-` for stdin JSON.
pub fn load_grammar(path: &Path) -> Result<Grammar, CliError> {
    let grammar = if path.as_os_str() == "-" {
        load_stdin()?
    } else if path.extension().is_some_and(|ext| ext == "bin") {
        load_binary(path)?
    } else {
        load_json(path)?
    };

    tracing::debug!(
        grammar = %grammar.name,
        rules = grammar.rules.len(),
        source = %path.display(),
        "loaded grammar"
    );
    Ok(grammar)
}

fn load_stdin() -> Result<Grammar, CliError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(CliError::Stdin)?;
    parse_json("<stdin>", &buf)
}

fn load_json(path: &Path) -> Result<Grammar, CliError> {
    let content = fs::read_to_string(path).map_err(|source| read_error(path, source))?;
    parse_json(&path.display().to_string(), &content)
}

fn load_binary(path: &Path) -> Result<Grammar, CliError> {
    let bytes = fs::read(path).map_err(|source| read_error(path, source))?;
    Grammar::from_binary(&bytes).map_err(|source| CliError::Grammar {
        name: path.display().to_string(),
        source,
    })
}

pub(crate) fn parse_json(name: &str, json: &str) -> Result<Grammar, CliError> {
    Grammar::from_json(json).map_err(|source| CliError::Grammar {
        name: name.to_string(),
        source,
    })
}

fn read_error(path: &Path, source: io::Error) -> CliError {
    CliError::Read {
        path: path.to_path_buf(),
        source,
    }
}
