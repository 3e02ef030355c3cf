use std::path::PathBuf;

use super::grammar_loader::load_grammar;
use super::{CliError, exit_on_error, write_output};

pub struct PackArgs {
    pub grammar_path: PathBuf,
    pub output: PathBuf,
}

pub fn run(args: PackArgs) {
    exit_on_error(pack(&args));
}

pub(crate) fn pack(args: &PackArgs) -> Result<(), CliError> {
    let grammar = load_grammar(&args.grammar_path)?;
    let bytes = grammar.to_binary().map_err(|source| CliError::Grammar {
        name: grammar.name.clone(),
        source,
    })?;
    write_output(Some(&args.output), &bytes)?;

    tracing::debug!(
        bytes = bytes.len(),
        output = %args.output.display(),
        "packed grammar"
    );
    Ok(())
}
