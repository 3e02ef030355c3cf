use std::path::PathBuf;

use shapegen_compiler::{Dialect, Emitter, Indirection, RenderConfig, TypeModel};
use shapegen_core::Grammar;

use super::grammar_loader::load_grammar;
use super::{CliError, exit_on_error, write_output};
use crate::cli::OutputFormat;

pub struct RecordsArgs {
    pub grammar_path: PathBuf,
    pub dialect: Dialect,
    pub reserved: Vec<String>,
    /// `None` keeps the default derives.
    pub derives: Option<Vec<String>>,
    pub indirection: Indirection,
    pub header: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: RecordsArgs) {
    exit_on_error(records(&args));
}

fn records(args: &RecordsArgs) -> Result<(), CliError> {
    let grammar = load_grammar(&args.grammar_path)?;
    let output = render(&grammar, args)?;
    write_output(args.output.as_deref(), output.as_bytes())
}

pub(crate) fn render(grammar: &Grammar, args: &RecordsArgs) -> Result<String, CliError> {
    let model = TypeModel::generate(grammar);

    if args.format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&model.records())? + "\n");
    }

    Ok(Emitter::new(&model, render_config(args))
        .source(&grammar.name)
        .emit())
}

fn render_config(args: &RecordsArgs) -> RenderConfig {
    let mut config = RenderConfig::new()
        .dialect(args.dialect)
        .reserve(args.reserved.iter().cloned())
        .indirection(args.indirection)
        .header(args.header)
        .colored(args.color);
    if let Some(derives) = &args.derives {
        config = config.derives(derives.iter().cloned());
    }
    config
}
