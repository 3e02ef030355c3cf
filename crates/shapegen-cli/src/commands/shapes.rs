use std::path::PathBuf;

use shapegen_compiler::{Dialect, RenderConfig, TypeModel, emit_shapes};

use super::grammar_loader::load_grammar;
use super::{CliError, exit_on_error, write_output};
use crate::cli::OutputFormat;

pub struct ShapesArgs {
    pub grammar_path: PathBuf,
    pub dialect: Dialect,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: ShapesArgs) {
    exit_on_error(shapes(&args));
}

fn shapes(args: &ShapesArgs) -> Result<(), CliError> {
    let grammar = load_grammar(&args.grammar_path)?;
    let model = TypeModel::generate(&grammar);
    let output = render(&model, args)?;
    write_output(args.output.as_deref(), output.as_bytes())
}

pub(crate) fn render(model: &TypeModel, args: &ShapesArgs) -> Result<String, CliError> {
    match args.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(model)? + "\n"),
        OutputFormat::Text => {
            let config = RenderConfig::new()
                .dialect(args.dialect)
                .colored(args.color);
            Ok(emit_shapes(model, config))
        }
    }
}
