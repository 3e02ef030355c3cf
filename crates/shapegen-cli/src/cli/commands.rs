//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("shapegen")
        .about("Derive record type declarations from grammar rule structure")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(shapes_command())
        .subcommand(records_command())
        .subcommand(pack_command())
}

/// Print the synthesized shape of every rule.
pub fn shapes_command() -> Command {
    Command::new("shapes")
        .about("Show the type shape of each rule")
        .after_help(
            r#"EXAMPLES:
  shapegen shapes grammar.json                # rule = shape, generic syntax
  shapegen shapes grammar.json -d scala       # Scala type syntax
  shapegen shapes grammar.json --format json  # machine-readable model
  cat grammar.json | shapegen shapes -        # grammar from stdin"#,
        )
        .arg(grammar_path_arg())
        .arg(dialect_arg())
        .arg(format_arg())
        .arg(output_file_arg())
        .arg(color_arg())
}

/// Emit record declarations.
pub fn records_command() -> Command {
    Command::new("records")
        .about("Emit a record declaration for each rule")
        .after_help(
            r#"EXAMPLES:
  shapegen records grammar.json                       # generic records
  shapegen records grammar.json -d scala              # case classes
  shapegen records grammar.json -d rust -o types.rs   # Rust structs to file
  shapegen records grammar.json -d rust --derive debug,partial_eq
  shapegen records grammar.json --reserved node,span  # escape extra words"#,
        )
        .arg(grammar_path_arg())
        .arg(dialect_arg())
        .arg(reserved_arg())
        .arg(derive_arg())
        .arg(no_derive_arg())
        .arg(indirection_arg())
        .arg(no_header_arg())
        .arg(format_arg())
        .arg(output_file_arg())
        .arg(color_arg())
}

/// Lower a grammar and store it in binary form.
pub fn pack_command() -> Command {
    Command::new("pack")
        .about("Write a grammar in compact binary form")
        .after_help(
            r#"EXAMPLES:
  shapegen pack grammar.json -o grammar.bin
  shapegen records grammar.bin -d rust       # reuse the packed grammar"#,
        )
        .arg(grammar_path_arg())
        .arg(output_file_arg().required(true))
}
