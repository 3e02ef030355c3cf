//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Grammar input (positional).
pub fn grammar_path_arg() -> Arg {
    Arg::new("grammar_path")
        .value_name("GRAMMAR")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("grammar.json file, packed .bin grammar, or - for JSON on stdin")
}

/// Target dialect (-d/--dialect).
pub fn dialect_arg() -> Arg {
    Arg::new("dialect")
        .short('d')
        .long("dialect")
        .value_name("DIALECT")
        .default_value("generic")
        .value_parser(["generic", "scala", "rust"])
        .help("Target syntax for declarations")
}

/// Extra reserved words (--reserved).
pub fn reserved_arg() -> Arg {
    Arg::new("reserved")
        .long("reserved")
        .value_name("WORDS")
        .value_delimiter(',')
        .action(ArgAction::Append)
        .help("Additional reserved words to escape (comma-separated)")
}

/// Traits derived on Rust structs (--derive).
pub fn derive_arg() -> Arg {
    Arg::new("derive")
        .long("derive")
        .value_name("TRAITS")
        .value_delimiter(',')
        .action(ArgAction::Append)
        .help("Traits derived on Rust structs (default: debug,clone)")
}

/// Emit no derive attribute (--no-derive).
pub fn no_derive_arg() -> Arg {
    Arg::new("no_derive")
        .long("no-derive")
        .action(ArgAction::SetTrue)
        .conflicts_with("derive")
        .help("Don't derive any traits on Rust structs")
}

/// Indirection for cyclic Rust records (--indirection).
pub fn indirection_arg() -> Arg {
    Arg::new("indirection")
        .long("indirection")
        .value_name("KIND")
        .default_value("box")
        .value_parser(["box", "rc", "arc"])
        .help("Pointer used for cyclic references in Rust output")
}

/// Skip the header comment (--no-header).
pub fn no_header_arg() -> Arg {
    Arg::new("no_header")
        .long("no-header")
        .action(ArgAction::SetTrue)
        .help("Don't emit the header comment")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug, -vv for trace logs on stderr)")
}
