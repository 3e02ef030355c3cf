//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use shapegen_compiler::{Dialect, Indirection};
use shapegen_core::utils::to_pascal_case;

use super::ColorChoice;
use crate::commands::pack::PackArgs;
use crate::commands::records::RecordsArgs;
use crate::commands::shapes::ShapesArgs;

/// Output format for shapes and records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct ShapesParams {
    pub grammar_path: PathBuf,
    pub dialect: Dialect,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl ShapesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: parse_grammar_path(m),
            dialect: parse_dialect(m),
            format: parse_format(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<ShapesParams> for ShapesArgs {
    fn from(p: ShapesParams) -> Self {
        // Never write escape codes into files
        let color = p.output.is_none() && p.color.should_colorize();
        Self {
            grammar_path: p.grammar_path,
            dialect: p.dialect,
            format: p.format,
            output: p.output,
            color,
        }
    }
}

pub struct RecordsParams {
    pub grammar_path: PathBuf,
    pub dialect: Dialect,
    pub reserved: Vec<String>,
    pub derive: Option<Vec<String>>,
    pub no_derive: bool,
    pub indirection: Indirection,
    pub no_header: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl RecordsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: parse_grammar_path(m),

            // Rendering
            dialect: parse_dialect(m),
            reserved: m
                .get_many::<String>("reserved")
                .map(|words| words.filter(|w| !w.is_empty()).cloned().collect())
                .unwrap_or_default(),
            derive: m
                .get_many::<String>("derive")
                .map(|traits| traits.filter(|t| !t.is_empty()).cloned().collect()),
            no_derive: m.get_flag("no_derive"),
            indirection: parse_indirection(m),
            no_header: m.get_flag("no_header"),

            // Output
            format: parse_format(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<RecordsParams> for RecordsArgs {
    fn from(p: RecordsParams) -> Self {
        let derives = if p.no_derive {
            Some(Vec::new())
        } else {
            p.derive
                .map(|traits| traits.iter().map(|t| to_pascal_case(t)).collect())
        };
        let color = p.output.is_none() && p.color.should_colorize();
        Self {
            grammar_path: p.grammar_path,
            dialect: p.dialect,
            reserved: p.reserved,
            derives,
            indirection: p.indirection,
            header: !p.no_header,
            format: p.format,
            output: p.output,
            color,
        }
    }
}

pub struct PackParams {
    pub grammar_path: PathBuf,
    pub output: PathBuf,
}

impl PackParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: parse_grammar_path(m),
            output: m
                .get_one::<PathBuf>("output")
                .cloned()
                .expect("clap requires --output"),
        }
    }
}

impl From<PackParams> for PackArgs {
    fn from(p: PackParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            output: p.output,
        }
    }
}

fn parse_grammar_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("grammar_path")
        .cloned()
        .expect("clap requires GRAMMAR")
}

fn parse_dialect(m: &ArgMatches) -> Dialect {
    m.get_one::<String>("dialect")
        .and_then(|name| Dialect::from_name(name))
        .unwrap_or_default()
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

fn parse_indirection(m: &ArgMatches) -> Indirection {
    match m.get_one::<String>("indirection").map(|s| s.as_str()) {
        Some("rc") => Indirection::Rc,
        Some("arc") => Indirection::Arc,
        _ => Indirection::Box,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
