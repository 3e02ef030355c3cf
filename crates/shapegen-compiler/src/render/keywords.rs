//! Reserved words per dialect and identifier escaping.

use std::collections::BTreeSet;

use super::Dialect;

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while",
];

const SCALA_KEYWORDS: &[&str] = &[
    "def", "forSome", "implicit", "lazy", "match", "object", "override", "sealed", "trait", "type",
    "val", "var", "with", "yield",
];

/// Names the generated parser itself defines.
const SCALA_PARSER_NAMES: &[&str] = &["rule", "parserRule"];

const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use", "where",
    "while", "async", "await", "dyn", "abstract", "become", "box", "do", "final", "gen", "macro",
    "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const RUST_NON_RAW: &[&str] = &["crate", "self", "Self", "super"];

/// Set of words that must not appear verbatim as identifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keywords {
    words: BTreeSet<String>,
}

impl Keywords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserved words of `dialect`. The generic dialect reserves nothing.
    pub fn for_dialect(dialect: Dialect) -> Self {
        let lists: &[&[&str]] = match dialect {
            Dialect::Generic => &[],
            Dialect::Scala => &[JAVA_KEYWORDS, SCALA_KEYWORDS, SCALA_PARSER_NAMES],
            Dialect::Rust => &[RUST_KEYWORDS],
        };
        lists.iter().flat_map(|list| list.iter().copied()).collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Extend<String> for Keywords {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.words.extend(iter);
    }
}

impl<'a> FromIterator<&'a str> for Keywords {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Escape `ident` for `dialect` when it is reserved.
pub fn escape_ident(dialect: Dialect, keywords: &Keywords, ident: &str) -> String {
    if !keywords.contains(ident) {
        return ident.to_string();
    }
    match dialect {
        Dialect::Scala => format!("`{ident}`"),
        Dialect::Rust if !RUST_NON_RAW.contains(&ident) && is_plain_ident(ident) => {
            format!("r#{ident}")
        }
        Dialect::Rust | Dialect::Generic => format!("{ident}_"),
    }
}

/// Raw identifiers only accept identifier characters.
fn is_plain_ident(ident: &str) -> bool {
    let mut chars = ident.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
