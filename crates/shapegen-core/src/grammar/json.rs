//! JSON deserialization for grammar.json files.
//!
//! Tree-sitter's grammar.json uses internally-tagged rules with a `type` field.
//! Rule bodies are lowered into the host tree on load:
//!
//! - top-level `CHOICE` (without `BLANK`) → one alternative per member
//! - `SEQ` → the children of an alternative (or a one-alternative block when nested)
//! - nested `CHOICE` → block, or optional block when a member is `BLANK`
//! - `REPEAT` / `REPEAT1` → zero-or-more / one-or-more block
//! - `SYMBOL` → rule reference; `STRING`, `PATTERN`, token rules → terminal
//! - `FIELD`, `ALIAS`, `PREC*`, `RESERVED` → transparent

use indexmap::IndexMap;
use serde::Deserialize;

use super::types::{Grammar, GrammarNode, NodeKind, RuleDef};

/// Error during grammar loading.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("binary decode error: {0}")]
    Binary(#[from] postcard::Error),
    #[error("not a packed shapegen grammar")]
    NotPacked,
    #[error("packed grammar format version {found}, expected {expected}")]
    Version { found: u8, expected: u8 },
}

impl Grammar {
    /// Parse grammar from tree-sitter JSON.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let raw: RawGrammar = serde_json::from_str(json)?;
        Ok(raw.into())
    }
}

/// Subset of tree-sitter's grammar.json that carries rule structure.
///
/// Extras, externals, precedences and conflicts are ignored.
#[derive(Debug, Deserialize)]
struct RawGrammar {
    name: String,
    rules: IndexMap<String, RawRule>,
}

impl From<RawGrammar> for Grammar {
    fn from(raw: RawGrammar) -> Self {
        // IndexMap preserves the file's definition order.
        Self {
            name: raw.name,
            rules: raw
                .rules
                .into_iter()
                .map(|(name, body)| (name, lower_rule(body)))
                .collect(),
        }
    }
}

/// Raw rule matching tree-sitter's JSON format.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
#[allow(clippy::upper_case_acronyms, non_camel_case_types)]
enum RawRule {
    BLANK,
    STRING {
        value: String,
    },
    PATTERN {
        value: String,
    },
    SYMBOL {
        name: String,
    },
    SEQ {
        members: Vec<RawRule>,
    },
    CHOICE {
        members: Vec<RawRule>,
    },
    REPEAT {
        content: Box<RawRule>,
    },
    REPEAT1 {
        content: Box<RawRule>,
    },
    FIELD {
        content: Box<RawRule>,
    },
    ALIAS {
        content: Box<RawRule>,
    },
    TOKEN {
        content: Box<RawRule>,
    },
    IMMEDIATE_TOKEN {
        content: Box<RawRule>,
    },
    PREC {
        content: Box<RawRule>,
    },
    PREC_LEFT {
        content: Box<RawRule>,
    },
    PREC_RIGHT {
        content: Box<RawRule>,
    },
    PREC_DYNAMIC {
        content: Box<RawRule>,
    },
    RESERVED {
        content: Box<RawRule>,
    },
}

impl RawRule {
    /// Strip wrappers that don't affect structure.
    fn unwrap_transparent(self) -> RawRule {
        let mut rule = self;
        loop {
            rule = match rule {
                RawRule::FIELD { content }
                | RawRule::ALIAS { content }
                | RawRule::PREC { content }
                | RawRule::PREC_LEFT { content }
                | RawRule::PREC_RIGHT { content }
                | RawRule::PREC_DYNAMIC { content }
                | RawRule::RESERVED { content } => *content,
                other => return other,
            };
        }
    }

    /// Text of a token body when it is a plain string or pattern.
    fn literal_text(&self) -> Option<String> {
        match self {
            RawRule::STRING { value } | RawRule::PATTERN { value } => Some(value.clone()),
            _ => None,
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, RawRule::BLANK)
    }
}

fn lower_rule(body: RawRule) -> RuleDef {
    match body.unwrap_transparent() {
        RawRule::CHOICE { members } if !members.iter().any(RawRule::is_blank) => {
            RuleDef::new(members.into_iter().map(|m| Some(lower_alt(m))).collect())
        }
        other => RuleDef::new(vec![Some(lower_alt(other))]),
    }
}

fn lower_alt(rule: RawRule) -> GrammarNode {
    match rule.unwrap_transparent() {
        RawRule::SEQ { members } => GrammarNode::alt(members.into_iter().map(lower_term).collect()),
        other => GrammarNode::alt(vec![lower_term(other)]),
    }
}

/// Container children are a single block, mirroring `( ... )*` grouping.
fn lower_group(content: RawRule) -> Vec<GrammarNode> {
    vec![GrammarNode::block(vec![lower_alt(content)])]
}

fn lower_term(rule: RawRule) -> GrammarNode {
    match rule {
        RawRule::BLANK => GrammarNode::other(Vec::new()),
        RawRule::STRING { value } | RawRule::PATTERN { value } => GrammarNode::terminal(value),
        RawRule::TOKEN { content } | RawRule::IMMEDIATE_TOKEN { content } => {
            GrammarNode::new(NodeKind::Terminal, content.literal_text(), Vec::new())
        }
        RawRule::SYMBOL { name } => GrammarNode::rule_ref(name),
        RawRule::SEQ { members } => GrammarNode::block(vec![GrammarNode::alt(
            members.into_iter().map(lower_term).collect(),
        )]),
        RawRule::CHOICE { members } => {
            let has_blank = members.iter().any(RawRule::is_blank);
            let alternatives: Vec<GrammarNode> = members
                .into_iter()
                .filter(|m| !m.is_blank())
                .map(lower_alt)
                .collect();
            let block = GrammarNode::block(alternatives);
            if has_blank {
                GrammarNode::optional(vec![block])
            } else {
                block
            }
        }
        RawRule::REPEAT { content } => GrammarNode::zero_or_more(lower_group(*content)),
        RawRule::REPEAT1 { content } => GrammarNode::one_or_more(lower_group(*content)),
        RawRule::FIELD { content }
        | RawRule::ALIAS { content }
        | RawRule::PREC { content }
        | RawRule::PREC_LEFT { content }
        | RawRule::PREC_RIGHT { content }
        | RawRule::PREC_DYNAMIC { content }
        | RawRule::RESERVED { content } => lower_term(*content),
    }
}
