//! Test helpers for building grammars and rendering their records.

use shapegen_core::{Grammar, GrammarNode, RuleDef};

use crate::emit::Emitter;
use crate::model::TypeModel;
use crate::render::RenderConfig;

/// Grammar from tree-sitter JSON.
pub fn grammar(json: &str) -> Grammar {
    Grammar::from_json(json).expect("test grammar should parse")
}

/// Rule whose alternatives are all present.
pub fn rule(alternatives: Vec<GrammarNode>) -> RuleDef {
    RuleDef::new(alternatives.into_iter().map(Some).collect())
}

/// Records of a JSON grammar rendered without a header.
pub fn records(json: &str, config: RenderConfig) -> String {
    let model = TypeModel::generate(&grammar(json));
    Emitter::new(&model, config.header(false)).emit()
}

/// Rule with one alternative referencing `target`.
pub fn ref_rule(target: &str) -> RuleDef {
    rule(vec![GrammarNode::alt(vec![GrammarNode::rule_ref(target)])])
}
