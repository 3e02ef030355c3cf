//! Host grammar representation.
//!
//! A [`Grammar`] maps rule names to [`RuleDef`]s in declaration order. Each
//! rule holds an ordered list of alternatives, and each alternative is the
//! root of a [`GrammarNode`] sub-tree classified by [`NodeKind`].
//!
//! Grammars come from tree-sitter `grammar.json` files (see [`Grammar::from_json`])
//! or from the compact binary form (see [`Grammar::from_binary`]).

mod binary;
mod json;
mod types;


pub use json::GrammarError;
pub use types::{Grammar, GrammarNode, NodeKind, RuleDef};
