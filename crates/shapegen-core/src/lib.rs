#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for shapegen.
//!
//! Holds the host grammar representation consumed by the type-shape engine:
//! rules, their alternatives, and the classified sub-tree nodes below them.
//! Grammars are loaded from tree-sitter `grammar.json` files or from the
//! compact binary form produced by [`Grammar::to_binary`].

pub mod colors;
pub mod grammar;
pub mod utils;


pub use colors::Colors;
pub use grammar::{Grammar, GrammarError, GrammarNode, NodeKind, RuleDef};
