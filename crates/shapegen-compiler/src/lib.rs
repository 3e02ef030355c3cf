#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Type-shape synthesis for grammars.
//!
//! Pipeline:
//! 1. [`synth::synthesize`] turns a grammar sub-tree into a [`Shape`]
//! 2. [`TypeModel::generate`] does this for every rule of a [`Grammar`]
//! 3. [`record::build_record`] names the fields of each rule's shape
//! 4. [`Renderer`] and [`Emitter`] print shapes and records in a target dialect
//!
//! ```
//! use shapegen_compiler::{Emitter, RenderConfig, TypeModel};
//! use shapegen_core::{Grammar, GrammarNode, RuleDef};
//!
//! let grammar = Grammar::new("demo").with_rule(
//!     "foo",
//!     RuleDef::new(vec![Some(GrammarNode::alt(vec![GrammarNode::rule_ref("bar")]))]),
//! );
//! let model = TypeModel::generate(&grammar);
//! let out = Emitter::new(&model, RenderConfig::new().header(false)).emit();
//! assert_eq!(out, "record foo(bar: bar)\n");
//! ```
//!
//! [`Grammar`]: shapegen_core::Grammar

pub mod emit;
pub mod escape;
pub mod model;
pub mod record;
pub mod render;
pub mod shape;
pub mod synth;

#[cfg(test)]
mod emit_tests;
#[cfg(test)]
mod model_tests;
#[cfg(test)]
mod test_utils;

pub use emit::{Emitter, emit_shapes};
pub use escape::EscapeError;
pub use model::TypeModel;
pub use record::{Record, build_record};
pub use render::{Dialect, Indirection, Keywords, RenderConfig, Renderer};
pub use shape::{ContainerKind, Shape};
