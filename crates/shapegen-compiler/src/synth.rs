//! Shape synthesis: grammar sub-tree to [`Shape`].
//!
//! Children are synthesized first, then combined through the normalizing
//! constructors on [`Shape`]. Terminals and unrecognized constructs carry no
//! structural information and become [`Shape::Empty`].

use shapegen_core::{GrammarNode, NodeKind};

use crate::shape::{ContainerKind, Shape};

/// Synthesize the shape of one grammar sub-tree.
pub fn synthesize(node: &GrammarNode) -> Shape {
    match node.kind() {
        NodeKind::RuleDefinition | NodeKind::RuleRef => match node.text() {
            Some(name) => Shape::rule(name),
            None => Shape::Empty,
        },
        NodeKind::Alternative => Shape::sequence(synthesize_children(node)),
        NodeKind::Block => Shape::choice(synthesize_children(node)),
        NodeKind::ZeroOrMore => wrap(ContainerKind::List, node),
        NodeKind::OneOrMore => wrap(ContainerKind::NonEmptyList, node),
        NodeKind::Optional => wrap(ContainerKind::Optional, node),
        NodeKind::Terminal | NodeKind::Other => Shape::Empty,
    }
}

fn synthesize_children(node: &GrammarNode) -> impl Iterator<Item = Shape> + '_ {
    node.children().iter().map(synthesize)
}

fn wrap(kind: ContainerKind, node: &GrammarNode) -> Shape {
    Shape::container(kind, Shape::sequence(synthesize_children(node)))
}
