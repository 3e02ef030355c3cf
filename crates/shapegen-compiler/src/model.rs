//! Per-rule shape model of a whole grammar.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use shapegen_core::Grammar;

use crate::record::{Record, build_record};
use crate::shape::Shape;
use crate::synth::synthesize;

/// Rule name to synthesized shape, in grammar declaration order.
///
/// Rules without any present alternative are absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeModel {
    shapes: IndexMap<String, Shape>,
}

impl TypeModel {
    /// Synthesize the shape of every rule in `grammar`.
    ///
    /// A rule's shape is the normalized choice over its present alternatives.
    pub fn generate(grammar: &Grammar) -> Self {
        let mut shapes = IndexMap::with_capacity(grammar.rules.len());

        for (name, rule) in &grammar.rules {
            let mut alternatives = rule.present_alternatives().peekable();
            if alternatives.peek().is_none() {
                tracing::debug!(rule = %name, "skipping rule without alternatives");
                continue;
            }

            let shape = Shape::choice(alternatives.map(synthesize));
            tracing::trace!(rule = %name, shape = %shape, "synthesized");
            shapes.insert(name.clone(), shape);
        }

        tracing::debug!(
            grammar = %grammar.name,
            rules = grammar.rules.len(),
            shapes = shapes.len(),
            "generated type model"
        );
        Self { shapes }
    }

    pub fn get(&self, rule: &str) -> Option<&Shape> {
        self.shapes.get(rule)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Shape)> {
        self.shapes.iter().map(|(name, shape)| (name.as_str(), shape))
    }

    /// Rules that reach their own record through rule references.
    pub fn cyclic_rules(&self) -> IndexSet<&str> {
        self.shapes
            .keys()
            .map(String::as_str)
            .filter(|rule| self.reaches(rule, rule))
            .collect()
    }

    fn reaches(&self, from: &str, target: &str) -> bool {
        let mut visited = IndexSet::new();
        let mut stack = vec![from];
        while let Some(rule) = stack.pop() {
            let Some(shape) = self.shapes.get(rule) else {
                continue;
            };
            for next in references(shape) {
                if next == target {
                    return true;
                }
                if visited.insert(next) {
                    stack.push(next);
                }
            }
        }
        false
    }

    /// Named records for every rule, in declaration order.
    pub fn records(&self) -> Vec<Record> {
        self.iter()
            .map(|(name, shape)| build_record(name, shape))
            .collect()
    }
}

impl FromIterator<(String, Shape)> for TypeModel {
    fn from_iter<I: IntoIterator<Item = (String, Shape)>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}

/// Rule names referenced anywhere within `shape`.
fn references(shape: &Shape) -> Vec<&str> {
    let mut out = Vec::new();
    collect_references(shape, &mut out);
    out
}

fn collect_references<'a>(shape: &'a Shape, out: &mut Vec<&'a str>) {
    match shape {
        Shape::Empty => {}
        Shape::Rule(name) => out.push(name),
        Shape::Sequence(parts) | Shape::Choice(parts) => {
            for part in parts {
                collect_references(part, out);
            }
        }
        Shape::Container { inner, .. } => collect_references(inner, out),
    }
}
