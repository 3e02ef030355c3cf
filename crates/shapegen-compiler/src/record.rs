//! Named records: a rule's shape with named fields.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use serde::Serialize;

use crate::shape::Shape;

/// A rule's product type with uniquely named, ordered fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: String,
    pub fields: IndexMap<String, Shape>,
}

impl Record {
    pub fn field(&self, name: &str) -> Option<&Shape> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// Build the record for rule `name` with synthesized `shape`.
///
/// A sequence contributes one field per part, left to right. Any other shape
/// is a single field holding the whole shape.
pub fn build_record(name: &str, shape: &Shape) -> Record {
    let mut namer = FieldNamer::default();
    let mut fields = IndexMap::new();

    match shape {
        Shape::Sequence(parts) => {
            for part in parts {
                fields.insert(namer.assign(name, part), part.clone());
            }
        }
        other => {
            fields.insert(namer.assign(name, other), other.clone());
        }
    }

    Record {
        name: name.to_string(),
        fields,
    }
}

/// Name a field holding `shape` before collision handling.
///
/// Containers are named after what they hold; sequences and choices get a
/// placeholder.
pub fn field_base_name(shape: &Shape) -> &str {
    match shape {
        Shape::Empty => "value",
        Shape::Rule(name) => name,
        Shape::Container { inner, .. } => field_base_name(inner),
        Shape::Sequence(_) | Shape::Choice(_) => "ast",
    }
}

/// Collision-safe field names within one record.
#[derive(Default)]
struct FieldNamer {
    used: HashSet<String>,
    /// Next suffix per base name.
    suffixes: HashMap<String, usize>,
}

impl FieldNamer {
    fn assign(&mut self, record: &str, shape: &Shape) -> String {
        let base = field_base_name(shape);
        let mut name = base.to_string();

        if self.used.contains(&name) {
            let next = self.suffixes.entry(base.to_string()).or_insert(1);
            loop {
                name = format!("{base}{next}");
                *next += 1;
                if !self.used.contains(&name) {
                    break;
                }
            }
            tracing::trace!(record, base, field = %name, "renamed colliding field");
        }

        self.used.insert(name.clone());
        name
    }
}
