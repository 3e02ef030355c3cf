//! Rendering of shapes and records into target syntax.
//!
//! Choices of more than two options render as right-nested binary sums
//! (`Sum<A, Sum<B, C>>`) in every dialect. Downstream consumers rely on the
//! nesting depth, so n-ary sums are never produced.

mod config;
mod keywords;


use std::collections::{HashMap, HashSet};

use shapegen_core::Colors;
use shapegen_core::utils::{to_pascal_case, to_snake_case};

pub use config::{Dialect, Indirection, RenderConfig};
pub use keywords::{Keywords, escape_ident};

use crate::record::Record;
use crate::shape::{ContainerKind, Shape};

/// Renders shapes and records for one configuration.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    config: RenderConfig,
    /// Rules whose references need indirection in the Rust dialect
    cyclic: HashSet<String>,
    /// Rule name to its disambiguated type name
    type_names: HashMap<String, String>,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            cyclic: HashSet::new(),
            type_names: HashMap::new(),
        }
    }

    /// Assign each rule a distinct type name, in the given order.
    ///
    /// Rules whose converted or escaped names collide with an earlier rule
    /// (`_statement` and `statement` in Rust) get a numeric suffix.
    pub fn with_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut used: HashSet<String> = self.type_names.values().cloned().collect();
        for rule in rules {
            let rule = rule.into();
            if self.type_names.contains_key(&rule) {
                continue;
            }
            let base = self.base_type_name(&rule);
            let name = claim(&mut used, &base, |n| self.escape(n));
            if name != self.escape(&base) {
                tracing::trace!(rule = %rule, type_name = %name, "renamed colliding type");
            }
            self.type_names.insert(rule, name);
        }
        self
    }

    /// Mark rules that reach themselves through references.
    pub fn with_cyclic<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cyclic.extend(rules.into_iter().map(Into::into));
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn c(&self) -> Colors {
        self.config.colors
    }

    fn dialect(&self) -> Dialect {
        self.config.dialect
    }

    /// Render a shape as a type expression.
    pub fn shape(&self, shape: &Shape) -> String {
        let mut out = String::new();
        self.write_shape(&mut out, shape);
        out
    }

    fn write_shape(&self, out: &mut String, shape: &Shape) {
        match shape {
            Shape::Empty => out.push_str(self.scalar()),
            Shape::Rule(name) => out.push_str(&self.rule_type(name)),
            Shape::Sequence(parts) => self.write_tuple(out, parts),
            Shape::Choice(options) => self.write_sum(out, options),
            Shape::Container { kind, inner } => {
                out.push_str(self.container_name(*kind));
                out.push_str(self.open());
                self.write_shape(out, inner);
                out.push_str(self.close());
            }
        }
    }

    fn write_tuple(&self, out: &mut String, parts: &[Shape]) {
        let (open, close) = match self.dialect() {
            Dialect::Scala => ("( ", " )"),
            Dialect::Generic | Dialect::Rust => ("(", ")"),
        };
        out.push_str(open);
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_shape(out, part);
        }
        out.push_str(close);
    }

    /// Right-nested binary sum: `Sum<A, Sum<B, C>>`.
    fn write_sum(&self, out: &mut String, options: &[Shape]) {
        let Some((last, init)) = options.split_last() else {
            out.push_str(self.scalar());
            return;
        };
        let sep = match self.dialect() {
            Dialect::Scala => ",",
            Dialect::Generic | Dialect::Rust => ", ",
        };
        for option in init {
            out.push_str(self.sum_name());
            out.push_str(self.open());
            self.write_shape(out, option);
            out.push_str(sep);
        }
        self.write_shape(out, last);
        for _ in init {
            out.push_str(self.close());
        }
    }

    fn scalar(&self) -> &'static str {
        "String"
    }

    fn sum_name(&self) -> &'static str {
        match self.dialect() {
            Dialect::Generic => "Sum",
            Dialect::Scala | Dialect::Rust => "Either",
        }
    }

    fn container_name(&self, kind: ContainerKind) -> &'static str {
        match (self.dialect(), kind) {
            (Dialect::Rust, ContainerKind::List | ContainerKind::NonEmptyList) => "Vec",
            (Dialect::Rust | Dialect::Scala, ContainerKind::Optional) => "Option",
            (Dialect::Generic, ContainerKind::Optional) => "Optional",
            (_, ContainerKind::List) => "List",
            (_, ContainerKind::NonEmptyList) => "NonEmptyList",
        }
    }

    fn open(&self) -> &'static str {
        match self.dialect() {
            Dialect::Scala => "[",
            Dialect::Generic | Dialect::Rust => "<",
        }
    }

    fn close(&self) -> &'static str {
        match self.dialect() {
            Dialect::Scala => "]",
            Dialect::Generic | Dialect::Rust => ">",
        }
    }

    fn escape(&self, ident: &str) -> String {
        escape_ident(self.dialect(), &self.config.keywords, ident)
    }

    fn base_type_name(&self, rule: &str) -> String {
        match self.dialect() {
            Dialect::Rust => to_pascal_case(rule),
            Dialect::Generic | Dialect::Scala => rule.to_string(),
        }
    }

    fn base_field_name(&self, field: &str) -> String {
        match self.dialect() {
            Dialect::Rust => to_snake_case(field),
            Dialect::Generic | Dialect::Scala => field.to_string(),
        }
    }

    /// Type name of a rule's record.
    pub fn type_name(&self, rule: &str) -> String {
        match self.type_names.get(rule) {
            Some(name) => name.clone(),
            None => self.escape(&self.base_type_name(rule)),
        }
    }

    /// Field identifiers of `record` in order, distinct after case
    /// conversion and escaping.
    pub fn field_names(&self, record: &Record) -> Vec<String> {
        let mut used = HashSet::new();
        record
            .field_names()
            .map(|field| claim(&mut used, &self.base_field_name(field), |n| self.escape(n)))
            .collect()
    }

    fn rule_type(&self, rule: &str) -> String {
        let name = self.type_name(rule);
        if self.dialect() == Dialect::Rust && self.cyclic.contains(rule) {
            self.config.indirection.wrap(&name)
        } else {
            name
        }
    }

    /// Render a record declaration.
    pub fn record(&self, record: &Record) -> String {
        match self.dialect() {
            Dialect::Generic => self.inline_record(record, "record", ""),
            Dialect::Scala => self.inline_record(record, "case class", " "),
            Dialect::Rust => self.rust_struct(record),
        }
    }

    /// `keyword name(field: Type, ...)` on one line.
    fn inline_record(&self, record: &Record, keyword: &str, gap: &str) -> String {
        let c = self.c();
        let fields: Vec<String> = self
            .field_names(record)
            .iter()
            .zip(record.fields.values())
            .map(|(field, shape)| format!("{field}: {}", self.shape(shape)))
            .collect();
        format!(
            "{} {}{gap}({})",
            c.keyword(keyword),
            c.name(&self.type_name(&record.name)),
            fields.join(", ")
        )
    }

    fn rust_struct(&self, record: &Record) -> String {
        let c = self.c();
        let mut out = String::new();
        if !self.config.derives.is_empty() {
            let attr = format!("#[derive({})]", self.config.derives.join(", "));
            out.push_str(&c.dim(&attr));
            out.push('\n');
        }
        out.push_str(&format!(
            "{} {} {{\n",
            c.keyword("pub struct"),
            c.name(&self.type_name(&record.name))
        ));
        for (field, shape) in self.field_names(record).iter().zip(record.fields.values()) {
            out.push_str(&format!(
                "    {} {field}: {},\n",
                c.keyword("pub"),
                self.shape(shape)
            ));
        }
        out.push('}');
        out
    }
}

/// Claim `render(base)`, or the first free `render(base{n})` counting from 1.
fn claim(used: &mut HashSet<String>, base: &str, render: impl Fn(&str) -> String) -> String {
    let mut candidate = render(base);
    let mut n = 1;
    while used.contains(&candidate) {
        candidate = render(&format!("{base}{n}"));
        n += 1;
    }
    used.insert(candidate.clone());
    candidate
}
