//! Whole-grammar declaration emitter.

use crate::model::TypeModel;
use crate::render::{Dialect, RenderConfig, Renderer};

/// Emits record declarations for every rule of a model.
pub struct Emitter<'a> {
    model: &'a TypeModel,
    renderer: Renderer,
    header: bool,
    /// Grammar name shown in the header
    source: Option<String>,
    /// Output buffer
    output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(model: &'a TypeModel, config: RenderConfig) -> Self {
        let header = config.header;
        let renderer = if config.dialect == Dialect::Rust {
            Renderer::new(config).with_cyclic(model.cyclic_rules())
        } else {
            Renderer::new(config)
        };
        let renderer = renderer.with_rules(model.iter().map(|(rule, _)| rule));
        Self {
            model,
            renderer,
            header,
            source: None,
            output: String::new(),
        }
    }

    /// Name the grammar in the header comment.
    pub fn source(mut self, grammar: impl Into<String>) -> Self {
        self.source = Some(grammar.into());
        self
    }

    /// Emit declarations in rule order, separated by blank lines.
    pub fn emit(mut self) -> String {
        if self.header {
            self.emit_header();
        }

        let records = self.model.records();
        for (i, record) in records.iter().enumerate() {
            if i > 0 || self.header {
                self.output.push('\n');
            }
            let decl = self.renderer.record(record);
            self.output.push_str(&decl);
            self.output.push('\n');
        }

        tracing::debug!(
            dialect = self.renderer.config().dialect.name(),
            records = records.len(),
            "emitted declarations"
        );
        self.output
    }

    fn emit_header(&mut self) {
        let c = self.renderer.config().colors;
        let line = match &self.source {
            Some(grammar) => format!("// Generated by shapegen from grammar `{grammar}`."),
            None => "// Generated by shapegen.".to_string(),
        };
        self.output.push_str(&c.dim(&line));
        self.output.push('\n');
    }
}

/// One `rule = shape` line per rule, for inspecting the model.
pub fn emit_shapes(model: &TypeModel, config: RenderConfig) -> String {
    let renderer = Renderer::new(config).with_rules(model.iter().map(|(rule, _)| rule));
    let c = renderer.config().colors;
    let mut output = String::new();
    for (rule, shape) in model.iter() {
        output.push_str(&format!("{} = {}\n", c.name(rule), renderer.shape(shape)));
    }
    tracing::debug!(rules = model.len(), "emitted shapes");
    output
}
