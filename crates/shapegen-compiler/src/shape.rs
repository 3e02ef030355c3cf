//! Type-shape nodes.
//!
//! A [`Shape`] describes the structural type of the value produced by parsing
//! a grammar construct. Shapes are immutable values; the constructors
//! [`Shape::sequence`], [`Shape::choice`] and [`Shape::container`] normalize
//! at construction time:
//!
//! - `Empty` members are dropped from sequences and choices
//! - zero remaining members collapse to `Empty`, one member to the member itself
//! - a container around `Empty` is `Empty`
//!
//! Building `Sequence`/`Choice`/`Container` variants directly bypasses
//! normalization; the renderer still copes with such shapes.

use std::fmt;

use serde::Serialize;

/// Single-slot wrapper kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ContainerKind {
    /// Zero or more.
    List,
    /// One or more.
    NonEmptyList,
    /// Zero or one.
    Optional,
}

/// Structural type of a parsed construct.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Shape {
    /// No information (literal matches, unknown constructs).
    Empty,
    /// Unresolved link to another rule's record, by name.
    Rule(String),
    /// Ordered product of at least two parts.
    Sequence(Vec<Shape>),
    /// Ordered sum of at least two options.
    Choice(Vec<Shape>),
    /// Wrapped non-empty shape.
    Container {
        kind: ContainerKind,
        inner: Box<Shape>,
    },
}

impl Shape {
    pub fn rule(name: impl Into<String>) -> Self {
        Shape::Rule(name.into())
    }

    /// Product of `parts`, normalized.
    pub fn sequence(parts: impl IntoIterator<Item = Shape>) -> Self {
        match collect_non_empty(parts) {
            Collected::None => Shape::Empty,
            Collected::One(shape) => shape,
            Collected::Many(parts) => Shape::Sequence(parts),
        }
    }

    /// Sum of `options`, normalized.
    pub fn choice(options: impl IntoIterator<Item = Shape>) -> Self {
        match collect_non_empty(options) {
            Collected::None => Shape::Empty,
            Collected::One(shape) => shape,
            Collected::Many(options) => Shape::Choice(options),
        }
    }

    /// `kind` wrapped around `inner`; `Empty` when `inner` is `Empty`.
    pub fn container(kind: ContainerKind, inner: Shape) -> Self {
        if inner.is_empty() {
            return Shape::Empty;
        }
        Shape::Container {
            kind,
            inner: Box::new(inner),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Shape::Empty)
    }

    pub fn is_rule(&self) -> bool {
        matches!(self, Shape::Rule(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Shape::Sequence(_))
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, Shape::Choice(_))
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Shape::Container { .. })
    }

    pub fn rule_name(&self) -> Option<&str> {
        match self {
            Shape::Rule(name) => Some(name),
            _ => None,
        }
    }

    pub fn container_kind(&self) -> Option<ContainerKind> {
        match self {
            Shape::Container { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Wrapped shape of a container.
    pub fn inner(&self) -> Option<&Shape> {
        match self {
            Shape::Container { inner, .. } => Some(inner),
            _ => None,
        }
    }

    /// Parts of a sequence; empty for any other shape.
    pub fn parts(&self) -> &[Shape] {
        match self {
            Shape::Sequence(parts) => parts,
            _ => &[],
        }
    }

    /// Options of a choice; empty for any other shape.
    pub fn options(&self) -> &[Shape] {
        match self {
            Shape::Choice(options) => options,
            _ => &[],
        }
    }
}

enum Collected {
    None,
    One(Shape),
    Many(Vec<Shape>),
}

fn collect_non_empty(shapes: impl IntoIterator<Item = Shape>) -> Collected {
    let mut kept: Vec<Shape> = shapes.into_iter().filter(|s| !s.is_empty()).collect();
    match kept.len() {
        0 => Collected::None,
        1 => Collected::One(kept.remove(0)),
        _ => Collected::Many(kept),
    }
}

/// Generic-dialect rendering.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::Renderer::default().shape(self))
    }
}
