//! Grammar type definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Classification of a grammar sub-tree node.
///
/// Anything the host cannot classify is `Other`; consumers treat it as
/// carrying no structural information.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Definition of a rule (text is the rule name).
    RuleDefinition,
    /// Reference to another rule by name (text is the referenced name).
    RuleRef,
    /// One parse path: an ordered list of sub-terms.
    Alternative,
    /// Grouping of alternative branches.
    Block,
    /// `(...)*`
    ZeroOrMore,
    /// `(...)+`
    OneOrMore,
    /// `(...)?`
    Optional,
    /// Literal or token match.
    Terminal,
    /// Unrecognized construct.
    Other,
}

/// A node of a rule's sub-tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarNode {
    kind: NodeKind,
    text: Option<String>,
    children: Vec<GrammarNode>,
}

impl GrammarNode {
    pub fn new(kind: NodeKind, text: Option<String>, children: Vec<GrammarNode>) -> Self {
        Self {
            kind,
            text,
            children,
        }
    }

    pub fn rule_def(name: impl Into<String>) -> Self {
        Self::new(NodeKind::RuleDefinition, Some(name.into()), Vec::new())
    }

    pub fn rule_ref(name: impl Into<String>) -> Self {
        Self::new(NodeKind::RuleRef, Some(name.into()), Vec::new())
    }

    pub fn alt(children: Vec<GrammarNode>) -> Self {
        Self::new(NodeKind::Alternative, None, children)
    }

    pub fn block(alternatives: Vec<GrammarNode>) -> Self {
        Self::new(NodeKind::Block, None, alternatives)
    }

    pub fn zero_or_more(children: Vec<GrammarNode>) -> Self {
        Self::new(NodeKind::ZeroOrMore, None, children)
    }

    pub fn one_or_more(children: Vec<GrammarNode>) -> Self {
        Self::new(NodeKind::OneOrMore, None, children)
    }

    pub fn optional(children: Vec<GrammarNode>) -> Self {
        Self::new(NodeKind::Optional, None, children)
    }

    pub fn terminal(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Terminal, Some(text.into()), Vec::new())
    }

    pub fn other(children: Vec<GrammarNode>) -> Self {
        Self::new(NodeKind::Other, None, children)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Rule name for `RuleDefinition`/`RuleRef`, literal text for terminals.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[GrammarNode] {
        &self.children
    }
}

/// A rule: its ordered alternatives.
///
/// A `None` entry is a null alternative and contributes nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDef {
    pub alternatives: Vec<Option<GrammarNode>>,
}

impl RuleDef {
    pub fn new(alternatives: Vec<Option<GrammarNode>>) -> Self {
        Self { alternatives }
    }

    /// Alternatives that are present, in declaration order.
    pub fn present_alternatives(&self) -> impl Iterator<Item = &GrammarNode> {
        self.alternatives.iter().flatten()
    }
}

/// Complete grammar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    /// Grammar name (e.g., "javascript", "rust").
    pub name: String,
    /// Rules, preserving declaration order.
    pub rules: IndexMap<String, RuleDef>,
}

impl Grammar {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: IndexMap::new(),
        }
    }

    /// Append a rule; redefining a name replaces the body in place.
    pub fn with_rule(mut self, name: impl Into<String>, rule: RuleDef) -> Self {
        self.rules.insert(name.into(), rule);
        self
    }

    pub fn rule(&self, name: &str) -> Option<&RuleDef> {
        self.rules.get(name)
    }
}
