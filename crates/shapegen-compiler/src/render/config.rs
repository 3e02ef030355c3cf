//! Configuration types for declaration rendering.

use shapegen_core::Colors;

use super::Keywords;

/// Target syntax for rendered shapes and records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `Sum<A, B>`, `List<X>`, `record foo(a: A)`
    #[default]
    Generic,
    /// `Either[A,B]`, `List[X]`, `case class foo (a: A)`
    Scala,
    /// `Either<A, B>`, `Vec<X>`, `pub struct Foo { pub a: A }`
    Rust,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Generic, Dialect::Scala, Dialect::Rust];

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Generic => "generic",
            Dialect::Scala => "scala",
            Dialect::Rust => "rust",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }
}

/// How the Rust dialect breaks cycles between records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Indirection {
    #[default]
    Box,
    Rc,
    Arc,
}

impl Indirection {
    pub(crate) fn wrap(self, ty: &str) -> String {
        match self {
            Indirection::Box => format!("Box<{ty}>"),
            Indirection::Rc => format!("Rc<{ty}>"),
            Indirection::Arc => format!("Arc<{ty}>"),
        }
    }
}

/// Configuration for rendering and emission.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub(crate) dialect: Dialect,
    /// Reserved words escaped in identifiers
    pub(crate) keywords: Keywords,
    pub(crate) colors: Colors,
    /// Traits derived on Rust structs
    pub(crate) derives: Vec<String>,
    pub(crate) indirection: Indirection,
    /// Whether the emitter writes a header comment
    pub(crate) header: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            keywords: Keywords::default(),
            colors: Colors::OFF,
            derives: vec!["Debug".to_string(), "Clone".to_string()],
            indirection: Indirection::default(),
            header: true,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dialect; this also resets keywords to the dialect's reserved words.
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self.keywords = Keywords::for_dialect(dialect);
        self
    }

    /// Reserve additional words on top of the current keywords.
    pub fn reserve<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Replace the reserved-word set.
    pub fn keywords(mut self, keywords: Keywords) -> Self {
        self.keywords = keywords;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    /// Set the traits derived on Rust structs. An empty list emits no attribute.
    pub fn derives<I, S>(mut self, derives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.derives = derives.into_iter().map(Into::into).collect();
        self
    }

    pub fn indirection(mut self, value: Indirection) -> Self {
        self.indirection = value;
        self
    }

    /// Set whether the emitter writes a header comment.
    pub fn header(mut self, value: bool) -> Self {
        self.header = value;
        self
    }

    pub fn get_dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn get_keywords(&self) -> &Keywords {
        &self.keywords
    }
}
