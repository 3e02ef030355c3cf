//! ANSI color codes for declaration output.
//!
//! Three roles plus reset:
//! - Keyword: declaration keywords (`case class`, `pub struct`, `record`)
//! - Name: record and rule type names
//! - Dim: punctuation and field separators

/// ANSI color palette for rendered declarations.
///
/// Uses only standard 16-color ANSI codes so output reads in light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub keyword: &'static str,
    pub name: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        keyword: "\x1b[35m",
        name: "\x1b[34m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        keyword: "",
        name: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Wrap `text` in the keyword color.
    pub fn keyword(&self, text: &str) -> String {
        format!("{}{}{}", self.keyword, text, self.reset)
    }

    /// Wrap `text` in the name color.
    pub fn name(&self, text: &str) -> String {
        format!("{}{}{}", self.name, text, self.reset)
    }

    /// Wrap `text` in the dim color.
    pub fn dim(&self, text: &str) -> String {
        format!("{}{}{}", self.dim, text, self.reset)
    }
}
