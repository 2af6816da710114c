//! Rendering options and configuration.

use super::dialect::{
    CodeblockSyntax, Dialect, EmphasisSyntax, HeaderSyntax, ListSyntax, RuleSyntax,
};

/// Options for rendering a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Markdown spelling choices
    pub dialect: Dialect,

    /// Collect render statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set the emphasis markers.
    pub fn with_emphasis(mut self, syntax: EmphasisSyntax) -> Self {
        self.dialect.emphasis = syntax;
        self
    }

    /// Set the header style.
    pub fn with_header_syntax(mut self, syntax: HeaderSyntax) -> Self {
        self.dialect.header = syntax;
        self
    }

    /// Set the horizontal rule.
    pub fn with_rule(mut self, syntax: RuleSyntax) -> Self {
        self.dialect.rule = syntax;
        self
    }

    /// Set the code fence.
    pub fn with_codeblock(mut self, syntax: CodeblockSyntax) -> Self {
        self.dialect.codeblock = syntax;
        self
    }

    /// Set the unordered list bullet.
    pub fn with_list(mut self, syntax: ListSyntax) -> Self {
        self.dialect.list = syntax;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}
