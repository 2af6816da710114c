//! Rendering result with statistics.

use crate::model::ElementKind;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered Markdown
    pub content: String,

    /// Render statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Sections rendered
    pub section_count: u32,

    /// Headers rendered
    pub header_count: u32,

    /// Paragraphs rendered
    pub paragraph_count: u32,

    /// Tables rendered
    pub table_count: u32,

    /// Data rows rendered across all tables
    pub table_row_count: u32,

    /// Lists rendered, nested sublists included
    pub list_count: u32,

    /// List entries rendered
    pub list_entry_count: u32,

    /// Fenced code blocks rendered
    pub codeblock_count: u32,

    /// Images rendered
    pub image_count: u32,

    /// Links rendered outside table cells
    pub link_count: u32,

    /// Horizontal rules rendered
    pub rule_count: u32,

    /// HTML anchors rendered
    pub anchor_count: u32,

    /// Blockquotes rendered
    pub blockquote_count: u32,

    /// Whitespace-separated tokens in the output
    pub word_count: u32,

    /// Codepoints in the output
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one rendered node of the given kind.
    pub fn record(&mut self, kind: ElementKind) {
        let counter = match kind {
            ElementKind::Section => &mut self.section_count,
            ElementKind::Header => &mut self.header_count,
            ElementKind::Paragraph => &mut self.paragraph_count,
            ElementKind::Table => &mut self.table_count,
            ElementKind::Row => &mut self.table_row_count,
            ElementKind::List => &mut self.list_count,
            ElementKind::ListEntry => &mut self.list_entry_count,
            ElementKind::Codeblock => &mut self.codeblock_count,
            ElementKind::Image => &mut self.image_count,
            ElementKind::Link => &mut self.link_count,
            ElementKind::Rule => &mut self.rule_count,
            ElementKind::HtmlAnchor => &mut self.anchor_count,
            ElementKind::Blockquote => &mut self.blockquote_count,
            ElementKind::Text | ElementKind::Column => return,
        };
        *counter += 1;
    }

    /// Add word and character counts from rendered text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().count() as u32;
    }
}
