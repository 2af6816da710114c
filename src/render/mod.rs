//! Rendering module for converting documents to Markdown and JSON.

mod dialect;
mod json;
mod markdown;
mod options;
mod result;
mod spacing;

pub use dialect::{
    CodeblockSyntax, Delimiter, Dialect, EmphasisSyntax, HeaderSyntax, ListSyntax, RuleSyntax,
};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats};
