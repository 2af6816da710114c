//! # mdscribe
//!
//! Deterministic Markdown generation from a typed document model.
//!
//! A producer builds a [`Document`] out of sections and elements, optionally
//! locks it, and hands it to a [`MarkdownRenderer`]. The renderer walks the
//! tree in index order and emits Markdown spelled according to a
//! configurable [`Dialect`].
//!
//! ## Quick Start
//!
//! ```
//! use mdscribe::model::{Document, Header, Paragraph, Section};
//!
//! fn main() -> mdscribe::Result<()> {
//!     let mut section = Section::new();
//!     section.add_element(Header::new(1, "Hello")?)?;
//!     section.add_element(Paragraph::with_text("Rendered from a document model.")?)?;
//!
//!     let mut doc = Document::new();
//!     doc.add_section(section);
//!
//!     let markdown = mdscribe::to_markdown(&doc)?;
//!     assert_eq!(markdown, "# Hello\n\nRendered from a document model.\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Closed element set**: headers, paragraphs, styled text, links,
//!   images, lists, tables, code blocks, blockquotes, rules and anchors
//! - **Dialects**: emphasis, header, rule, fence and bullet spellings
//! - **Table layout**: padded GitHub pipe tables, ragged columns included
//! - **Locking**: published subtrees reject further mutation
//! - **Parallel building**: sections can be produced on a Rayon pool
//! - **JSON interchange**: documents serialize to and from JSON

pub mod error;
pub mod example;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use example::{ExampleSource, StaticExamples};
pub use model::{Document, Element, ElementKind, Section};
pub use render::{Dialect, JsonFormat, MarkdownRenderer, RenderOptions, RenderResult};

/// Render a document to Markdown with the default dialect.
///
/// # Example
///
/// ```
/// use mdscribe::model::{Document, Rule, Section};
///
/// let mut doc = Document::new();
/// doc.add_section(Section::with_elements([Rule::new()]).unwrap());
/// assert_eq!(mdscribe::to_markdown(&doc).unwrap(), "***\n");
/// ```
pub fn to_markdown(doc: &Document) -> Result<String> {
    render::to_markdown(doc, &RenderOptions::default())
}

/// Render a document to Markdown with custom options.
///
/// # Example
///
/// ```
/// use mdscribe::model::{Document, Header, Section};
/// use mdscribe::render::HeaderSyntax;
/// use mdscribe::{to_markdown_with_options, RenderOptions};
///
/// let mut doc = Document::new();
/// doc.add_section(Section::with_elements([Header::new(1, "bar").unwrap()]).unwrap());
///
/// let options = RenderOptions::new().with_header_syntax(HeaderSyntax::Setext);
/// assert_eq!(to_markdown_with_options(&doc, &options).unwrap(), "bar\n===\n");
/// ```
pub fn to_markdown_with_options(doc: &Document, options: &RenderOptions) -> Result<String> {
    render::to_markdown(doc, options)
}

/// Load a document from JSON and render it to Markdown.
pub fn markdown_from_json(json: &str, options: &RenderOptions) -> Result<String> {
    let doc = Document::from_json(json)?;
    render::to_markdown(&doc, options)
}

/// Serialize a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    render::to_json(doc, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Codeblock, Header, Paragraph};

    #[test]
    fn test_json_round_trip_renders_identically() {
        let mut doc = Document::new();
        doc.add_section(
            Section::with_elements([
                Element::from(Header::new(2, "Round trip").unwrap()),
                Element::from(Paragraph::with_text("body").unwrap()),
            ])
            .unwrap(),
        );

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        let from_json = markdown_from_json(&json, &RenderOptions::default()).unwrap();
        assert_eq!(from_json, to_markdown(&doc).unwrap());
    }

    #[test]
    fn test_markdown_from_invalid_json() {
        let result = markdown_from_json("{not json", &RenderOptions::default());
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_empty_document_renders_empty() {
        assert_eq!(to_markdown(&Document::new()).unwrap(), "");
    }

    #[test]
    fn test_render_error_discards_output() {
        let mut doc = Document::new();
        doc.add_section(
            Section::with_elements([
                Element::from(Header::new(1, "Before").unwrap()),
                Element::from(Codeblock::new("")),
            ])
            .unwrap(),
        );

        let err = to_markdown(&doc).unwrap_err();
        assert!(err.is_render_error());
    }
}
