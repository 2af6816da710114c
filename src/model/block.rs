//! Block-level element types.

use super::element::{append, normalize_all};
use super::{Element, Link, Text};
use crate::error::{Error, Result};
use crate::example::ExampleSource;
use serde::{Deserialize, Serialize};

/// A section heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default)]
    index: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    locked: bool,

    /// Heading level (1-6), not clamped
    level: u8,

    /// Heading text, a single line
    text: String,
}

impl_node!(Header, Header, leaf);

impl Header {
    /// Create a heading.
    ///
    /// The level is taken as given; the text must fit on one line.
    pub fn new(level: u8, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        check_single_line(&text, "header")?;
        Ok(Self {
            index: 0,
            locked: false,
            level,
            text,
        })
    }

    /// Get the heading level.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Get the heading text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the heading level.
    pub fn set_level(&mut self, level: u8) -> Result<()> {
        self.ensure_unlocked()?;
        self.level = level;
        Ok(())
    }

    /// Set the heading text.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.ensure_unlocked()?;
        let text = text.into();
        check_single_line(&text, "header")?;
        self.text = text;
        Ok(())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_single_line(&self.text, "header")
    }
}

/// Reject text that would break out of a single-line construct.
pub(crate) fn check_single_line(text: &str, what: &str) -> Result<()> {
    if text.contains(['\n', '\r']) {
        return Err(Error::Construction(format!(
            "{} text cannot contain line breaks: {:?}",
            what, text
        )));
    }
    Ok(())
}

/// Inline content terminated by a line break.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    index: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    locked: bool,

    /// Child elements, rendered in index order
    #[serde(default)]
    elements: Vec<Element>,
}

impl_node!(Paragraph, Paragraph);

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph holding one plain text run.
    pub fn with_text(text: impl Into<String>) -> Result<Self> {
        let mut p = Self::new();
        p.add_element(Text::new(text)?)?;
        Ok(p)
    }

    /// Append a child element.
    pub fn add_element(&mut self, element: impl Into<Element>) -> Result<()> {
        self.ensure_unlocked()?;
        append(&mut self.elements, element);
        Ok(())
    }

    /// Append a styled text run.
    pub fn add_text(&mut self, text: Text) -> Result<()> {
        self.add_element(text)
    }

    /// Append a link.
    pub fn add_link(&mut self, link: Link) -> Result<()> {
        self.add_element(link)
    }

    /// Get the child elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Get a child element for in-place population.
    pub fn element_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.elements.get_mut(index)
    }

    /// Check if the paragraph has no children.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Lock this paragraph and its children.
    pub fn lock(&mut self) {
        self.locked = true;
        self.elements.iter_mut().for_each(Element::lock);
    }

    pub(crate) fn normalize(&mut self) {
        normalize_all(&mut self.elements);
    }
}

/// Quoted content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blockquote {
    #[serde(default)]
    index: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    locked: bool,

    /// Quoted elements, rendered in index order
    #[serde(default)]
    elements: Vec<Element>,
}

impl_node!(Blockquote, Blockquote);

impl Blockquote {
    /// Create a new empty blockquote.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a quoted element.
    pub fn add_element(&mut self, element: impl Into<Element>) -> Result<()> {
        self.ensure_unlocked()?;
        append(&mut self.elements, element);
        Ok(())
    }

    /// Get the quoted elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Get a quoted element for in-place population.
    pub fn element_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.elements.get_mut(index)
    }

    /// Lock this blockquote and its children.
    pub fn lock(&mut self) {
        self.locked = true;
        self.elements.iter_mut().for_each(Element::lock);
    }

    pub(crate) fn normalize(&mut self) {
        normalize_all(&mut self.elements);
    }
}

/// A fenced code block.
///
/// Empty text is accepted here and rejected when rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Codeblock {
    #[serde(default)]
    index: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    locked: bool,

    /// Raw code text
    #[serde(default)]
    text: String,
}

impl_node!(Codeblock, Codeblock, leaf);

impl Codeblock {
    /// Create a code block with raw text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            index: 0,
            locked: false,
            text: text.into(),
        }
    }

    /// Create a code block from an injected example source.
    ///
    /// A key the source cannot resolve yields an empty block, which the
    /// renderer rejects.
    pub fn from_example(source: &dyn ExampleSource, key: &str) -> Self {
        let text = source.example(key).unwrap_or_else(|| {
            log::debug!("no example value for '{}'", key);
            String::new()
        });
        Self::new(text)
    }

    /// Get the code text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the block has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the code text.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.ensure_unlocked()?;
        self.text = text.into();
        Ok(())
    }
}

/// A horizontal rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default)]
    index: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    locked: bool,
}

impl_node!(Rule, Rule, leaf);

impl Rule {
    /// Create a horizontal rule.
    pub fn new() -> Self {
        Self::default()
    }
}

/// An HTML anchor (`<a name="..."></a>`) used as an in-document link target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HtmlAnchor {
    #[serde(default)]
    index: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    locked: bool,

    /// Anchor name (the link fragment without `#`)
    name: String,
}

impl_node!(HtmlAnchor, HtmlAnchor, leaf);

impl HtmlAnchor {
    /// Create an anchor with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            index: 0,
            locked: false,
            name: name.into(),
        }
    }

    /// Create the anchor an in-document link points to.
    pub fn for_link(link: &Link) -> Self {
        Self::new(link.fragment().unwrap_or(link.url()))
    }

    /// Get the anchor name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the anchor name.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.ensure_unlocked()?;
        self.name = name.into();
        Ok(())
    }
}
