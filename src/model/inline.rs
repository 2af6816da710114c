//! Inline element types: text runs, links and images.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Characters a text run may not contain.
///
/// They open block-level or emphasis tokens in Markdown, and runs are
/// emitted verbatim rather than escaped.
pub const RESERVED_TEXT_CHARS: &[char] = &['#', '^', '&', '*'];

/// Emphasis applied to a text run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// Plain text, emitted verbatim
    #[default]
    Normal,
    /// Strong emphasis
    Bold,
    /// Emphasis
    Italic,
    /// Strong emphasis and emphasis combined
    BoldItalic,
}

/// A run of text with one emphasis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    #[serde(default)]
    index: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    locked: bool,

    /// The text content
    content: String,

    /// Emphasis of the whole run
    #[serde(default)]
    emphasis: Emphasis,
}

impl_node!(Text, Text, leaf);

impl Text {
    /// Create a plain text run.
    pub fn new(content: impl Into<String>) -> Result<Self> {
        Self::with_emphasis(content, Emphasis::Normal)
    }

    /// Create a text run with the given emphasis.
    pub fn with_emphasis(content: impl Into<String>, emphasis: Emphasis) -> Result<Self> {
        let content = content.into();
        check_content(&content)?;
        Ok(Self {
            index: 0,
            locked: false,
            content,
            emphasis,
        })
    }

    /// Create a bold text run.
    pub fn bold(content: impl Into<String>) -> Result<Self> {
        Self::with_emphasis(content, Emphasis::Bold)
    }

    /// Create an italic text run.
    pub fn italic(content: impl Into<String>) -> Result<Self> {
        Self::with_emphasis(content, Emphasis::Italic)
    }

    /// Create a bold italic text run.
    pub fn bold_italic(content: impl Into<String>) -> Result<Self> {
        Self::with_emphasis(content, Emphasis::BoldItalic)
    }

    /// Get the text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the emphasis.
    pub fn emphasis(&self) -> Emphasis {
        self.emphasis
    }

    /// Length of the content in codepoints.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Check if the run has no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Append more content to the run.
    pub fn push_str(&mut self, content: &str) -> Result<()> {
        self.ensure_unlocked()?;
        check_content(content)?;
        self.content.push_str(content);
        Ok(())
    }

    /// Change the emphasis of the run.
    pub fn set_emphasis(&mut self, emphasis: Emphasis) -> Result<()> {
        self.ensure_unlocked()?;
        self.emphasis = emphasis;
        Ok(())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_content(&self.content)
    }
}

fn check_content(content: &str) -> Result<()> {
    if content.contains(RESERVED_TEXT_CHARS) {
        return Err(Error::Construction(format!(
            "text cannot contain any of {:?}: '{}'",
            RESERVED_TEXT_CHARS, content
        )));
    }
    Ok(())
}

/// A hyperlink.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    index: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    locked: bool,

    /// Link text
    text: String,

    /// Link target
    url: String,
}

impl_node!(Link, Link, leaf);

impl Link {
    /// Create a new link.
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            index: 0,
            locked: false,
            text: text.into(),
            url: url.into(),
        }
    }

    /// Create a link to an in-document anchor named `full_name`.
    pub fn anchor(text: impl Into<String>, full_name: &str) -> Self {
        Self::new(text, format!("#{}", full_name))
    }

    /// Get the link text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the link target.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the in-document fragment this link points to, if any.
    pub fn fragment(&self) -> Option<&str> {
        self.url.strip_prefix('#')
    }

    /// Set the link text.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.ensure_unlocked()?;
        self.text = text.into();
        Ok(())
    }

    /// Set the link target.
    pub fn set_url(&mut self, url: impl Into<String>) -> Result<()> {
        self.ensure_unlocked()?;
        self.url = url.into();
        Ok(())
    }
}

/// An image reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    index: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    locked: bool,

    /// Alternative text
    text: String,

    /// Image location
    url: String,

    /// Image title (tooltip)
    #[serde(default)]
    title: String,
}

impl_node!(Image, Image, leaf);

impl Image {
    /// Create a new image reference.
    pub fn new(text: impl Into<String>, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            index: 0,
            locked: false,
            text: text.into(),
            url: url.into(),
            title: title.into(),
        }
    }

    /// Get the alternative text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the image location.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the image title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the alternative text.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.ensure_unlocked()?;
        self.text = text.into();
        Ok(())
    }

    /// Set the image location.
    pub fn set_url(&mut self, url: impl Into<String>) -> Result<()> {
        self.ensure_unlocked()?;
        self.url = url.into();
        Ok(())
    }

    /// Set the image title.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.ensure_unlocked()?;
        self.title = title.into();
        Ok(())
    }
}
