//! The closed set of document elements.

use super::{
    Blockquote, Codeblock, Column, Header, HtmlAnchor, Image, Link, List, ListEntry, Paragraph,
    Row, Rule, Table, Text,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of the document tree.
///
/// Rendering matches exhaustively on this type; adding a variant means
/// extending the dialect table and the block spacing table as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A section heading
    Header(Header),
    /// Inline content terminated by a line break
    Paragraph(Paragraph),
    /// A run of text with one emphasis
    Text(Text),
    /// Quoted content
    Blockquote(Blockquote),
    /// An ordered or unordered list
    List(List),
    /// A single list entry
    ListEntry(ListEntry),
    /// A fenced code block
    Codeblock(Codeblock),
    /// An image reference
    Image(Image),
    /// A horizontal rule
    Rule(Rule),
    /// A hyperlink
    Link(Link),
    /// A pipe table
    Table(Table),
    /// A table column
    Column(Column),
    /// One cell of a table column
    Row(Row),
    /// An HTML anchor used as a link target
    HtmlAnchor(HtmlAnchor),
}

impl Element {
    /// Get the kind tag of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Header(_) => ElementKind::Header,
            Element::Paragraph(_) => ElementKind::Paragraph,
            Element::Text(_) => ElementKind::Text,
            Element::Blockquote(_) => ElementKind::Blockquote,
            Element::List(_) => ElementKind::List,
            Element::ListEntry(_) => ElementKind::ListEntry,
            Element::Codeblock(_) => ElementKind::Codeblock,
            Element::Image(_) => ElementKind::Image,
            Element::Rule(_) => ElementKind::Rule,
            Element::Link(_) => ElementKind::Link,
            Element::Table(_) => ElementKind::Table,
            Element::Column(_) => ElementKind::Column,
            Element::Row(_) => ElementKind::Row,
            Element::HtmlAnchor(_) => ElementKind::HtmlAnchor,
        }
    }

    /// Position of this element within its parent.
    pub fn index(&self) -> usize {
        match self {
            Element::Header(e) => e.index(),
            Element::Paragraph(e) => e.index(),
            Element::Text(e) => e.index(),
            Element::Blockquote(e) => e.index(),
            Element::List(e) => e.index(),
            Element::ListEntry(e) => e.index(),
            Element::Codeblock(e) => e.index(),
            Element::Image(e) => e.index(),
            Element::Rule(e) => e.index(),
            Element::Link(e) => e.index(),
            Element::Table(e) => e.index(),
            Element::Column(e) => e.index(),
            Element::Row(e) => e.index(),
            Element::HtmlAnchor(e) => e.index(),
        }
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        match self {
            Element::Header(e) => e.set_index(index),
            Element::Paragraph(e) => e.set_index(index),
            Element::Text(e) => e.set_index(index),
            Element::Blockquote(e) => e.set_index(index),
            Element::List(e) => e.set_index(index),
            Element::ListEntry(e) => e.set_index(index),
            Element::Codeblock(e) => e.set_index(index),
            Element::Image(e) => e.set_index(index),
            Element::Rule(e) => e.set_index(index),
            Element::Link(e) => e.set_index(index),
            Element::Table(e) => e.set_index(index),
            Element::Column(e) => e.set_index(index),
            Element::Row(e) => e.set_index(index),
            Element::HtmlAnchor(e) => e.set_index(index),
        }
    }

    /// Check if this element rejects mutation.
    pub fn is_locked(&self) -> bool {
        match self {
            Element::Header(e) => e.is_locked(),
            Element::Paragraph(e) => e.is_locked(),
            Element::Text(e) => e.is_locked(),
            Element::Blockquote(e) => e.is_locked(),
            Element::List(e) => e.is_locked(),
            Element::ListEntry(e) => e.is_locked(),
            Element::Codeblock(e) => e.is_locked(),
            Element::Image(e) => e.is_locked(),
            Element::Rule(e) => e.is_locked(),
            Element::Link(e) => e.is_locked(),
            Element::Table(e) => e.is_locked(),
            Element::Column(e) => e.is_locked(),
            Element::Row(e) => e.is_locked(),
            Element::HtmlAnchor(e) => e.is_locked(),
        }
    }

    /// Lock this element and everything it contains.
    pub fn lock(&mut self) {
        match self {
            Element::Header(e) => e.lock(),
            Element::Paragraph(e) => e.lock(),
            Element::Text(e) => e.lock(),
            Element::Blockquote(e) => e.lock(),
            Element::List(e) => e.lock(),
            Element::ListEntry(e) => e.lock(),
            Element::Codeblock(e) => e.lock(),
            Element::Image(e) => e.lock(),
            Element::Rule(e) => e.lock(),
            Element::Link(e) => e.lock(),
            Element::Table(e) => e.lock(),
            Element::Column(e) => e.lock(),
            Element::Row(e) => e.lock(),
            Element::HtmlAnchor(e) => e.lock(),
        }
    }

    /// Check if this element continues the current line rather than
    /// starting a block of its own.
    pub fn is_inline(&self) -> bool {
        self.kind().is_inline()
    }

    /// Re-run the construction checks on this element and its children.
    ///
    /// Builders validate eagerly; this exists for trees that bypassed them,
    /// such as documents deserialized from JSON.
    pub fn validate(&self) -> Result<()> {
        match self {
            Element::Header(e) => e.validate(),
            Element::Text(e) => e.validate(),
            Element::Column(e) => e.validate(),
            Element::Paragraph(e) => validate_all(e.elements()),
            Element::Blockquote(e) => validate_all(e.elements()),
            Element::Row(e) => validate_all(e.elements()),
            Element::List(e) => e
                .entries()
                .iter()
                .try_for_each(|entry| entry.validate()),
            Element::ListEntry(e) => e.validate(),
            Element::Table(e) => e.columns().iter().try_for_each(Column::validate),
            Element::Codeblock(_)
            | Element::Image(_)
            | Element::Rule(_)
            | Element::Link(_)
            | Element::HtmlAnchor(_) => Ok(()),
        }
    }

    /// Renumber children contiguously and restore list levels.
    pub(crate) fn normalize(&mut self) {
        match self {
            Element::Paragraph(e) => e.normalize(),
            Element::Blockquote(e) => e.normalize(),
            Element::List(e) => e.normalize(),
            Element::ListEntry(e) => e.normalize(),
            Element::Table(e) => e.normalize(),
            Element::Column(e) => e.normalize(),
            Element::Row(e) => e.normalize(),
            Element::Header(_)
            | Element::Text(_)
            | Element::Codeblock(_)
            | Element::Image(_)
            | Element::Rule(_)
            | Element::Link(_)
            | Element::HtmlAnchor(_) => {}
        }
    }
}

pub(crate) fn validate_all(elements: &[Element]) -> Result<()> {
    elements.iter().try_for_each(Element::validate)
}

/// Place a child at the end of a container, assigning its index.
pub(crate) fn append(elements: &mut Vec<Element>, element: impl Into<Element>) {
    let mut element = element.into();
    element.set_index(elements.len());
    elements.push(element);
}

/// Stably sort children by their stored index, then number them from 0.
pub(crate) fn renumber<T>(
    items: &mut [T],
    index: impl Fn(&T) -> usize,
    mut set_index: impl FnMut(&mut T, usize),
) {
    items.sort_by_key(|item| index(item));
    for (i, item) in items.iter_mut().enumerate() {
        set_index(item, i);
    }
}

/// Normalize a child list. Lists held directly in it start at level 0.
pub(crate) fn normalize_all(elements: &mut [Element]) {
    renumber(elements, Element::index, Element::set_index);
    for element in elements.iter_mut() {
        element.normalize();
        if let Element::List(list) = element {
            list.set_level(0);
        }
    }
}

macro_rules! element_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Element {
                fn from(value: $variant) -> Self {
                    Element::$variant(value)
                }
            }
        )*
    };
}

element_from!(
    Header, Paragraph, Text, Blockquote, List, ListEntry, Codeblock, Image, Rule, Link, Table,
    Column, Row, HtmlAnchor,
);

/// Kind tag of a document node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A section (container of elements, not itself an element)
    Section,
    /// A section heading
    Header,
    /// A paragraph of inline runs
    Paragraph,
    /// A text run
    Text,
    /// Quoted content
    Blockquote,
    /// An ordered or unordered list
    List,
    /// A list entry
    ListEntry,
    /// A fenced code block
    Codeblock,
    /// An image reference
    Image,
    /// A horizontal rule
    Rule,
    /// A hyperlink
    Link,
    /// A pipe table
    Table,
    /// A table column
    Column,
    /// A table cell
    Row,
    /// An HTML anchor
    HtmlAnchor,
}

impl ElementKind {
    /// Get the lowercase name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Section => "section",
            ElementKind::Header => "header",
            ElementKind::Paragraph => "paragraph",
            ElementKind::Text => "text",
            ElementKind::Blockquote => "blockquote",
            ElementKind::List => "list",
            ElementKind::ListEntry => "list_entry",
            ElementKind::Codeblock => "codeblock",
            ElementKind::Image => "image",
            ElementKind::Rule => "rule",
            ElementKind::Link => "link",
            ElementKind::Table => "table",
            ElementKind::Column => "column",
            ElementKind::Row => "row",
            ElementKind::HtmlAnchor => "html_anchor",
        }
    }

    /// Inline kinds do not start a block of their own.
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            ElementKind::Text | ElementKind::Link | ElementKind::Image
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip_through_from() {
        let element: Element = Rule::new().into();
        assert_eq!(element.kind(), ElementKind::Rule);
        assert!(!element.is_inline());

        let element: Element = Link::new("docs", "https://example.com").into();
        assert!(element.is_inline());
    }

    #[test]
    fn test_append_assigns_indices() {
        let mut elements = Vec::new();
        append(&mut elements, Rule::new().with_index(7));
        append(&mut elements, Rule::new());
        let indices: Vec<usize> = elements.iter().map(Element::index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_normalize_all_renumbers_stably() {
        let mut elements = vec![
            Element::from(Rule::new().with_index(2)),
            Element::from(HtmlAnchor::new("a")),
            Element::from(HtmlAnchor::new("b")),
            Element::from(List::unordered().with_index(2)),
        ];
        normalize_all(&mut elements);

        let kinds: Vec<ElementKind> = elements.iter().map(Element::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::HtmlAnchor,
                ElementKind::HtmlAnchor,
                ElementKind::Rule,
                ElementKind::List
            ]
        );
        let indices: Vec<usize> = elements.iter().map(Element::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!(matches!(&elements[0], Element::HtmlAnchor(a) if a.name() == "a"));
    }

    #[test]
    fn test_lock_is_reported() {
        let mut element: Element = HtmlAnchor::new("top").into();
        assert!(!element.is_locked());
        element.lock();
        assert!(element.is_locked());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ElementKind::HtmlAnchor.to_string(), "html_anchor");
        assert_eq!(ElementKind::ListEntry.to_string(), "list_entry");
    }
}
