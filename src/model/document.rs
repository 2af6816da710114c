//! Document-level types.

use super::element::{append, normalize_all, renumber, validate_all};
use super::Element;
use crate::error::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A Markdown document: an ordered sequence of sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Sections, rendered in index order
    #[serde(default)]
    sections: Vec<Section>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from independently produced sections.
    ///
    /// Producers run in parallel; section order follows the producer
    /// number, not completion order. The first producer error aborts the
    /// build.
    pub fn from_producers<F>(count: usize, produce: F) -> Result<Self>
    where
        F: Fn(usize) -> Result<Section> + Sync,
    {
        let sections: Vec<Section> = (0..count)
            .into_par_iter()
            .map(|i| produce(i).map(|section| section.with_index(i)))
            .collect::<Result<_>>()?;

        log::debug!("Built document from {} section producers", sections.len());
        Ok(Self { sections })
    }

    /// Parse a document from its JSON form and check every element.
    ///
    /// Children are renumbered from 0 in the order of their stored `index`
    /// (array order breaks ties, so omitted indices keep array order), and
    /// list levels are recomputed from the nesting.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut document: Document = serde_json::from_str(json)?;
        document.normalize();
        document.validate()?;
        Ok(document)
    }

    /// Append a section.
    pub fn add_section(&mut self, mut section: Section) {
        section.set_index(self.sections.len());
        self.sections.push(section);
    }

    /// Get the sections in insertion order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Get a section for in-place population.
    pub fn section_mut(&mut self, index: usize) -> Option<&mut Section> {
        self.sections.get_mut(index)
    }

    /// Get the number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Lock every section and element in the document.
    pub fn lock(&mut self) {
        self.sections.iter_mut().for_each(Section::lock);
    }

    fn normalize(&mut self) {
        renumber(&mut self.sections, Section::index, Section::set_index);
        for section in &mut self.sections {
            normalize_all(&mut section.elements);
        }
    }

    /// Re-run the construction checks over the whole tree.
    pub fn validate(&self) -> Result<()> {
        self.sections
            .iter()
            .try_for_each(|section| validate_all(&section.elements))
    }
}

/// A top-level grouping of elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    index: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    locked: bool,

    /// Elements, rendered in index order
    #[serde(default)]
    elements: Vec<Element>,
}

impl_node!(Section, Section);

impl Section {
    /// Create a new empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a section from a sequence of elements.
    pub fn with_elements<I, E>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        let mut section = Self::new();
        for element in elements {
            section.add_element(element)?;
        }
        Ok(section)
    }

    /// Append an element.
    pub fn add_element(&mut self, element: impl Into<Element>) -> Result<()> {
        self.ensure_unlocked()?;
        append(&mut self.elements, element);
        Ok(())
    }

    /// Get the elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Get an element for in-place population.
    pub fn element_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.elements.get_mut(index)
    }

    /// Check if the section has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Lock this section and everything in it.
    pub fn lock(&mut self) {
        self.locked = true;
        self.elements.iter_mut().for_each(Element::lock);
    }
}
