//! List types.

use super::element::{append, normalize_all, renumber, validate_all};
use super::Element;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// An ordered or unordered list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    #[serde(default)]
    index: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    locked: bool,

    /// Entries, rendered in index order
    #[serde(default)]
    entries: Vec<ListEntry>,

    /// Numbered (`1. `) rather than bulleted
    #[serde(default)]
    ordered: bool,

    /// Nesting level (0 = top level)
    #[serde(default)]
    level: usize,
}

impl_node!(List, List);

impl List {
    /// Create a new top-level list.
    pub fn new(ordered: bool) -> Self {
        Self {
            ordered,
            ..Self::default()
        }
    }

    /// Create a numbered list.
    pub fn ordered() -> Self {
        Self::new(true)
    }

    /// Create a bulleted list.
    pub fn unordered() -> Self {
        Self::new(false)
    }

    /// Create an unattached entry for this list.
    ///
    /// The entry takes this list's current level so that sublists attached
    /// to it before the entry itself is added nest correctly.
    pub fn new_entry(&self, element: impl Into<Element>) -> ListEntry {
        let mut entry = ListEntry::new(element);
        entry.level = self.level;
        entry
    }

    /// Append an entry.
    pub fn add_entry(&mut self, mut entry: ListEntry) -> Result<()> {
        self.ensure_unlocked()?;
        entry.set_index(self.entries.len());
        entry.set_level(self.level);
        self.entries.push(entry);
        Ok(())
    }

    /// Get the entries in insertion order.
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Get an entry for in-place population.
    pub fn entry_mut(&mut self, index: usize) -> Option<&mut ListEntry> {
        self.entries.get_mut(index)
    }

    /// Check if the list is numbered.
    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    /// Get the nesting level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Set the nesting level, re-levelling every nested sublist below it.
    ///
    /// Levels describe structure rather than content, so this is allowed on
    /// locked lists; attaching a locked list as a sublist relies on it.
    pub fn set_level(&mut self, level: usize) {
        self.level = level;
        for entry in &mut self.entries {
            entry.set_level(level);
        }
    }

    /// Check if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lock this list and its entries.
    pub fn lock(&mut self) {
        self.locked = true;
        self.entries.iter_mut().for_each(ListEntry::lock);
    }

    pub(crate) fn normalize(&mut self) {
        renumber(&mut self.entries, ListEntry::index, ListEntry::set_index);
        self.entries.iter_mut().for_each(ListEntry::normalize);
        self.set_level(self.level);
    }
}

/// A single list entry.
///
/// The primary element is rendered after the bullet; trailing elements
/// (usually a nested sublist) follow on their own lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    #[serde(default)]
    index: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    locked: bool,

    /// Level of the owning list
    #[serde(default)]
    level: usize,

    /// Content following the bullet
    element: Box<Element>,

    /// Trailing elements, rendered in index order
    #[serde(default)]
    elements: Vec<Element>,
}

impl_node!(ListEntry, ListEntry);

impl ListEntry {
    /// Create an entry with its primary element.
    pub fn new(element: impl Into<Element>) -> Self {
        Self {
            index: 0,
            locked: false,
            level: 0,
            element: Box::new(element.into()),
            elements: Vec::new(),
        }
    }

    /// Get the primary element.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Get the trailing elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Level of the list this entry belongs to.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Replace the primary element.
    pub fn set_element(&mut self, element: impl Into<Element>) -> Result<()> {
        self.ensure_unlocked()?;
        self.element = Box::new(element.into());
        Ok(())
    }

    /// Append a trailing element.
    pub fn add_element(&mut self, element: impl Into<Element>) -> Result<()> {
        self.ensure_unlocked()?;
        append(&mut self.elements, element);
        Ok(())
    }

    /// Nest a list under this entry, one level deeper than the entry's list.
    pub fn add_sublist(&mut self, mut list: List) -> Result<()> {
        self.ensure_unlocked()?;
        list.set_level(self.level + 1);
        append(&mut self.elements, list);
        Ok(())
    }

    fn set_level(&mut self, level: usize) {
        self.level = level;
        for element in &mut self.elements {
            if let Element::List(sublist) = element {
                sublist.set_level(level + 1);
            }
        }
    }

    /// Lock this entry and everything under it.
    pub fn lock(&mut self) {
        self.locked = true;
        self.element.lock();
        self.elements.iter_mut().for_each(Element::lock);
    }

    pub(crate) fn normalize(&mut self) {
        self.element.set_index(0);
        self.element.normalize();
        normalize_all(&mut self.elements);
        self.set_level(self.level);
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.element.validate()?;
        validate_all(&self.elements)
    }
}
