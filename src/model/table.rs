//! Table types.
//!
//! A table is stored column-major: each [`Column`] owns its own rows, so
//! columns can be filled independently and may end up with different
//! lengths. The table's declared row count decides how many rows render.

use super::block::check_single_line;
use super::element::{append, normalize_all, renumber, validate_all};
use super::{Codeblock, Element, Link, Text};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A left-aligned pipe table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    index: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    locked: bool,

    /// Columns, rendered in index order
    #[serde(default)]
    columns: Vec<Column>,

    /// Declared number of data rows
    #[serde(default)]
    rows: usize,
}

impl_node!(Table, Table);

impl Table {
    /// Create a table that renders `rows` data rows.
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Append a column.
    pub fn add_column(&mut self, mut column: Column) -> Result<()> {
        self.ensure_unlocked()?;
        column.set_index(self.columns.len());
        self.columns.push(column);
        Ok(())
    }

    /// Get the columns in insertion order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column for in-place population.
    pub fn column_mut(&mut self, index: usize) -> Option<&mut Column> {
        self.columns.get_mut(index)
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the declared number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Check if any column holds fewer rows than declared.
    pub fn is_ragged(&self) -> bool {
        self.columns.iter().any(|c| c.rows.len() < self.rows)
    }

    /// Lock this table and its columns.
    pub fn lock(&mut self) {
        self.locked = true;
        self.columns.iter_mut().for_each(Column::lock);
    }

    pub(crate) fn normalize(&mut self) {
        renumber(&mut self.columns, Column::index, Column::set_index);
        self.columns.iter_mut().for_each(Column::normalize);
    }
}

/// A table column with its own rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    #[serde(default)]
    index: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    locked: bool,

    /// Header text
    name: String,

    /// Cells of this column, rendered in index order
    #[serde(default)]
    rows: Vec<Row>,
}

impl_node!(Column, Column);

impl Column {
    /// Create an empty column.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_name(&name)?;
        Ok(Self {
            name,
            ..Self::default()
        })
    }

    /// Create a column with one plain text cell per value.
    pub fn from_strings<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let mut column = Self::new(name)?;
        for value in values {
            column.add_row(Row::from_text(Text::new(value)?))?;
        }
        Ok(column)
    }

    /// Get the header text.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the header text.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.ensure_unlocked()?;
        let name = name.into();
        check_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Append a cell.
    pub fn add_row(&mut self, mut row: Row) -> Result<()> {
        self.ensure_unlocked()?;
        row.set_index(self.rows.len());
        self.rows.push(row);
        Ok(())
    }

    /// Get the cells in insertion order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a cell for in-place population.
    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Lock this column and its cells.
    pub fn lock(&mut self) {
        self.locked = true;
        self.rows.iter_mut().for_each(Row::lock);
    }

    pub(crate) fn normalize(&mut self) {
        renumber(&mut self.rows, Row::index, Row::set_index);
        self.rows.iter_mut().for_each(Row::normalize);
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_name(&self.name)?;
        self.rows
            .iter()
            .try_for_each(|row| validate_all(&row.elements))
    }
}

fn check_name(name: &str) -> Result<()> {
    check_single_line(name, "column name")?;
    if name.contains('|') {
        return Err(Error::Construction(format!(
            "column name cannot contain '|': {:?}",
            name
        )));
    }
    Ok(())
}

/// One cell of a column: a sequence of inline runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default)]
    index: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    locked: bool,

    /// Inline runs, rendered in index order
    #[serde(default)]
    elements: Vec<Element>,
}

impl_node!(Row, Row);

impl Row {
    /// Create an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell holding one text run.
    pub fn from_text(text: Text) -> Self {
        let mut row = Self::new();
        append(&mut row.elements, text);
        row
    }

    /// Create a cell holding one link.
    pub fn from_link(link: Link) -> Self {
        let mut row = Self::new();
        append(&mut row.elements, link);
        row
    }

    /// Append a text run.
    pub fn add_text(&mut self, text: Text) -> Result<()> {
        self.ensure_unlocked()?;
        append(&mut self.elements, text);
        Ok(())
    }

    /// Append a link.
    pub fn add_link(&mut self, link: Link) -> Result<()> {
        self.ensure_unlocked()?;
        append(&mut self.elements, link);
        Ok(())
    }

    /// Append a code block, rendered as an inline code span.
    pub fn add_codeblock(&mut self, codeblock: Codeblock) -> Result<()> {
        self.ensure_unlocked()?;
        append(&mut self.elements, codeblock);
        Ok(())
    }

    /// Get the inline runs in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Check if the cell has no content.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Lock this cell and its runs.
    pub fn lock(&mut self) {
        self.locked = true;
        self.elements.iter_mut().for_each(Element::lock);
    }

    pub(crate) fn normalize(&mut self) {
        normalize_all(&mut self.elements);
    }
}
