//! Markdown rendering for documents.

use std::io::Write;

use crate::error::{Error, Result};
use crate::model::{
    Blockquote, Codeblock, Column, Document, Element, ElementKind, Emphasis, Header, HtmlAnchor,
    Image, Link, List, ListEntry, Paragraph, Row, Section, Table, Text,
};

use super::dialect::{width, Dialect, HeaderSyntax};
use super::spacing::separator;
use super::{RenderOptions, RenderResult, RenderStats};

/// Spaces of indentation per list nesting level.
const LIST_INDENT: usize = 5;

/// Narrowest column a table is laid out with.
const MIN_COLUMN_WIDTH: usize = 3;

/// Setext underline length for a header with no text.
const EMPTY_SETEXT_WIDTH: usize = 3;

/// Prefix of every line inside a blockquote.
const QUOTE_PREFIX: &str = "> ";

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// Markdown renderer.
///
/// Rendering is a pure function of the document and the options: the same
/// input always produces byte-identical output, and a failed render never
/// exposes partial output.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Get the options this renderer was created with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut ctx = RenderContext::new(&self.options.dialect, self.options.collect_stats);
        ctx.render_document(doc)
    }

    /// Render a document to Markdown with render statistics.
    pub fn render_with_stats(&self, doc: &Document) -> Result<RenderResult> {
        let mut ctx = RenderContext::new(&self.options.dialect, true);
        let content = ctx.render_document(doc)?;

        let mut stats = ctx.stats;
        stats.count_text(&content);

        Ok(RenderResult::new(content, stats))
    }

    /// Render a document and write it to `writer`.
    ///
    /// Nothing is written unless the whole document renders.
    pub fn render_to<W: Write>(&self, doc: &Document, mut writer: W) -> Result<()> {
        let content = self.render(doc)?;
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// State of a single render call.
struct RenderContext<'a> {
    dialect: &'a Dialect,
    collect_stats: bool,
    stats: RenderStats,
}

impl<'a> RenderContext<'a> {
    fn new(dialect: &'a Dialect, collect_stats: bool) -> Self {
        Self {
            dialect,
            collect_stats,
            stats: RenderStats::new(),
        }
    }

    fn record(&mut self, kind: ElementKind) {
        if self.collect_stats {
            self.stats.record(kind);
        }
    }

    fn render_document(&mut self, doc: &Document) -> Result<String> {
        log::debug!("Rendering document with {} sections", doc.len());

        let mut output = String::new();
        for section in in_order(doc.sections(), Section::index) {
            self.render_section(&mut output, section)?;
        }

        log::debug!("Rendered {} bytes of Markdown", output.len());
        Ok(output)
    }

    fn render_section(&mut self, output: &mut String, section: &Section) -> Result<()> {
        self.record(ElementKind::Section);

        let elements = in_order(section.elements(), Element::index);
        for (i, element) in elements.iter().enumerate() {
            self.render_element(output, element, "section")?;
            let next = elements.get(i + 1).map(|e| e.kind());
            output.push_str(separator(element.kind(), next));
        }
        Ok(())
    }

    fn render_element(
        &mut self,
        output: &mut String,
        element: &Element,
        context: &'static str,
    ) -> Result<()> {
        match element {
            Element::Header(header) => self.render_header(output, header),
            Element::Paragraph(paragraph) => self.render_paragraph(output, paragraph)?,
            Element::Text(text) => push_text(output, text, self.dialect),
            Element::Blockquote(quote) => self.render_blockquote(output, quote)?,
            Element::List(list) => self.render_list(output, list)?,
            Element::Codeblock(codeblock) => self.render_codeblock(output, codeblock)?,
            Element::Image(image) => push_image(output, image),
            Element::Rule(_) => {
                output.push_str(self.dialect.rule().text);
                output.push('\n');
            }
            Element::Link(link) => push_link(output, link),
            Element::Table(table) => self.render_table(output, table)?,
            Element::HtmlAnchor(anchor) => push_anchor(output, anchor),
            Element::ListEntry(_) | Element::Column(_) | Element::Row(_) => {
                return Err(Error::UnsupportedElement {
                    kind: element.kind(),
                    context,
                });
            }
        }

        self.record(element.kind());
        Ok(())
    }

    fn render_header(&self, output: &mut String, header: &Header) {
        match self.dialect.header {
            HeaderSyntax::Atx => {
                output.push_str(&"#".repeat(header.level() as usize));
                output.push(' ');
                output.push_str(header.text());
                output.push('\n');
            }
            HeaderSyntax::Setext => {
                let underline = self.dialect.setext_underline(header.level());
                let len = match width(header.text()) {
                    0 => EMPTY_SETEXT_WIDTH,
                    n => n,
                };
                output.push_str(header.text());
                output.push('\n');
                output.push_str(&underline.text.repeat(len));
                output.push('\n');
            }
        }
    }

    fn render_paragraph(&mut self, output: &mut String, paragraph: &Paragraph) -> Result<()> {
        for element in in_order(paragraph.elements(), Element::index) {
            self.render_element(output, element, "paragraph")?;
        }
        output.push('\n');
        Ok(())
    }

    fn render_blockquote(&mut self, output: &mut String, quote: &Blockquote) -> Result<()> {
        for element in in_order(quote.elements(), Element::index) {
            let mut inner = String::new();
            self.render_element(&mut inner, element, "blockquote")?;
            if element.is_inline() {
                inner.push('\n');
            }

            let framed = matches!(element, Element::Paragraph(_));
            if framed {
                push_quote_marker(output);
            }
            for line in inner.split_inclusive('\n') {
                output.push_str(QUOTE_PREFIX);
                output.push_str(line);
            }
            if framed {
                push_quote_marker(output);
            }
        }
        output.push('\n');
        Ok(())
    }

    fn render_list(&mut self, output: &mut String, list: &List) -> Result<()> {
        let indent = " ".repeat(LIST_INDENT * list.level());

        for entry in in_order(list.entries(), ListEntry::index) {
            output.push_str(&indent);
            if list.is_ordered() {
                output.push_str(&format!("{}. ", entry.index() + 1));
            } else {
                output.push_str(self.dialect.bullet().text);
                output.push(' ');
            }

            self.render_element(output, entry.element(), "list entry")?;
            output.push('\n');

            for element in in_order(entry.elements(), Element::index) {
                self.render_element(output, element, "list entry")?;
            }
            self.record(ElementKind::ListEntry);
        }
        Ok(())
    }

    fn render_codeblock(&self, output: &mut String, codeblock: &Codeblock) -> Result<()> {
        if codeblock.is_empty() {
            return Err(Error::EmptyCodeblock);
        }

        let fence = self.dialect.fence();
        output.push_str(fence.text);
        output.push('\n');
        output.push_str(codeblock.text());
        if !codeblock.text().ends_with('\n') {
            output.push('\n');
        }
        output.push_str(fence.text);
        output.push('\n');
        Ok(())
    }

    fn render_table(&mut self, output: &mut String, table: &Table) -> Result<()> {
        let columns = in_order(table.columns(), Column::index);
        if columns.is_empty() {
            log::warn!("Skipping table with no columns");
            return Ok(());
        }

        // First pass: render every cell and size the columns.
        let mut cells = Vec::with_capacity(columns.len());
        let mut widths = Vec::with_capacity(columns.len());
        for column in &columns {
            let rows = in_order(column.rows(), Row::index);
            let rendered = (0..table.row_count())
                .map(|r| match rows.get(r) {
                    Some(row) => self.render_cell(row),
                    None => Ok(String::new()),
                })
                .collect::<Result<Vec<_>>>()?;

            let widest = rendered.iter().map(|cell| width(cell)).max().unwrap_or(0);
            widths.push(widest.max(width(column.name())).max(MIN_COLUMN_WIDTH));
            cells.push(rendered);
        }

        log::trace!(
            "Table layout: {} columns x {} rows, widths {:?}",
            columns.len(),
            table.row_count(),
            widths
        );

        // Second pass: emit the grid.
        output.push('|');
        for (column, &w) in columns.iter().zip(&widths) {
            output.push(' ');
            output.push_str(column.name());
            output.push_str(&" ".repeat(w - width(column.name())));
            output.push_str(" |");
        }
        output.push('\n');

        output.push('|');
        for &w in &widths {
            output.push_str(&"-".repeat(w + 2));
            output.push('|');
        }
        output.push('\n');

        for r in 0..table.row_count() {
            output.push('|');
            for (column_cells, &w) in cells.iter().zip(&widths) {
                let cell = &column_cells[r];
                output.push(' ');
                output.push_str(cell);
                output.push_str(&" ".repeat(w - width(cell) + 1));
                output.push('|');
            }
            output.push('\n');
            self.record(ElementKind::Row);
        }
        Ok(())
    }

    /// Render one table cell to a single line.
    fn render_cell(&self, row: &Row) -> Result<String> {
        let mut cell = String::new();
        for element in in_order(row.elements(), Element::index) {
            match element {
                Element::Text(text) => push_text(&mut cell, text, self.dialect),
                Element::Link(link) => push_link(&mut cell, link),
                Element::Image(image) => push_image(&mut cell, image),
                Element::Codeblock(codeblock) => push_code_span(&mut cell, codeblock)?,
                other => {
                    return Err(Error::UnsupportedElement {
                        kind: other.kind(),
                        context: "table cell",
                    });
                }
            }
        }
        Ok(cell)
    }
}

/// Children sorted by their index; ties keep insertion order.
fn in_order<T>(items: &[T], index: impl Fn(&T) -> usize) -> Vec<&T> {
    let mut ordered: Vec<&T> = items.iter().collect();
    ordered.sort_by_key(|item| index(*item));
    ordered
}

fn push_text(output: &mut String, text: &Text, dialect: &Dialect) {
    let Some(delimiter) = dialect.emphasis(text.emphasis()) else {
        output.push_str(text.content());
        return;
    };

    // Only bold drops trailing line breaks and spaces.
    let content = match text.emphasis() {
        Emphasis::Bold => text.content().trim_end_matches(['\n', ' ']),
        _ => text.content(),
    };

    output.push_str(delimiter.text);
    output.push_str(content);
    output.push_str(delimiter.text);
    output.push(' ');
}

fn push_link(output: &mut String, link: &Link) {
    output.push_str(&format!("[{}]({})", link.text(), link.url()));
}

fn push_image(output: &mut String, image: &Image) {
    output.push_str(&format!(
        "![{}]({} \"{}\")",
        image.text(),
        image.url(),
        image.title()
    ));
}

fn push_anchor(output: &mut String, anchor: &HtmlAnchor) {
    output.push_str(&format!("\n<a name=\"{}\"></a>\n", anchor.name()));
}

fn push_quote_marker(output: &mut String) {
    output.push_str(QUOTE_PREFIX);
    output.push('\n');
}

/// Code inside a table cell, folded onto one line.
fn push_code_span(output: &mut String, codeblock: &Codeblock) -> Result<()> {
    if codeblock.is_empty() {
        return Err(Error::EmptyCodeblock);
    }
    let code = codeblock.text().trim_end_matches('\n').replace('\n', " ");
    output.push('`');
    output.push_str(&code);
    output.push('`');
    Ok(())
}
