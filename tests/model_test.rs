//! Integration tests for building and locking documents.

use std::sync::Arc;

use mdscribe::model::{
    Blockquote, Codeblock, Column, Document, Element, ElementKind, Header, Link, List, Paragraph,
    Row, Section, Table, Text,
};
use mdscribe::{to_markdown, Error, ExampleSource, StaticExamples};

#[test]
fn test_indices_follow_attachment_order() {
    let mut doc = Document::new();
    for i in 0..3 {
        let mut section = Section::new();
        section.add_element(Header::new(1, format!("S{}", i)).unwrap()).unwrap();
        section.add_element(Paragraph::with_text("body").unwrap()).unwrap();
        doc.add_section(section);
    }

    for (i, section) in doc.sections().iter().enumerate() {
        assert_eq!(section.index(), i);
        let indices: Vec<usize> = section.elements().iter().map(Element::index).collect();
        assert_eq!(indices, vec![0, 1]);
    }
}

#[test]
fn test_construction_errors() {
    assert!(matches!(Text::new("a*b"), Err(Error::Construction(_))));
    assert!(matches!(Text::bold("#tag"), Err(Error::Construction(_))));
    assert!(matches!(
        Header::new(2, "line\nbreak"),
        Err(Error::Construction(_))
    ));
    assert!(matches!(Column::new("a|b"), Err(Error::Construction(_))));
    assert!(Paragraph::with_text("fish & chips").is_err());

    // Empty code is accepted here and only rejected by the renderer.
    assert!(Codeblock::new("").is_empty());
}

#[test]
fn test_locked_section_is_deeply_immutable() {
    let mut quote = Blockquote::new();
    quote
        .add_element(Paragraph::with_text("quoted").unwrap())
        .unwrap();

    let mut section = Section::with_elements([quote]).unwrap();
    section.lock();

    assert!(matches!(
        section.add_element(Header::new(1, "late").unwrap()),
        Err(Error::Locked(ElementKind::Section))
    ));

    let Some(Element::Blockquote(quote)) = section.element_mut(0) else {
        panic!("expected blockquote");
    };
    assert!(matches!(
        quote.add_element(Link::new("x", "y")),
        Err(Error::Locked(ElementKind::Blockquote))
    ));

    let Some(Element::Paragraph(paragraph)) = quote.element_mut(0) else {
        panic!("expected paragraph");
    };
    assert!(matches!(
        paragraph.add_text(Text::new("more").unwrap()),
        Err(Error::Locked(ElementKind::Paragraph))
    ));
}

#[test]
fn test_locked_document_still_renders() {
    let mut doc = Document::new();
    doc.add_section(Section::with_elements([Header::new(1, "Locked").unwrap()]).unwrap());
    let before = to_markdown(&doc).unwrap();

    doc.lock();
    assert_eq!(to_markdown(&doc).unwrap(), before);
}

#[test]
fn test_locked_table_cells() {
    let mut row = Row::new();
    row.add_text(Text::new("cell").unwrap()).unwrap();
    let mut column = Column::new("col").unwrap();
    column.add_row(row).unwrap();
    let mut table = Table::new(1);
    table.add_column(column).unwrap();
    table.lock();

    let column = table.column_mut(0).unwrap();
    let row = column.row_mut(0).unwrap();
    assert!(matches!(
        row.add_link(Link::new("a", "b")),
        Err(Error::Locked(ElementKind::Row))
    ));
}

#[test]
fn test_locked_sublist_can_still_be_nested() {
    let mut sublist = List::unordered();
    let entry = sublist.new_entry(Text::new("child").unwrap());
    sublist.add_entry(entry).unwrap();
    sublist.lock();

    let mut list = List::ordered();
    let mut entry = list.new_entry(Text::new("parent").unwrap());
    entry.add_sublist(sublist).unwrap();
    list.add_entry(entry).unwrap();

    let mut doc = Document::new();
    doc.add_section(Section::with_elements([list]).unwrap());
    assert_eq!(to_markdown(&doc).unwrap(), "1. parent\n     * child\n");
}

#[test]
fn test_parallel_producers_with_shared_examples() {
    let examples: Arc<dyn ExampleSource> = Arc::new(
        StaticExamples::new()
            .with("Request", "{\n  \"id\": 1\n}")
            .with("Response", "{\n  \"ok\": true\n}"),
    );
    let names = ["Request", "Response", "Missing"];

    let doc = Document::from_producers(names.len(), |i| {
        let mut section = Section::new();
        section.add_element(Header::new(3, names[i])?)?;
        section.add_element(Codeblock::from_example(examples.as_ref(), names[i]))?;
        Ok(section)
    })
    .unwrap();

    assert_eq!(doc.len(), 3);
    let Element::Codeblock(code) = &doc.sections()[0].elements()[1] else {
        panic!("expected codeblock");
    };
    assert_eq!(code.text(), "{\n  \"id\": 1\n}");

    // The missing example yields an empty block, which cannot render.
    assert!(matches!(to_markdown(&doc), Err(Error::EmptyCodeblock)));
}

#[test]
fn test_sections_built_on_threads_attach_in_order() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut section = Section::new();
                section
                    .add_element(Paragraph::with_text(format!("part {}", i)).unwrap())
                    .unwrap();
                section.lock();
                section
            })
        })
        .collect();

    let mut doc = Document::new();
    for handle in handles {
        doc.add_section(handle.join().unwrap());
    }

    assert_eq!(
        to_markdown(&doc).unwrap(),
        "part 0\npart 1\npart 2\npart 3\n"
    );
}

#[test]
fn test_validate_catches_invalid_json_tree() {
    let json = r#"{"sections":[{"elements":[
        {"type":"table","rows":1,"columns":[{"name":"a|b"}]}
    ]}]}"#;
    assert!(matches!(
        Document::from_json(json),
        Err(Error::Construction(_))
    ));
}
