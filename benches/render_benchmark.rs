//! Benchmarks for mdscribe rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic API reference documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mdscribe::model::{
    Codeblock, Column, Document, Header, HtmlAnchor, Link, List, Paragraph, Section, Table, Text,
};
use mdscribe::render::{self, HeaderSyntax, RenderOptions};

/// Creates one section describing a message type with the given field count.
fn create_section(index: usize, field_count: usize) -> Section {
    let name = format!("Message{}", index);
    let mut section = Section::new();

    section
        .add_element(HtmlAnchor::new(format!("pkg.{}", name)))
        .unwrap();
    section.add_element(Header::new(2, name.as_str()).unwrap()).unwrap();
    section
        .add_element(
            Paragraph::with_text(format!("{} carries benchmark payload fields.", name)).unwrap(),
        )
        .unwrap();

    let fields: Vec<String> = (0..field_count).map(|i| format!("field_{}", i)).collect();
    let types: Vec<&str> = (0..field_count)
        .map(|i| if i % 2 == 0 { "string" } else { "int64" })
        .collect();
    let mut table = Table::new(field_count);
    table
        .add_column(Column::from_strings("Field", fields).unwrap())
        .unwrap();
    table
        .add_column(Column::from_strings("Type", types).unwrap())
        .unwrap();
    section.add_element(table).unwrap();

    let mut list = List::unordered();
    for i in 0..3 {
        let mut entry = list.new_entry(Link::anchor(format!("Ref{}", i), &format!("pkg.Ref{}", i)));
        let mut sublist = List::ordered();
        let child = sublist.new_entry(Text::italic("nested").unwrap());
        sublist.add_entry(child).unwrap();
        entry.add_sublist(sublist).unwrap();
        list.add_entry(entry).unwrap();
    }
    section.add_element(list).unwrap();

    section
        .add_element(Codeblock::new("{\n  \"id\": 1,\n  \"name\": \"bench\"\n}"))
        .unwrap();
    section
}

fn create_document(section_count: usize, field_count: usize) -> Document {
    let mut doc = Document::new();
    for i in 0..section_count {
        doc.add_section(create_section(i, field_count));
    }
    doc
}

/// Benchmark rendering at various document sizes.
fn bench_markdown_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown_rendering");
    let options = RenderOptions::default();

    for section_count in [1, 10, 100].iter() {
        let doc = create_document(*section_count, 8);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| render::to_markdown(black_box(&doc), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark table layout with wide columns.
fn bench_table_layout(c: &mut Criterion) {
    let doc = create_document(1, 500);
    let options = RenderOptions::new().with_header_syntax(HeaderSyntax::Setext);

    c.bench_function("table_500_rows", |b| {
        b.iter(|| render::to_markdown(black_box(&doc), &options).unwrap());
    });
}

/// Benchmark parallel document assembly.
fn bench_from_producers(c: &mut Criterion) {
    c.bench_function("from_producers_100", |b| {
        b.iter(|| Document::from_producers(black_box(100), |i| Ok(create_section(i, 8))).unwrap());
    });
}

/// Benchmark the JSON form.
fn bench_json(c: &mut Criterion) {
    let doc = create_document(10, 8);
    let json = render::to_json(&doc, render::JsonFormat::Compact).unwrap();

    c.bench_function("json_load_10_sections", |b| {
        b.iter(|| Document::from_json(black_box(&json)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_markdown_rendering,
    bench_table_layout,
    bench_from_producers,
    bench_json,
);
criterion_main!(benches);
