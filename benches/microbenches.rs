//! Criterion microbenches for PAGE-XML parsing and conversion.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use page_to_alto::convert::{convert_page_str, ConvertOptions, Converter};
use page_to_alto::page::from_page_xml_str;

// Include the test fixture at compile time (no file I/O during benchmark)
const PAGE_FIXTURE: &str = include_str!("../tests/fixtures/simple.page.xml");

/// Benchmark PAGE-XML parsing from string.
fn bench_page_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_parse");
    group.throughput(Throughput::Bytes(PAGE_FIXTURE.len() as u64));

    group.bench_function("from_page_xml_str", |b| {
        b.iter(|| {
            let doc = from_page_xml_str(black_box(PAGE_FIXTURE)).unwrap();
            black_box(doc)
        })
    });

    group.finish();
}

/// Benchmark conversion of an already-parsed document.
fn bench_convert(c: &mut Criterion) {
    let doc = from_page_xml_str(PAGE_FIXTURE).unwrap();

    let mut group = c.benchmark_group("convert");
    group.bench_function("converter_convert", |b| {
        b.iter(|| {
            let alto = Converter::new(black_box(&doc), ConvertOptions::default())
                .unwrap()
                .convert()
                .unwrap();
            black_box(alto)
        })
    });

    group.bench_function("convert_page_str", |b| {
        b.iter(|| {
            let alto =
                convert_page_str(black_box(PAGE_FIXTURE), ConvertOptions::default()).unwrap();
            black_box(alto)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_page_parse, bench_convert);
criterion_main!(benches);
