//! Performance benchmarks for search and pagination.
//!
//! These benchmarks measure:
//! - Substring search by name and by phone fragment
//! - Different address book sizes
//! - Walking every page of a snapshot

use contact_book::{AddressBook, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

/// Build a book of `size` contacts, each with two phones.
fn create_test_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let mut record = Record::new(format!("Contact Number {}", i));
        record
            .add_phone(format!("{:010}", i))
            .expect("generated phone is valid");
        record
            .add_phone(format!("05{:08}", i))
            .expect("generated phone is valid");
        book.add_record(record);
    }
    book
}

/// Benchmark search by name fragment across book sizes.
fn bench_search_by_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_by_name");

    for size in [100, 1_000, 10_000].iter() {
        let book = create_test_book(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(book.search_records(black_box("number 99"))).len());
        });
    }

    group.finish();
}

/// Benchmark search by phone fragment, which checks every phone of every record.
fn bench_search_by_phone(c: &mut Criterion) {
    let book = create_test_book(1_000);

    c.bench_function("search_by_phone", |b| {
        b.iter(|| black_box(book.search_records(black_box("0500000"))).len());
    });
}

/// Benchmark taking a snapshot and walking every page.
fn bench_iterate_pages(c: &mut Criterion) {
    let book = create_test_book(1_000);
    let mut group = c.benchmark_group("iterate_pages");

    for page_size in [1, 10, 100].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(page_size),
            page_size,
            |b, &page_size| {
                b.iter(|| {
                    book.iterate_pages(page_size)
                        .expect("non-zero page size")
                        .map(|page| page.len())
                        .sum::<usize>()
                });
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_search_by_name,
        bench_search_by_phone,
        bench_iterate_pages
}

criterion_main!(benches);
