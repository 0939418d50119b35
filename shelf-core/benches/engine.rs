//! Search and sort benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shelf_core::engine::{search, sorted_by_year};
use shelf_core::{BookRecord, SortOrder};

fn catalog(size: usize) -> Vec<BookRecord> {
    (0..size)
        .map(|i| {
            BookRecord::new(
                format!("Volume {} of the Collected Works", i),
                format!("Author {}", i % 97),
                1600 + (i * 7919 % 420) as i32,
            )
        })
        .collect()
}

fn engine_benchmark(c: &mut Criterion) {
    let books = catalog(10_000);

    c.bench_function("search 10k", |b| {
        b.iter(|| search(black_box(&books), black_box("author 42")))
    });

    c.bench_function("sort 10k ascending", |b| {
        b.iter(|| sorted_by_year(black_box(&books), SortOrder::Ascending))
    });
}

criterion_group!(benches, engine_benchmark);
criterion_main!(benches);
