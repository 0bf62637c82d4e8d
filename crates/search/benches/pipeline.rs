//! Benchmarks for the search pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mealdrop_catalog::{Restaurant, SearchFilters};
use mealdrop_search::{filter_restaurants, parse_delivery_time};
use serde_json::Value;

const CUISINES: [&str; 6] = ["Italian", "Chinese", "Thai", "Mexican", "Indian", "Greek"];

fn create_catalog(count: usize) -> Vec<Restaurant> {
    (0..count)
        .map(|i| Restaurant {
            id: format!("r-{}", i),
            name: format!("Restaurant {}", i),
            description: "Neighborhood favorite with daily specials".to_string(),
            cuisine_types: vec![CUISINES[i % CUISINES.len()].to_string()],
            dietary_options: Vec::new(),
            rating: (i % 50) as f64 / 10.0,
            review_count: (i % 400) as u32,
            delivery_time: format!("{}-{} min", 15 + i % 20, 25 + i % 20),
            delivery_fee: (i % 8) as f64 + 0.99,
            minimum_order: 10.0,
            is_open: true,
            address: Value::Null,
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_restaurants");

    for size in [10, 100, 1000, 10000].iter() {
        let catalog = create_catalog(*size);

        let unconstrained = SearchFilters::default();
        group.bench_with_input(BenchmarkId::new("rank_only", size), size, |b, _| {
            b.iter(|| filter_restaurants(black_box(&catalog), black_box(""), &unconstrained))
        });

        let filtered = SearchFilters::default().toggle_cuisine("Italian");
        group.bench_with_input(BenchmarkId::new("query_and_cuisine", size), size, |b, _| {
            b.iter(|| {
                filter_restaurants(black_box(&catalog), black_box("restaurant 1"), &filtered)
            })
        });
    }

    group.finish();
}

fn bench_delivery_time_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_delivery_time");

    group.bench_function("range", |b| {
        b.iter(|| parse_delivery_time(black_box("25-35 min")))
    });
    group.bench_function("unparseable", |b| {
        b.iter(|| parse_delivery_time(black_box("ASAP")))
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_delivery_time_parsing);
criterion_main!(benches);
