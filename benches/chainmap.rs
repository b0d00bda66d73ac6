#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use chainmap::HashTable;
use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    collection::vec,
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_table_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = vec((any::<String>(), any::<String>()), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash table comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut chain_table = HashTable::new();
    let mut rust_map = HashMap::new();
    group.bench_function("chainmap set", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                chain_table.set(key, value);
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("chainmap get", |b| {
        b.iter(|| items.iter().filter(|(key, _)| chain_table.get(key).is_some()).count());
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| items.iter().filter(|(key, _)| rust_map.get(key).is_some()).count());
    });
    group.bench_function("chainmap grow from 16", |b| {
        b.iter(|| {
            let mut table = HashTable::new();
            for (key, value) in &items {
                table.set(key.as_str(), value);
            }
            table.capacity()
        });
    });
    group.finish();
}

criterion_group!(benches, hash_table_benches);

criterion_main!(benches);
