//! Benchmarks comparing positional operations across the list backings.
//!
//! The contrast of interest is front insertion (O(n) shifting for the
//! bounded backing, O(1) relinking for the chains) against positional reads
//! (O(1) indexing for the bounded backing, O(p) walking for the chains).

use criterion::{criterion_group, criterion_main, Criterion};
use poslist::prelude::*;

const ENTRIES: usize = 256;

fn front_insert_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("front_insert");

    group.bench_function("bounded", |b| {
        b.iter(|| {
            let mut list = BoundedList::<u64, ENTRIES>::new();
            for value in 0..ENTRIES as u64 {
                assert!(list.insert(1, value));
            }
            list
        });
    });

    group.bench_function("chained", |b| {
        b.iter(|| {
            let mut list = ChainedList::new();
            for value in 0..ENTRIES as u64 {
                assert!(list.insert(1, value));
            }
            list
        });
    });

    group.bench_function("shared", |b| {
        b.iter(|| {
            let mut list = SharedChainedList::new();
            for value in 0..ENTRIES as u64 {
                assert!(list.insert(1, value));
            }
            list
        });
    });

    group.finish();
}

fn positional_read_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional_read");

    let mut bounded = BoundedList::<u64, ENTRIES>::new();
    let mut chained = ChainedList::new();
    for value in 0..ENTRIES as u64 {
        assert!(bounded.insert(bounded.len() + 1, value));
        assert!(chained.insert(chained.len() + 1, value));
    }

    group.bench_function("bounded", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for position in 1..=bounded.len() {
                sum = sum.wrapping_add(bounded.get(position).unwrap_or(0));
            }
            sum
        });
    });

    group.bench_function("chained", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for position in 1..=chained.len() {
                sum = sum.wrapping_add(chained.get(position).unwrap_or(0));
            }
            sum
        });
    });

    group.finish();
}

fn sort_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion_sort");
    group.sample_size(20);

    // Descending input is the worst case for insertion sort.
    group.bench_function("bounded_reversed", |b| {
        b.iter(|| {
            let mut list = BoundedList::<u64, ENTRIES>::new();
            for value in 0..ENTRIES as u64 {
                assert!(list.insert(1, value));
            }
            insertion_sort(&mut list).map(|()| list)
        });
    });

    group.finish();
}

criterion_group!(benches, front_insert_bench, positional_read_bench, sort_bench);
criterion_main!(benches);
