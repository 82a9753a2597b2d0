//! Criterion benchmarks for spelltrie.
//!
//! Covers dictionary construction, distance-1 and distance-2 suggestion
//! lookups, and parallel batch suggestion.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use spelltrie::spelling::{PrefixTree, SuggestionEngine, edits1};
use std::hint::black_box;

/// Generate a deterministic word list for benchmarking.
fn generate_dictionary_words(count: usize) -> Vec<String> {
    let words = vec![
        "search",
        "engine",
        "full",
        "text",
        "index",
        "query",
        "document",
        "field",
        "term",
        "phrase",
        "boolean",
        "vector",
        "similarity",
        "relevance",
        "score",
        "analysis",
        "tokenization",
        "stemming",
        "normalization",
        "clustering",
        "machine",
        "learning",
        "algorithm",
        "data",
        "structure",
        "performance",
        "optimization",
        "memory",
        "storage",
        "retrieval",
        "ranking",
        "filtering",
    ];

    (0..count).map(|i| words[(i * 7) % words.len()].to_string()).collect()
}

/// Benchmark dictionary construction.
fn bench_tree_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_construction");
    let words = generate_dictionary_words(10_000);

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("insert_words", |b| {
        b.iter(|| {
            let tree = PrefixTree::from_words(black_box(&words)).unwrap();
            black_box(tree)
        })
    });

    let tree = PrefixTree::from_words(&words).unwrap();
    group.bench_function("traverse", |b| b.iter(|| black_box(tree.traverse())));
    group.bench_function("structural_hash", |b| {
        b.iter(|| black_box(tree.structural_hash()))
    });

    group.finish();
}

/// Benchmark spell correction operations.
fn bench_spell_correction(c: &mut Criterion) {
    let mut group = c.benchmark_group("spell_correction");
    group.sample_size(20); // Reduce sample size for faster execution

    let tree = PrefixTree::from_words(generate_dictionary_words(1_000)).unwrap();
    let engine = SuggestionEngine::new(&tree);

    group.bench_function("edits1", |b| b.iter(|| black_box(edits1(black_box("documnet")))));

    group.bench_function("known_word", |b| {
        b.iter(|| black_box(engine.suggest(black_box("search")).unwrap()))
    });

    group.bench_function("distance_one", |b| {
        b.iter(|| black_box(engine.suggest(black_box("serch")).unwrap()))
    });

    group.bench_function("distance_two", |b| {
        b.iter(|| black_box(engine.suggest(black_box("srch")).unwrap()))
    });

    let misspellings = vec!["searc", "engin", "documnet", "qurey", "algortihm"];
    group.throughput(Throughput::Elements(misspellings.len() as u64));
    group.bench_function("sequential_batch", |b| {
        b.iter(|| {
            for word in &misspellings {
                black_box(engine.suggest(black_box(word)).unwrap());
            }
        })
    });
    group.bench_function("parallel_batch", |b| {
        b.iter(|| black_box(engine.suggest_batch(&misspellings)))
    });

    group.finish();
}

criterion_group!(benches, bench_tree_construction, bench_spell_correction);
criterion_main!(benches);
