//! Criterion benchmarks for the Solace engine.
//!
//! Covers the hot paths of a running chatbot:
//! - Text normalization (char filter, tokenization, lemmatization)
//! - Reply selection (vector projection + cosine scan over both sources)
//! - Autocomplete suggestions

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use solace::catalog::{IntentCatalog, IntentGroup, QaTable};
use solace::engine::Engine;
use std::hint::black_box;

/// Generate pattern texts with overlapping vocabulary.
fn generate_patterns(count: usize) -> Vec<String> {
    let words = vec![
        "feel", "feeling", "sad", "anxious", "worried", "stressed", "lonely", "tired", "help",
        "sleep", "trouble", "cope", "talk", "friend", "family", "work", "school", "panic",
        "therapy", "depression", "anxiety", "stress", "mood", "anger", "fear", "hope", "calm",
        "support", "advice", "today",
    ];

    let mut patterns = Vec::with_capacity(count);
    for i in 0..count {
        let length = 3 + (i % 5);
        let mut pattern_words = Vec::with_capacity(length);
        for j in 0..length {
            let word_idx = (i * 7 + j * 13) % words.len();
            pattern_words.push(words[word_idx]);
        }
        patterns.push(pattern_words.join(" "));
    }
    patterns
}

fn build_engine(intent_count: usize, qa_count: usize) -> Engine {
    let patterns = generate_patterns(intent_count + qa_count);

    let groups = patterns[..intent_count]
        .iter()
        .enumerate()
        .map(|(i, pattern)| IntentGroup {
            tag: format!("intent{i}"),
            patterns: vec![pattern.clone()],
            responses: vec![format!("response for intent {i}")],
        })
        .collect();
    let catalog = IntentCatalog::from_groups(groups).unwrap();

    let table = QaTable::from_pairs(
        patterns[intent_count..]
            .iter()
            .enumerate()
            .map(|(i, question)| (question.clone(), format!("answer {i}"))),
    )
    .unwrap();

    Engine::new(catalog, table).unwrap()
}

/// Benchmark text normalization.
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let engine = build_engine(10, 10);
    let texts = generate_patterns(1000);

    group.bench_function("normalize_single_text", |b| {
        b.iter(|| black_box(engine.normalize(black_box("I was feeling very anxious yesterday!"))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("normalize_batch", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let _ = black_box(engine.normalize(black_box(text)));
            }
        })
    });

    group.finish();
}

/// Benchmark reply selection over corpora of increasing size.
fn bench_reply(c: &mut Criterion) {
    let mut group = c.benchmark_group("reply");

    for size in [10, 100, 500] {
        let engine = build_engine(size, size);
        group.bench_function(format!("reply_{size}_per_source"), |b| {
            b.iter(|| black_box(engine.reply(black_box("i feel sad and anxious today"))))
        });
    }

    group.finish();
}

/// Benchmark autocomplete suggestions.
fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest");

    let engine = build_engine(500, 500);

    group.bench_function("suggest_default_limit", |b| {
        b.iter(|| black_box(engine.suggest_default(black_box("feel"))))
    });

    group.bench_function("suggest_no_match", |b| {
        b.iter(|| black_box(engine.suggest_default(black_box("zzzzz"))))
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_reply, bench_suggest);
criterion_main!(benches);
