use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::Path;
use khmer_index::dictionary::WordList;
use khmer_index::grouping::build_index;
use khmer_index::keys::extract_keys;
use khmer_index::series::tokenize_with_series;

const SAMPLE_WORDS: &[&str] = &[
    "ក", "កា", "កខ", "កុំ", "កំ", "កប៉ា", "ខ្ញុំ", "ខ្មែរ", "គា", "អា", "អក្សរ", "ឥឡូវ", "ឯក",
    "ស្រឡាញ់", "ភាសា", "ហ្គាស", "ហ្វ៊ីល", "សណ្តាប់ធ្នាប់", "១២", "។", "᧡", "។ល។",
];

fn benchmark_tokenize(c: &mut Criterion) {
    let text = "កងកម្លាំងរក្សាសន្តិសុខនិងសណ្តាប់ធ្នាប់សាធារណៈ"; // "Security and public order forces"

    c.bench_function("tokenize_with_series_short_sentence", |b| {
        b.iter(|| {
            tokenize_with_series(black_box(text));
        })
    });
}

fn benchmark_index(c: &mut Criterion) {
    let pairs: Vec<_> = SAMPLE_WORDS
        .iter()
        .map(|w| (w.to_string(), extract_keys(w).expect("sample word must classify")))
        .collect();

    c.bench_function("build_index_sample", |b| {
        b.iter(|| build_index(black_box(pairs.clone())))
    });
}

fn benchmark_word_list(c: &mut Criterion) {
    let path = Path::new("../data/khmer_dictionary_words.txt");

    if !path.exists() {
        eprintln!("Skipping word list benchmark: Data files not found.");
        return;
    }

    let list = WordList::load(path).expect("Failed to load word list");

    c.bench_function("classify_and_index_word_list", |b| {
        b.iter(|| list.build_index())
    });
}

criterion_group!(benches, benchmark_tokenize, benchmark_index, benchmark_word_list);
criterion_main!(benches);
