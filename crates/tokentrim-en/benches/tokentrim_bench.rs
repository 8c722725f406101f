// Criterion benchmarks for tokentrim-en.
//
// Uses the fixture dictionary under tests/data by default. Set
// TOKENTRIM_DICT_PATH to a directory holding en_US.aff and en_US.dic to
// benchmark against a full dictionary instead. If neither is found the
// dictionary benchmarks print a message and run no-op iterations.
//
// Run:
//   cargo bench -p tokentrim-en
//   TOKENTRIM_DICT_PATH=/usr/share/hunspell cargo bench -p tokentrim-en

use std::path::PathBuf;

use criterion::{Criterion, criterion_group, criterion_main};
use futures::executor::block_on;
use tokentrim_en::{
    ConciseOptions, DeletionOptions, FileSource, LexiconAdverbTagger, SpellCorrector,
    TokenCounter, TrimEngine, find_deletions, make_concise,
};

const PROMPT: &str = "Please could you basically summarize the following paragraph in \
    order to make it shorter. It is important to note that due to the fact that the \
    enviornment is very complex, I beleev we really need to give consideration to the \
    past history of the project. Thanks.";

// ---------------------------------------------------------------------------
// Dictionary discovery
// ---------------------------------------------------------------------------

fn find_dictionary() -> Option<FileSource> {
    if let Ok(dir) = std::env::var("TOKENTRIM_DICT_PATH") {
        let source = FileSource::in_dir(&PathBuf::from(dir), "en_US");
        if source.aff_path().exists() {
            return Some(source);
        }
    }
    let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data");
    let source = FileSource::in_dir(&fixture, "en_test");
    source.aff_path().exists().then_some(source)
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Count tokens of a medium-length prompt.
fn bench_count_tokens(c: &mut Criterion) {
    let counter = TokenCounter::o200k().expect("o200k rank table");
    c.bench_function("count_tokens_prompt", |b| {
        b.iter(|| std::hint::black_box(counter.count(PROMPT)));
    });
}

/// Check a mix of known and misspelled words.
fn bench_check_words(c: &mut Criterion) {
    let Some(source) = find_dictionary() else {
        eprintln!("[bench_check_words] dictionary not found, skipping (set TOKENTRIM_DICT_PATH)");
        c.bench_function("check_words (skipped)", |b| b.iter(|| {}));
        return;
    };

    let corrector = SpellCorrector::new(source);
    block_on(corrector.initialize()).expect("dictionary");
    let words = ["hello", "enviornment", "beleev", "wrld", "paragraph", "alot"];

    c.bench_function("check_6_words", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(block_on(corrector.check_word(word)).ok());
            }
        });
    });
}

/// Rewrite a verbose prompt.
fn bench_make_concise(c: &mut Criterion) {
    let options = ConciseOptions {
        aggressive: true,
        ..ConciseOptions::default()
    };
    c.bench_function("make_concise_prompt", |b| {
        b.iter(|| std::hint::black_box(make_concise(PROMPT, &options)));
    });
}

/// Find politeness and adverb deletions.
fn bench_find_deletions(c: &mut Criterion) {
    let counter = TokenCounter::o200k().expect("o200k rank table");
    let options = DeletionOptions::default();
    c.bench_function("find_deletions_prompt", |b| {
        b.iter(|| {
            std::hint::black_box(find_deletions(
                PROMPT,
                &options,
                Some(&LexiconAdverbTagger),
                &counter,
            ))
        });
    });
}

/// Run every pass over a prompt.
fn bench_process_prompt(c: &mut Criterion) {
    let Some(source) = find_dictionary() else {
        eprintln!("[bench_process_prompt] dictionary not found, skipping (set TOKENTRIM_DICT_PATH)");
        c.bench_function("process_prompt (skipped)", |b| b.iter(|| {}));
        return;
    };

    let engine = TrimEngine::with_options(source, Default::default()).expect("engine");
    block_on(engine.initialize()).expect("dictionary");

    c.bench_function("process_prompt_text", |b| {
        b.iter(|| std::hint::black_box(block_on(engine.process_prompt_text(PROMPT)).ok()));
    });
}

criterion_group!(
    benches,
    bench_count_tokens,
    bench_check_words,
    bench_make_concise,
    bench_find_deletions,
    bench_process_prompt,
);
criterion_main!(benches);
