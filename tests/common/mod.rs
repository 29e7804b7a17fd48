//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use fuzzex::{Fuse, FuseOptions, Query, SearchResult};
use serde_json::{json, Value};

// Re-export canonical fixtures from fuzzex::testing
pub use fuzzex::testing::{book_docs, book_options, positions, report_docs, report_options, word_docs};

// ============================================================================
// FIXTURES
// ============================================================================

/// Fruit names, all lower-case, single token.
pub fn fruit() -> Vec<Value> {
    ["apple", "apricot", "banana", "blueberry", "cherry", "pineapple"]
        .iter()
        .map(|f| json!(f))
        .collect()
}

/// Recipes with a nested ingredient list of objects.
pub fn recipes() -> Vec<Value> {
    vec![
        json!({"name": "Pancakes", "ingredients": [{"item": "flour"}, {"item": "milk"}, {"item": "egg"}]}),
        json!({"name": "Omelette", "ingredients": [{"item": "egg"}, {"item": "butter"}]}),
        json!({"name": "Fruit Salad", "ingredients": [{"item": "apple"}, {"item": "banana"}]}),
    ]
}

// ============================================================================
// HELPERS
// ============================================================================

/// Build an engine or fail the test.
pub fn engine(docs: Vec<Value>, options: FuseOptions) -> Fuse {
    Fuse::new(docs, options).expect("engine builds")
}

/// Positions matched by `query`, best first.
pub fn found<Q: Into<Query>>(fuse: &Fuse, query: Q) -> Vec<usize> {
    positions(&fuse.search(query).expect("search succeeds"))
}

/// Positions matched by `query`, sorted ascending (order-insensitive checks).
pub fn found_set<Q: Into<Query>>(fuse: &Fuse, query: Q) -> Vec<usize> {
    let mut found = found(fuse, query);
    found.sort_unstable();
    found
}

/// Score of the result at `ref_index`, if it matched.
pub fn score_of(results: &[SearchResult<'_>], ref_index: usize) -> Option<f64> {
    results
        .iter()
        .find(|r| r.ref_index == ref_index)
        .and_then(|r| r.score)
}

/// Write `docs` as a JSON array under `dir`.
pub fn write_collection(dir: &Path, name: &str, docs: &[Value]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_vec(docs).expect("serializable")).expect("writable");
    path
}
