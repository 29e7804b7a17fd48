//! Shared generators.

use fuzzex::{FuseOptions, OwnedSearchResult};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Word-like strings.
pub fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}").unwrap()
}

/// A sentence of 1-6 words.
pub fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..6).prop_map(|words| words.join(" "))
}

/// Plain-text collection.
pub fn text_docs() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(sentence().prop_map(Value::String), 1..12)
}

/// A record with a title and a tag list.
pub fn keyed_doc() -> impl Strategy<Value = Value> {
    (sentence(), prop::collection::vec(word(), 0..4))
        .prop_map(|(title, tags)| json!({"title": title, "tags": tags}))
}

pub fn keyed_docs() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(keyed_doc(), 1..10)
}

pub fn query() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,6}").unwrap()
}

pub fn scored() -> FuseOptions {
    FuseOptions {
        include_score: true,
        include_matches: true,
        ..FuseOptions::default()
    }
}

pub fn keyed() -> FuseOptions {
    FuseOptions {
        keys: vec![fuzzex::KeySpec::weighted("title", 2.0), "tags".into()],
        ..scored()
    }
}

/// Results with scores compared to a tolerance instead of bit-for-bit.
pub fn assert_same_results(a: &[OwnedSearchResult], b: &[OwnedSearchResult]) -> Result<(), TestCaseError> {
    prop_assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b) {
        prop_assert_eq!(&x.item, &y.item);
        prop_assert_eq!(&x.matches, &y.matches);
        let (sx, sy) = (x.score.unwrap_or(1.0), y.score.unwrap_or(1.0));
        prop_assert!((sx - sy).abs() < 1e-9, "scores differ: {} vs {}", sx, sy);
    }
    Ok(())
}
