//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical sample collections to avoid duplication.

#![doc(hidden)]

use serde_json::{json, Value};

use crate::keys::KeySpec;
use crate::options::FuseOptions;

/// `["hello world", "help", "held"]`
pub fn word_docs() -> Vec<Value> {
    vec![json!("hello world"), json!("help"), json!("held")]
}

/// Two reports with a weighted title and a tag list.
pub fn report_docs() -> Vec<Value> {
    vec![
        json!({"title": "Quarterly Report", "tags": ["finance"]}),
        json!({"title": "Annual Summary", "tags": ["finance", "year"]}),
    ]
}

/// Keys for [`report_docs`]: title weighs twice as much as tags.
pub fn report_options() -> FuseOptions {
    FuseOptions {
        include_score: true,
        include_matches: true,
        ..FuseOptions::with_keys([KeySpec::weighted("title", 2.0), KeySpec::weighted("tags", 1.0)])
    }
}

/// A small library of books with nested authors.
pub fn book_docs() -> Vec<Value> {
    vec![
        json!({"title": "Old Man's War", "author": {"name": "John Scalzi", "tags": ["sci-fi"]}}),
        json!({"title": "The Lock Artist", "author": {"name": "Steve Hamilton", "tags": ["thriller"]}}),
        json!({"title": "HTML5", "author": {"name": "Remy Sharp", "tags": ["web", "dev"]}}),
        json!({"title": "Right Ho Jeeves", "author": {"name": "P.D. Woodhouse", "tags": ["comedy"]}}),
        json!({"title": "The Code of the Wooster", "author": {"name": "P.D. Woodhouse", "tags": ["comedy"]}}),
        json!({"title": "Thank You Jeeves", "author": {"name": "P.D. Woodhouse", "tags": ["comedy"]}}),
    ]
}

/// Options for [`book_docs`] keyed on title and author name.
pub fn book_options() -> FuseOptions {
    FuseOptions::with_keys(["title", "author.name"])
}

/// Collection positions of a result list, in result order.
pub fn positions(results: &[crate::types::SearchResult<'_>]) -> Vec<usize> {
    results.iter().map(|r| r.ref_index).collect()
}
