//! Extended token grammar through the engine.

#![cfg(feature = "extended-search")]

use super::common::*;
use fuzzex::{FuseOptions, KeyName};
use serde_json::json;

fn extended() -> FuseOptions {
    FuseOptions {
        use_extended_search: true,
        ..FuseOptions::default()
    }
}

// ============================================================================
// SINGLE TOKENS
// ============================================================================

#[test]
fn test_exact_token() {
    let fuse = engine(fruit(), extended());
    assert_eq!(found(&fuse, "=apple"), vec![0]);
    assert_eq!(found(&fuse, "=\"apple\""), vec![0]);
}

#[test]
fn test_include_token() {
    let fuse = engine(fruit(), extended());
    assert_eq!(found_set(&fuse, "'apple"), vec![0, 5]);
}

#[test]
fn test_prefix_and_suffix_tokens() {
    let fuse = engine(fruit(), extended());
    assert_eq!(found(&fuse, "^app"), vec![0]);
    assert_eq!(found_set(&fuse, "rry$"), vec![3, 4]);
}

#[test]
fn test_inverse_tokens() {
    let fuse = engine(fruit(), extended());
    assert_eq!(found_set(&fuse, "!apple"), vec![1, 2, 3, 4]);
    assert_eq!(found_set(&fuse, "!^b"), vec![0, 1, 4, 5]);
    assert_eq!(found_set(&fuse, "!e$"), vec![1, 2, 3, 4]);
}

// ============================================================================
// GROUPS
// ============================================================================

#[test]
fn test_space_means_and() {
    let fuse = engine(fruit(), extended());
    assert_eq!(found(&fuse, "^b rry$"), vec![3]);
}

#[test]
fn test_pipe_means_or() {
    let fuse = engine(fruit(), extended());
    assert_eq!(found_set(&fuse, "^ch | ^ap"), vec![0, 1, 4]);
}

#[test]
fn test_quoted_token_keeps_spaces() {
    let docs = vec![json!("apple pie"), json!("pie apple")];
    let fuse = engine(docs, extended());
    assert_eq!(found(&fuse, "'\"apple pie\""), vec![0]);
    assert_eq!(found_set(&fuse, "'apple 'pie"), vec![0, 1]);
}

// ============================================================================
// MATCH DETAILS AND KEYS
// ============================================================================

#[test]
fn test_prefix_reports_its_range() {
    let options = FuseOptions {
        include_matches: true,
        ..extended()
    };
    let fuse = engine(fruit(), options);
    let results = fuse.search("^app").unwrap();

    let detail = &results[0].matches.as_ref().unwrap()[0];
    assert_eq!(detail.value, "apple");
    assert_eq!(detail.indices, vec![(0, 2)]);
}

#[test]
fn test_extended_over_keyed_records() {
    let options = FuseOptions {
        include_matches: true,
        use_extended_search: true,
        ..book_options()
    };
    let fuse = engine(book_docs(), options);
    let results = fuse.search("=HTML5").unwrap();

    assert_eq!(positions(&results), vec![2]);
    let detail = &results[0].matches.as_ref().unwrap()[0];
    assert_eq!(detail.key, Some(KeyName::from("title")));
}

#[test]
fn test_grammar_is_off_by_default() {
    // Without the grammar "^app" is a fuzzy pattern and finds "pineapple" too
    let fuzzy = engine(fruit(), FuseOptions::default());
    assert!(found(&fuzzy, "^app").contains(&5));

    let grammar = engine(fruit(), extended());
    assert!(!found(&grammar, "^app").contains(&5));
}
