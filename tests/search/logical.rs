//! Logical `$and` / `$or` queries.

use super::common::*;
use fuzzex::{FuseError, FuseOptions, KeyName};
use serde_json::json;

fn books() -> fuzzex::Fuse {
    engine(
        book_docs(),
        FuseOptions {
            threshold: 0.2,
            ..book_options()
        },
    )
}

// ============================================================================
// OPERATORS
// ============================================================================

#[test]
fn test_implicit_and_over_several_keys() {
    let query = json!({"title": "jeeves", "author.name": "woodhouse"});
    assert_eq!(found_set(&books(), query), vec![3, 5]);
}

#[test]
fn test_or_takes_any_branch() {
    let query = json!({"$or": [{"title": "html5"}, {"title": "lock artist"}]});
    assert_eq!(found_set(&books(), query), vec![1, 2]);
}

#[test]
fn test_nested_operators() {
    let query = json!({"$and": [
        {"author.name": "woodhouse"},
        {"$or": [{"title": "jeeves"}, {"title": "wooster"}]}
    ]});
    assert_eq!(found_set(&books(), query), vec![3, 4, 5]);
}

#[test]
fn test_path_leaf_with_segments() {
    let query = json!({"$path": ["author", "name"], "$val": "hamilton"});
    assert_eq!(found(&books(), query), vec![1]);
}

#[test]
fn test_unknown_key_matches_nothing() {
    assert!(found(&books(), json!({"publisher": "penguin"})).is_empty());
}

// ============================================================================
// RESULTS
// ============================================================================

#[test]
fn test_leaf_matches_are_reported_with_their_key() {
    let options = FuseOptions {
        threshold: 0.2,
        include_matches: true,
        ..book_options()
    };
    let fuse = engine(book_docs(), options);
    let results = fuse
        .search(json!({"$and": [{"title": "html5"}, {"author.name": "sharp"}]}))
        .unwrap();

    assert_eq!(positions(&results), vec![2]);
    let keys: Vec<_> = results[0]
        .matches
        .as_ref()
        .unwrap()
        .iter()
        .map(|m| m.key.clone())
        .collect();
    assert_eq!(
        keys,
        vec![Some(KeyName::from("title")), Some(KeyName::from("author.name"))]
    );
}

#[test]
fn test_logical_over_plain_strings_finds_nothing() {
    let fuse = engine(fruit(), FuseOptions::default());
    assert!(found(&fuse, json!({"title": "apple"})).is_empty());
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_non_object_child_is_rejected() {
    let err = books().search(json!({"$or": [1]})).unwrap_err();
    assert!(matches!(err, FuseError::InvalidQuery(_)));
}

#[test]
fn test_non_string_pattern_is_rejected() {
    let err = books()
        .search(json!({"$path": "author.name", "$val": 3}))
        .unwrap_err();
    assert!(matches!(err, FuseError::InvalidQuery(_)));
}
