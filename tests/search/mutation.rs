//! Adding and removing documents after construction.

use super::common::*;
use fuzzex::{FuseError, FuseOptions};
use serde_json::{json, Value};

fn tight() -> FuseOptions {
    FuseOptions {
        threshold: 0.3,
        ..FuseOptions::default()
    }
}

#[test]
fn test_added_document_is_searchable() {
    let mut fuse = engine(fruit(), tight());
    fuse.add(json!("grape"));

    assert_eq!(fuse.len(), 7);
    assert_eq!(found(&fuse, "grape"), vec![6]);
}

#[test]
fn test_null_is_not_added() {
    let mut fuse = engine(fruit(), tight());
    fuse.add(Value::Null);
    assert_eq!(fuse.len(), 6);
    assert_eq!(fuse.index().size(), 6);
}

#[test]
fn test_remove_returns_documents_and_shifts_positions() {
    let mut fuse = engine(fruit(), tight());
    let removed = fuse.remove(|doc, _| doc.as_str().is_some_and(|s| s.starts_with('b')));

    assert_eq!(removed, vec![json!("banana"), json!("blueberry")]);
    assert_eq!(fuse.len(), 4);
    assert!(found(&fuse, "banana").is_empty());
    assert_eq!(found(&fuse, "cherry"), vec![2]);
}

#[test]
fn test_remove_predicate_sees_current_positions() {
    let mut fuse = engine(fruit(), tight());
    let mut seen = Vec::new();
    fuse.remove(|_, i| {
        seen.push(i);
        i == 0
    });
    // Position 0 is removed over and over
    assert_eq!(seen, vec![0, 0, 0, 0, 0, 0]);
    assert!(fuse.is_empty());
}

#[test]
fn test_remove_at() {
    let mut fuse = engine(fruit(), tight());
    assert_eq!(fuse.remove_at(0), Some(json!("apple")));
    assert_eq!(fuse.remove_at(99), None);
    assert_eq!(found(&fuse, "apricot"), vec![0]);
}

#[test]
fn test_keyed_records_follow_removal() {
    let mut fuse = engine(
        book_docs(),
        FuseOptions {
            keys: book_options().keys,
            ..tight()
        },
    );
    fuse.remove_at(1);
    assert_eq!(found(&fuse, "html5"), vec![1]);
}

#[test]
fn test_set_collection_reindexes() {
    let mut fuse = engine(fruit(), tight());
    fuse.set_collection(vec![json!("kiwi"), json!("mango")], None).unwrap();

    assert_eq!(found(&fuse, "mango"), vec![1]);
    assert!(found(&fuse, "apple").is_empty());
}

#[test]
fn test_set_collection_rejects_mismatched_index() {
    let mut fuse = engine(fruit(), tight());
    let other = engine(vec![json!("kiwi")], tight());

    let err = fuse
        .set_collection(vec![json!("kiwi"), json!("mango")], Some(other.index().clone()))
        .unwrap_err();
    assert!(matches!(err, FuseError::IncorrectIndexType));
}
