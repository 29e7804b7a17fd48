//! Engine options loaded from JSON files.

use std::fs;

use fuzzex::{FuseError, FuseOptions, KeyName, KeySpec, DEFAULT_DISTANCE};
use tempfile::TempDir;

#[test]
fn test_options_file_uses_camel_case_and_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.json");
    fs::write(
        &path,
        r#"{
            "threshold": 0.2,
            "includeScore": true,
            "useExtendedSearch": true,
            "keys": ["title", {"name": ["author", "name"], "weight": 2}]
        }"#,
    )
    .unwrap();

    let options = FuseOptions::from_json_file(&path).unwrap();
    assert_eq!(options.threshold, 0.2);
    assert!(options.include_score);
    assert!(options.use_extended_search);
    assert!(options.should_sort);
    assert_eq!(options.distance, DEFAULT_DISTANCE);
    assert_eq!(
        options.keys,
        vec![
            KeySpec::from("title"),
            KeySpec::weighted(KeyName::from(vec!["author", "name"]), 2.0),
        ]
    );
}

#[test]
fn test_missing_options_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = FuseOptions::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, FuseError::Io(_)));
}

#[test]
fn test_key_without_name_is_an_invalid_key() {
    let options = FuseOptions::from_json(r#"{"keys": [{"weight": 2}]}"#).unwrap();
    let err = fuzzex::Fuse::new(Vec::new(), options).unwrap_err();
    assert!(err.is_invalid_key());
    assert_eq!(err.to_string(), "Missing name property in key");
}
