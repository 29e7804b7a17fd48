//! The `fuzzex` binary end to end.

use std::path::Path;
use std::process::{Command, Output};

use super::common::*;
use serde_json::{json, Value};
use tempfile::TempDir;

fn fuzzex(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fuzzex"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_search_prints_json_results() {
    let dir = TempDir::new().unwrap();
    let books = write_collection(dir.path(), "books.json", &book_docs());

    let output = fuzzex(&[
        "search", "-i", arg(&books), "-k", "title,author.name", "-t", "0.2", "--score", "html5",
    ]);
    let results = stdout_json(&output);

    assert_eq!(results[0]["refIndex"], json!(2));
    assert_eq!(results[0]["item"]["title"], json!("HTML5"));
    assert!(results[0]["score"].is_number());
    assert!(results[0].get("matches").is_none());
}

#[test]
fn test_index_then_search_with_snapshot() {
    let dir = TempDir::new().unwrap();
    let books = write_collection(dir.path(), "books.json", &book_docs());
    let snapshot = dir.path().join("books.fzex");

    let built = fuzzex(&["index", "-i", arg(&books), "-o", arg(&snapshot), "-k", "title,author.name"]);
    assert!(built.status.success());
    assert!(snapshot.exists());

    let output = fuzzex(&[
        "search", "-i", arg(&books), "--index", arg(&snapshot), "-k", "title,author.name", "-t", "0.2",
        "hamilton",
    ]);
    assert_eq!(stdout_json(&output)[0]["refIndex"], json!(1));
}

#[test]
fn test_snapshot_for_other_keys_fails() {
    let dir = TempDir::new().unwrap();
    let books = write_collection(dir.path(), "books.json", &book_docs());
    let snapshot = dir.path().join("books.fzex");

    assert!(fuzzex(&["index", "-i", arg(&books), "-o", arg(&snapshot), "-k", "title"])
        .status
        .success());

    let output = fuzzex(&[
        "search", "-i", arg(&books), "--index", arg(&snapshot), "-k", "author.name", "hamilton",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Incorrect 'index' type"));
}

#[test]
fn test_logical_query() {
    let dir = TempDir::new().unwrap();
    let books = write_collection(dir.path(), "books.json", &book_docs());

    let output = fuzzex(&[
        "search", "-i", arg(&books), "-k", "title,author.name", "-t", "0.2", "--logical",
        r#"{"$or": [{"title": "html5"}, {"author.name": "hamilton"}]}"#,
    ]);
    let mut found: Vec<u64> = stdout_json(&output)
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["refIndex"].as_u64().unwrap())
        .collect();
    found.sort_unstable();
    assert_eq!(found, vec![1, 2]);
}

#[test]
fn test_fold_diacritics() {
    let dir = TempDir::new().unwrap();
    let docs = write_collection(dir.path(), "cafes.json", &[json!({"name": "Café Olé"})]);

    let plain = fuzzex(&["search", "-i", arg(&docs), "-k", "name", "-t", "0", "cafe ole"]);
    assert_eq!(stdout_json(&plain), json!([]));

    let folded = fuzzex(&[
        "search", "-i", arg(&docs), "-k", "name", "-t", "0", "--fold-diacritics", "cafe ole",
    ]);
    assert_eq!(stdout_json(&folded)[0]["refIndex"], json!(0));
}

#[test]
fn test_fold_diacritics_leaves_plain_strings_alone() {
    let dir = TempDir::new().unwrap();
    let docs = write_collection(dir.path(), "names.json", &[json!("Café Olé")]);

    for extra in [&[][..], &["--fold-diacritics"][..]] {
        let mut args = vec!["search", "-i", arg(&docs), "-t", "0"];
        args.extend_from_slice(extra);
        args.push("Café Olé");
        let results = stdout_json(&fuzzex(&args));
        assert_eq!(results, json!([{"item": "Café Olé", "refIndex": 0}]), "{:?}", extra);
    }
}

#[test]
fn test_inspect_snapshot() {
    let dir = TempDir::new().unwrap();
    let words = write_collection(dir.path(), "words.json", &word_docs());
    let snapshot = dir.path().join("words.fzex");
    assert!(fuzzex(&["index", "-i", arg(&words), "-o", arg(&snapshot)]).status.success());

    let output = fuzzex(&["inspect", arg(&snapshot)]);
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("SNAPSHOT"));
    assert!(text.contains("Records:  3 (3 text, 0 keyed)"));
}

#[test]
fn test_inspect_rejects_garbage() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbage.fzex");
    std::fs::write(&path, b"not a snapshot at all").unwrap();

    let output = fuzzex(&["inspect", arg(&path)]);
    assert!(!output.status.success());
}
