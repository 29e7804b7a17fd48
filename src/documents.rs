// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Title search over a host document store.
//!
//! Two passes:
//!
//! 1. **Keywords.** Split the lower-cased query on spaces and keep every title
//!    that contains all keywords. Order and adjacency do not matter. If this
//!    finds anything, it is the answer, in source order.
//! 2. **Fuzzy fallback.** Otherwise run the fuzzy engine over the configured
//!    fields (title, tags and text by default) with a tight threshold, drop
//!    excluded titles and return the rest best-first.
//!
//! Field values can be pre-transformed by a normalizer, typically a
//! transliteration of Han characters to Latin so that `"dushu"` finds `"读书"`.
//! The long `text` field is never normalized, and neither is anything when the
//! query itself contains Han characters.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::extract::{self, FieldValue, GetFn, NormalizeFn};
use crate::keys::KeySpec;
use crate::options::FuseOptions;
use crate::search::Fuse;
use crate::utils::contains_han;

/// Field searched but never normalized.
pub const TEXT_FIELD: &str = "text";

/// Fields searched when none are configured.
pub const DEFAULT_FIELDS: [&str; 3] = ["title", "tags", TEXT_FIELD];

/// A document the host can hand us.
pub trait TitledItem {
    fn title(&self) -> &str;

    /// Value of a named field, `None` when absent.
    fn field(&self, name: &str) -> Option<FieldValue>;
}

impl TitledItem for Value {
    fn title(&self) -> &str {
        self.get("title").and_then(Value::as_str).unwrap_or("")
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        extract::get(self, &[name.to_string()])
    }
}

#[derive(Clone)]
pub struct DocumentSearchOptions {
    /// Fields for the fuzzy pass. Empty means [`DEFAULT_FIELDS`].
    pub fields: Vec<String>,
    /// Titles containing any of these are dropped from fuzzy results.
    pub exclude: Vec<String>,
    pub threshold: f64,
    pub distance: usize,
    pub min_match_char_length: usize,
    pub normalize: Option<NormalizeFn>,
}

impl Default for DocumentSearchOptions {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            exclude: Vec::new(),
            threshold: 0.3,
            distance: 60,
            min_match_char_length: 1,
            normalize: None,
        }
    }
}

impl fmt::Debug for DocumentSearchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentSearchOptions")
            .field("fields", &self.fields)
            .field("exclude", &self.exclude)
            .field("threshold", &self.threshold)
            .field("distance", &self.distance)
            .field("min_match_char_length", &self.min_match_char_length)
            .field("normalize", &self.normalize.is_some())
            .finish()
    }
}

impl DocumentSearchOptions {
    fn effective_fields(&self) -> Vec<String> {
        if self.fields.is_empty() {
            DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect()
        } else {
            self.fields.clone()
        }
    }
}

/// Titles matching `query`, see the module docs for the two passes.
pub fn search_titles<T: TitledItem>(
    query: &str,
    items: &[T],
    options: &DocumentSearchOptions,
) -> Result<Vec<String>> {
    let lowered: Vec<String> = items.iter().map(|item| item.title().to_lowercase()).collect();

    let query_lower = query.to_lowercase();
    let keywords: Vec<&str> = query_lower.split(' ').filter(|k| !k.is_empty()).collect();
    let exact: Vec<String> = items
        .iter()
        .zip(&lowered)
        .filter(|(_, title)| keywords.iter().all(|k| title.contains(k)))
        .map(|(item, _)| item.title().to_string())
        .collect();

    if !exact.is_empty() {
        tracing::debug!(hits = exact.len(), "keyword pass matched");
        return Ok(exact);
    }

    let fields = options.effective_fields();
    let docs: Vec<Value> = items.iter().map(|item| resolve_fields(item, &fields)).collect();

    let fuse_options = FuseOptions {
        keys: fields.iter().map(|f| KeySpec::from(f.as_str())).collect(),
        threshold: options.threshold,
        distance: options.distance,
        min_match_char_length: options.min_match_char_length,
        include_score: true,
        include_matches: true,
        should_sort: true,
        ..FuseOptions::default()
    };

    let mut builder = Fuse::builder(fuse_options);
    if let Some(normalize) = &options.normalize {
        if !contains_han(query) {
            builder = builder.get_fn(normalizing_getter(normalize.clone()));
        }
    }
    let fuse = builder.build(docs)?;

    let titles: Vec<String> = fuse
        .search(query)?
        .into_iter()
        .filter_map(|result| result.item.get("title").and_then(Value::as_str).map(str::to_string))
        .filter(|title| !options.exclude.iter().any(|ex| title.contains(ex.as_str())))
        .collect();

    tracing::debug!(hits = titles.len(), "fuzzy pass matched");
    Ok(titles)
}

/// Getter that normalizes every field except [`TEXT_FIELD`].
fn normalizing_getter(normalize: NormalizeFn) -> GetFn {
    Arc::new(move |record: &Value, path: &[String]| {
        let value = extract::get(record, path)?;
        if path.first().map(String::as_str) == Some(TEXT_FIELD) {
            Some(value)
        } else {
            Some(value.map_text(&*normalize))
        }
    })
}

/// Flatten the item into `{field: value}` so the engine can own it.
fn resolve_fields<T: TitledItem>(item: &T, fields: &[String]) -> Value {
    let mut map = Map::new();
    map.insert("title".to_string(), Value::String(item.title().to_string()));
    for field in fields {
        if field == "title" {
            continue;
        }
        if let Some(value) = item.field(field) {
            map.insert(field.clone(), to_json(value));
        }
    }
    Value::Object(map)
}

fn to_json(value: FieldValue) -> Value {
    match value {
        FieldValue::Text(text) => Value::String(text),
        FieldValue::List(items) => Value::Array(items.into_iter().map(to_json).collect()),
    }
}

/// Wrap a Han → Latin transliterator: text with Han characters becomes
/// `"<latin> <original>"`, anything else passes through untouched.
pub fn transliterate_han(transliterate: NormalizeFn) -> NormalizeFn {
    Arc::new(move |text: &str| {
        if contains_han(text) {
            format!("{} {}", transliterate(text), text)
        } else {
            text.to_string()
        }
    })
}
