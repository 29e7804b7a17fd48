// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field extraction from structured records.
//!
//! Walks a dotted path through a JSON value. Whenever the walk meets an array it
//! forks: every element continues with the same remaining path, and all leaves
//! land in one flat list in array order (depth-first). Leaves are strings,
//! numbers and booleans, stringified. The walk uses an explicit stack so deeply
//! nested records cannot exhaust the call stack.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// What a key resolves to for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// The path went through no array.
    Text(String),
    /// The path forked at least once. Custom getters may nest lists.
    List(Vec<FieldValue>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::List(_) => None,
        }
    }

    /// Apply `f` to every text leaf.
    pub fn map_text(self, f: &dyn Fn(&str) -> String) -> FieldValue {
        match self {
            FieldValue::Text(text) => FieldValue::Text(f(&text)),
            FieldValue::List(items) => {
                FieldValue::List(items.into_iter().map(|item| item.map_text(f)).collect())
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

/// Pluggable field getter: `(record, path) -> value`.
pub type GetFn = Arc<dyn Fn(&Value, &[String]) -> Option<FieldValue> + Send + Sync>;

/// Opaque `string -> string` pre-transform (e.g. transliteration).
pub type NormalizeFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Named wrapper so options structs holding a getter can still be `Debug`.
#[derive(Clone)]
pub struct FieldGetter(pub GetFn);

impl FieldGetter {
    pub fn get(&self, record: &Value, path: &[String]) -> Option<FieldValue> {
        (self.0)(record, path)
    }

    /// Run every extracted leaf through `normalize`.
    pub fn normalized(self, normalize: NormalizeFn) -> FieldGetter {
        let inner = self.0;
        FieldGetter(Arc::new(move |record: &Value, path: &[String]| {
            inner(record, path).map(|value| value.map_text(&*normalize))
        }))
    }
}

impl Default for FieldGetter {
    fn default() -> Self {
        FieldGetter(Arc::new(get))
    }
}

impl fmt::Debug for FieldGetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldGetter(..)")
    }
}

/// Default getter: resolve `path` inside `record`.
///
/// Returns `None` when nothing was found and the walk never forked.
pub fn get(record: &Value, path: &[String]) -> Option<FieldValue> {
    let mut leaves = Vec::new();
    let mut forked = false;
    let mut stack = vec![(record, 0usize)];

    while let Some((value, depth)) = stack.pop() {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                forked = true;
                // Reverse so the pops come out in array order
                stack.extend(items.iter().rev().map(|item| (item, depth)));
            }
            _ if depth == path.len() => {
                if let Some(text) = stringify(value) {
                    leaves.push(text);
                }
            }
            Value::Object(map) => {
                if let Some(child) = map.get(&path[depth]) {
                    stack.push((child, depth + 1));
                }
            }
            _ => {}
        }
    }

    if forked {
        Some(FieldValue::List(
            leaves.into_iter().map(FieldValue::Text).collect(),
        ))
    } else {
        leaves.into_iter().next().map(FieldValue::Text)
    }
}

fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
