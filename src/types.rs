// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Values that flow between matchers, the engine and callers.
//!
//! | Type           | Produced by        | Consumed by                     |
//! |----------------|--------------------|---------------------------------|
//! | `MatchResult`  | every matcher      | engine, extended/logical search |
//! | `FieldMatch`   | engine             | scoring, formatting             |
//! | `SearchHit`    | engine             | scoring, sorting, formatting    |
//! | `SearchResult` | formatting         | callers                         |

use serde::Serialize;
use serde_json::Value;

use crate::keys::KeyName;

/// Inclusive `[start, end]` character range.
pub type MatchRange = (usize, usize);

/// Outcome of running one matcher over one text.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub is_match: bool,
    /// 0 is a perfect match.
    pub score: f64,
    /// Only populated when the caller asked for match ranges.
    pub indices: Option<Vec<MatchRange>>,
}

impl MatchResult {
    /// The canonical "not found".
    pub fn miss() -> Self {
        Self {
            is_match: false,
            score: 1.0,
            indices: None,
        }
    }
}

/// One matching field value inside a record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    /// Key position; `None` for plain-text collections.
    pub key: Option<usize>,
    pub value: String,
    /// Field-length norm of `value`.
    pub norm: f64,
    pub score: f64,
    pub indices: Vec<MatchRange>,
    /// Element index when the value came out of an array.
    pub ref_index: Option<usize>,
}

/// A matching record before formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// Position in the collection.
    pub idx: usize,
    pub matches: Vec<FieldMatch>,
    /// Aggregate score; filled in once all matches are collected.
    pub score: f64,
}

impl SearchHit {
    pub fn new(idx: usize, matches: Vec<FieldMatch>) -> Self {
        Self {
            idx,
            matches,
            score: 1.0,
        }
    }
}

/// A reported match: ranges inside one field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetail {
    pub indices: Vec<MatchRange>,
    pub value: String,
    /// The key as the caller wrote it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<KeyName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_index: Option<usize>,
}

/// One entry of a search response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub item: &'a Value,
    pub ref_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<MatchDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl SearchResult<'_> {
    /// Detach from the collection borrow.
    pub fn into_owned(self) -> OwnedSearchResult {
        OwnedSearchResult {
            item: self.item.clone(),
            ref_index: self.ref_index,
            matches: self.matches,
            score: self.score,
        }
    }
}

/// [`SearchResult`] holding its own copy of the item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedSearchResult {
    pub item: Value,
    pub ref_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<MatchDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}
