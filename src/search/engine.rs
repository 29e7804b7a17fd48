// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: owns the documents and their index.
//!
//! A query takes one of three routes:
//!
//! | Query  | Collection | Route                                          |
//! |--------|------------|------------------------------------------------|
//! | text   | strings    | one searcher over every indexed string         |
//! | text   | objects    | one searcher over every key of every record    |
//! | object | any        | logical expression, see [`crate::logical`]     |
//!
//! Hits are then scored, sorted, truncated and formatted.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use super::{create_searcher, default_factories, find_matches, format, FormatOptions, SearcherFactory};
use crate::error::{FuseError, Result};
use crate::extract::{FieldGetter, GetFn, NormalizeFn};
use crate::index::{FuseIndex, IndexRecord};
use crate::keys::KeyStore;
use crate::logical::Expression;
use crate::options::FuseOptions;
use crate::scoring::{apply_scores, default_sort_fn, SortFn};
use crate::types::{FieldMatch, SearchHit, SearchResult};

/// A search query.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Fuzzy (or extended) pattern.
    Text(String),
    /// `$and` / `$or` tree.
    Logical(Value),
}

impl From<&str> for Query {
    fn from(pattern: &str) -> Self {
        Query::Text(pattern.to_string())
    }
}

impl From<String> for Query {
    fn from(pattern: String) -> Self {
        Query::Text(pattern)
    }
}

impl From<Value> for Query {
    fn from(value: Value) -> Self {
        match value {
            Value::String(pattern) => Query::Text(pattern),
            other => Query::Logical(other),
        }
    }
}

/// Per-call search options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Keep at most this many results.
    pub limit: Option<usize>,
}

impl SearchOptions {
    pub fn limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }
}

/// Fuzzy search over an in-memory collection.
///
/// ```
/// use fuzzex::{Fuse, FuseOptions};
/// use serde_json::json;
///
/// let docs = vec![json!("hello world"), json!("help"), json!("held")];
/// let fuse = Fuse::new(docs, FuseOptions::default()).unwrap();
/// let results = fuse.search("hel").unwrap();
/// assert_eq!(results.len(), 3);
/// ```
pub struct Fuse {
    docs: Vec<Value>,
    options: FuseOptions,
    key_store: KeyStore,
    index: FuseIndex,
    getter: FieldGetter,
    sort_fn: SortFn,
    factories: Vec<Arc<dyn SearcherFactory>>,
}

impl fmt::Debug for Fuse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fuse")
            .field("docs", &self.docs.len())
            .field("options", &self.options)
            .field("index", &self.index.size())
            .field("factories", &self.factories.len())
            .finish()
    }
}

impl Fuse {
    /// Build an engine and index `docs`.
    pub fn new(docs: Vec<Value>, options: FuseOptions) -> Result<Self> {
        FuseBuilder::new(options).build(docs)
    }

    /// Build an engine over a pre-built index.
    ///
    /// Fails with [`FuseError::IncorrectIndexType`] when the index was built for
    /// other keys, another collection shape or another number of documents.
    pub fn with_index(docs: Vec<Value>, options: FuseOptions, index: FuseIndex) -> Result<Self> {
        FuseBuilder::new(options).index(index).build(docs)
    }

    pub fn builder(options: FuseOptions) -> FuseBuilder {
        FuseBuilder::new(options)
    }

    /// Replace the collection, indexing it unless an index is supplied.
    pub fn set_collection(&mut self, docs: Vec<Value>, index: Option<FuseIndex>) -> Result<()> {
        let index = match index {
            Some(mut index) => {
                check_index(&index, &self.key_store, &docs)?;
                index.set_getter(self.getter.clone());
                index
            }
            None => {
                let mut index = FuseIndex::new(self.key_store.keys().to_vec(), self.getter.clone());
                index.create(&docs);
                index
            }
        };
        self.docs = docs;
        self.index = index;
        Ok(())
    }

    /// Append a document. `null` is ignored.
    pub fn add(&mut self, doc: Value) {
        if doc.is_null() {
            return;
        }
        self.index.add(&doc);
        self.docs.push(doc);
    }

    /// Remove every document `predicate(doc, position)` accepts and return
    /// them in collection order. The position handed to `predicate` is the
    /// current one and shifts down as earlier documents are removed.
    pub fn remove<P>(&mut self, mut predicate: P) -> Vec<Value>
    where
        P: FnMut(&Value, usize) -> bool,
    {
        let mut removed = Vec::new();
        let mut i = 0;
        while i < self.docs.len() {
            if predicate(&self.docs[i], i) {
                if let Some(doc) = self.remove_at(i) {
                    removed.push(doc);
                }
            } else {
                i += 1;
            }
        }
        removed
    }

    /// Remove the document at `idx`.
    pub fn remove_at(&mut self, idx: usize) -> Option<Value> {
        if idx >= self.docs.len() {
            return None;
        }
        self.index.remove_at(idx);
        Some(self.docs.remove(idx))
    }

    pub fn index(&self) -> &FuseIndex {
        &self.index
    }

    pub fn docs(&self) -> &[Value] {
        &self.docs
    }

    pub fn options(&self) -> &FuseOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Search with no limit.
    pub fn search<Q: Into<Query>>(&self, query: Q) -> Result<Vec<SearchResult<'_>>> {
        self.search_with(query, SearchOptions::default())
    }

    pub fn search_with<Q: Into<Query>>(
        &self,
        query: Q,
        search_options: SearchOptions,
    ) -> Result<Vec<SearchResult<'_>>> {
        let started = Instant::now();
        let query = query.into();

        let mut hits = match &query {
            Query::Text(pattern) if self.is_text_collection() => self.search_text_list(pattern)?,
            Query::Text(pattern) => self.search_object_list(pattern)?,
            Query::Logical(tree) => self.search_logical(tree)?,
        };

        apply_scores(&mut hits, self.index.keys(), self.options.ignore_field_norm);

        if self.options.should_sort {
            let sort_fn = &self.sort_fn;
            hits.sort_by(|a, b| sort_fn(a, b));
        }

        if let Some(limit) = search_options.limit {
            hits.truncate(limit);
        }

        tracing::debug!(
            hits = hits.len(),
            docs = self.docs.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "search finished"
        );

        Ok(format(
            hits,
            &self.docs,
            self.index.keys(),
            FormatOptions {
                include_matches: self.options.include_matches,
                include_score: self.options.include_score,
            },
        ))
    }

    fn is_text_collection(&self) -> bool {
        self.docs.first().is_some_and(Value::is_string)
    }

    fn search_text_list(&self, pattern: &str) -> Result<Vec<SearchHit>> {
        let searcher = create_searcher(pattern, &self.options, &self.factories)?;
        let mut hits = Vec::new();

        for record in self.index.records() {
            let IndexRecord::Text { idx, text: Some(text) } = record else {
                continue;
            };
            let result = searcher.search_in(&text.value);
            if result.is_match {
                let found = FieldMatch {
                    key: None,
                    value: text.value.clone(),
                    norm: text.norm,
                    score: result.score,
                    indices: result.indices.unwrap_or_default(),
                    ref_index: None,
                };
                hits.push(SearchHit::new(*idx, vec![found]));
            }
        }

        Ok(hits)
    }

    fn search_object_list(&self, pattern: &str) -> Result<Vec<SearchHit>> {
        let searcher = create_searcher(pattern, &self.options, &self.factories)?;
        let mut hits = Vec::new();

        for record in self.index.records() {
            let IndexRecord::Fields { idx, fields } = record else {
                continue;
            };
            let matches: Vec<FieldMatch> = fields
                .iter()
                .flat_map(|(&slot, entry)| find_matches(Some(slot), entry, searcher.as_ref()))
                .collect();
            if !matches.is_empty() {
                hits.push(SearchHit::new(*idx, matches));
            }
        }

        Ok(hits)
    }

    fn search_logical(&self, tree: &Value) -> Result<Vec<SearchHit>> {
        let expression = Expression::parse(tree, &self.options, &self.factories)?;
        tracing::trace!(leaves = expression.leaf_count(), "logical query compiled");

        let hits = self
            .index
            .records()
            .iter()
            .filter(|record| !record.is_text())
            .filter_map(|record| {
                let matches = expression.evaluate(&self.index, record);
                (!matches.is_empty()).then(|| SearchHit::new(record.idx(), matches))
            })
            .collect();

        Ok(hits)
    }
}

/// Engine construction with the behaviour that cannot live in [`FuseOptions`].
pub struct FuseBuilder {
    options: FuseOptions,
    getter: FieldGetter,
    normalize: Option<NormalizeFn>,
    sort_fn: SortFn,
    factories: Vec<Arc<dyn SearcherFactory>>,
    index: Option<FuseIndex>,
}

impl FuseBuilder {
    pub fn new(options: FuseOptions) -> Self {
        Self {
            options,
            getter: FieldGetter::default(),
            normalize: None,
            sort_fn: default_sort_fn(),
            factories: default_factories(),
            index: None,
        }
    }

    /// Custom field getter.
    pub fn get_fn(mut self, get_fn: GetFn) -> Self {
        self.getter = FieldGetter(get_fn);
        self
    }

    /// Pre-transform every extracted field value (e.g. transliteration).
    pub fn normalize(mut self, normalize: NormalizeFn) -> Self {
        self.normalize = Some(normalize);
        self
    }

    pub fn sort_fn(mut self, sort_fn: SortFn) -> Self {
        self.sort_fn = sort_fn;
        self
    }

    /// Try `factory` after the ones already registered.
    pub fn factory(mut self, factory: Arc<dyn SearcherFactory>) -> Self {
        self.factories.push(factory);
        self
    }

    /// Replace the factory list. Bitap stays the fallback.
    pub fn factories(mut self, factories: Vec<Arc<dyn SearcherFactory>>) -> Self {
        self.factories = factories;
        self
    }

    /// Use a pre-built index instead of indexing the documents.
    pub fn index(mut self, index: FuseIndex) -> Self {
        self.index = Some(index);
        self
    }

    pub fn build(self, docs: Vec<Value>) -> Result<Fuse> {
        if self.options.use_extended_search && !cfg!(feature = "extended-search") {
            return Err(FuseError::ExtendedSearchUnavailable);
        }

        let key_store = KeyStore::new(&self.options.keys)?;
        let getter = match self.normalize {
            Some(normalize) => self.getter.normalized(normalize),
            None => self.getter,
        };

        let index = match self.index {
            Some(mut index) => {
                check_index(&index, &key_store, &docs)?;
                index.set_getter(getter.clone());
                index
            }
            None => {
                let mut index = FuseIndex::new(key_store.keys().to_vec(), getter.clone());
                index.create(&docs);
                index
            }
        };

        tracing::debug!(
            docs = docs.len(),
            keys = key_store.len(),
            factories = self.factories.len(),
            "engine ready"
        );

        Ok(Fuse {
            docs,
            options: self.options,
            key_store,
            index,
            getter,
            sort_fn: self.sort_fn,
            factories: self.factories,
        })
    }
}

/// Normalized weights survive a snapshot round trip up to float noise.
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Does `index` fit these keys (ids, order and weights) and documents?
fn check_index(index: &FuseIndex, key_store: &KeyStore, docs: &[Value]) -> Result<()> {
    let same_keys = index.keys().len() == key_store.len()
        && index
            .keys()
            .iter()
            .zip(key_store.keys())
            .all(|(ours, theirs)| {
                ours.id == theirs.id && (ours.weight - theirs.weight).abs() < WEIGHT_TOLERANCE
            });
    if !same_keys {
        tracing::warn!("index keys differ from engine keys");
        return Err(FuseError::IncorrectIndexType);
    }

    if index.size() != docs.len() {
        tracing::warn!(index = index.size(), docs = docs.len(), "index size differs from collection");
        return Err(FuseError::IncorrectIndexType);
    }

    let text_mode = docs.first().is_some_and(Value::is_string);
    if index.records().iter().any(|r| r.is_text() != text_mode) {
        tracing::warn!(text_mode, "index record kind differs from collection");
        return Err(FuseError::IncorrectIndexType);
    }

    Ok(())
}
