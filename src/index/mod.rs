// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The per-document index.
//!
//! Every document gets one [`IndexRecord`], in collection order, holding the
//! flattened leaf strings of each key plus their field-length norms. Searches
//! never touch the source documents again; they only read records.
//!
//! Positions are kept contiguous: `records[i].idx() == i` after every
//! mutation. `remove_at` is O(n) because it renumbers everything after the
//! removed slot.

mod norm;
mod record;
pub mod snapshot;

pub use norm::FieldNorm;
pub use record::*;
pub use snapshot::IndexSnapshot;

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use serde_json::Value;

use crate::contracts::check_positions_contiguous;
use crate::error::{FuseError, Result};
use crate::extract::{FieldGetter, FieldValue};
use crate::keys::{Key, KeySpec, KeyStore};

#[derive(Debug, Clone, Default)]
pub struct FuseIndex {
    keys: Vec<Key>,
    key_map: HashMap<String, usize>,
    records: Vec<IndexRecord>,
    norm: FieldNorm,
    getter: FieldGetter,
    is_created: bool,
}

impl FuseIndex {
    /// An empty index over `keys`, reading fields with `getter`.
    pub fn new(keys: Vec<Key>, getter: FieldGetter) -> Self {
        let key_map = keys
            .iter()
            .enumerate()
            .map(|(slot, key)| (key.id.clone(), slot))
            .collect();
        Self {
            keys,
            key_map,
            records: Vec::new(),
            norm: FieldNorm::new(),
            getter,
            is_created: false,
        }
    }

    /// Rebuild from a snapshot without re-reading any document.
    pub fn parse(snapshot: IndexSnapshot, getter: FieldGetter) -> Self {
        let mut index = Self::new(snapshot.keys, getter);
        index.records = snapshot.records;
        index.is_created = true;
        check_positions_contiguous(&index.records);
        index
    }

    /// Index every document. No-op when already built or `docs` is empty.
    ///
    /// The first document decides the mode: a string means the whole
    /// collection is plain text.
    pub fn create(&mut self, docs: &[Value]) {
        if self.is_created || docs.is_empty() {
            return;
        }
        let started = Instant::now();
        self.is_created = true;

        let text_mode = docs[0].is_string();
        self.records.reserve(docs.len());
        for (idx, doc) in docs.iter().enumerate() {
            let record = if text_mode {
                self.text_record(doc, idx)
            } else {
                self.fields_record(doc, idx)
            };
            self.records.push(record);
        }

        self.norm.clear();
        check_positions_contiguous(&self.records);
        tracing::debug!(
            records = self.records.len(),
            keys = self.keys.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "index created"
        );
    }

    /// Append one document at the next position.
    pub fn add(&mut self, doc: &Value) {
        let idx = self.size();
        let record = if doc.is_string() {
            self.text_record(doc, idx)
        } else {
            self.fields_record(doc, idx)
        };
        self.records.push(record);
        tracing::trace!(idx, "document indexed");
    }

    /// Drop the record at `idx` and shift everything after it down by one.
    pub fn remove_at(&mut self, idx: usize) {
        if idx >= self.records.len() {
            return;
        }
        self.records.remove(idx);
        for record in &mut self.records[idx..] {
            record.shift_down();
        }
        check_positions_contiguous(&self.records);
        tracing::trace!(idx, remaining = self.records.len(), "record removed");
    }

    /// Indexed entry of `record` for the key with id `key_id`.
    pub fn value_for_key<'a>(&self, record: &'a IndexRecord, key_id: &str) -> Option<&'a FieldEntry> {
        self.key_map
            .get(key_id)
            .and_then(|&slot| record.field(slot))
    }

    /// Position of a key id among the keys.
    pub fn key_index(&self, key_id: &str) -> Option<usize> {
        self.key_map.get(key_id).copied()
    }

    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn records(&self) -> &[IndexRecord] {
        &self.records
    }

    pub fn getter(&self) -> &FieldGetter {
        &self.getter
    }

    /// Read documents added from now on with `getter`.
    pub fn set_getter(&mut self, getter: FieldGetter) {
        self.getter = getter;
    }

    pub fn is_created(&self) -> bool {
        self.is_created
    }

    pub fn to_snapshot(&self) -> IndexSnapshot {
        IndexSnapshot {
            keys: self.keys.clone(),
            records: self.records.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_snapshot())?)
    }

    /// Parse the JSON produced by [`FuseIndex::to_json`].
    pub fn from_json(json: &str, getter: FieldGetter) -> Result<Self> {
        let snapshot: IndexSnapshot =
            serde_json::from_str(json).map_err(|_| FuseError::IncorrectIndexType)?;
        Ok(Self::parse(snapshot, getter))
    }

    /// Framed binary snapshot, see [`snapshot`].
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        snapshot::encode(&self.to_snapshot())
    }

    pub fn from_bytes(bytes: &[u8], getter: FieldGetter) -> Result<Self> {
        Ok(Self::parse(snapshot::decode(bytes)?, getter))
    }

    fn text_record(&mut self, doc: &Value, idx: usize) -> IndexRecord {
        let text = doc
            .as_str()
            .filter(|s| !is_blank(s))
            .map(|s| IndexedText {
                value: s.to_string(),
                norm: self.norm.get(s),
            });
        IndexRecord::Text { idx, text }
    }

    fn fields_record(&mut self, doc: &Value, idx: usize) -> IndexRecord {
        let mut fields = BTreeMap::new();

        for (slot, key) in self.keys.iter().enumerate() {
            let entry = match self.getter.get(doc, &key.path) {
                None => continue,
                Some(FieldValue::Text(value)) => {
                    if is_blank(&value) {
                        continue;
                    }
                    let norm = self.norm.get(&value);
                    FieldEntry::Single(IndexedText { value, norm })
                }
                Some(FieldValue::List(items)) => FieldEntry::Multi(flatten(items, &mut self.norm)),
            };
            fields.insert(slot, entry);
        }

        IndexRecord::Fields { idx, fields }
    }
}

/// Flatten a (possibly nested) list into sub-records, in order.
///
/// Each sub-record remembers its position inside the innermost list that
/// held it. Blank strings are skipped.
fn flatten(items: Vec<FieldValue>, norm: &mut FieldNorm) -> Vec<SubRecord> {
    let mut out = Vec::new();
    let mut stack: Vec<(usize, FieldValue)> = items.into_iter().enumerate().rev().collect();

    while let Some((ref_index, item)) = stack.pop() {
        match item {
            FieldValue::Text(value) => {
                if !is_blank(&value) {
                    let n = norm.get(&value);
                    out.push(SubRecord {
                        value,
                        norm: n,
                        ref_index,
                    });
                }
            }
            FieldValue::List(nested) => {
                stack.extend(nested.into_iter().enumerate().rev());
            }
        }
    }

    out
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Build an index over `docs` for `keys`.
pub fn create_index(keys: &[KeySpec], docs: &[Value], getter: FieldGetter) -> Result<FuseIndex> {
    let store = KeyStore::new(keys)?;
    let mut index = FuseIndex::new(store.keys().to_vec(), getter);
    index.create(docs);
    Ok(index)
}

/// Rebuild an index from its JSON snapshot.
pub fn parse_index(json: &str, getter: FieldGetter) -> Result<FuseIndex> {
    FuseIndex::from_json(json, getter)
}
