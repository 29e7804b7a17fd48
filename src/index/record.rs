// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-document index entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A searchable string with its field-length norm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedText {
    pub value: String,
    pub norm: f64,
}

/// One element of an array-valued field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubRecord {
    pub value: String,
    pub norm: f64,
    /// Position of the element within the array it came from.
    pub ref_index: usize,
}

/// What one key resolved to for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldEntry {
    Single(IndexedText),
    Multi(Vec<SubRecord>),
}

/// The indexed form of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum IndexRecord {
    /// A plain-string document. Blank strings keep their slot with no text.
    Text {
        idx: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<IndexedText>,
    },
    /// A structured document, keyed by key position.
    Fields {
        idx: usize,
        #[serde(with = "key_positions")]
        fields: BTreeMap<usize, FieldEntry>,
    },
}

impl IndexRecord {
    /// Position of the document in the collection.
    pub fn idx(&self) -> usize {
        match self {
            IndexRecord::Text { idx, .. } | IndexRecord::Fields { idx, .. } => *idx,
        }
    }

    pub(crate) fn shift_down(&mut self) {
        match self {
            IndexRecord::Text { idx, .. } | IndexRecord::Fields { idx, .. } => *idx -= 1,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, IndexRecord::Text { .. })
    }

    /// Entry for the key at `key_index`, structured documents only.
    pub fn field(&self, key_index: usize) -> Option<&FieldEntry> {
        match self {
            IndexRecord::Fields { fields, .. } => fields.get(&key_index),
            IndexRecord::Text { .. } => None,
        }
    }
}

/// Key positions travel as strings: the `kind` tag makes serde buffer the
/// record, and buffered map keys only deserialize as strings.
mod key_positions {
    use std::collections::BTreeMap;

    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::FieldEntry;

    pub fn serialize<S: Serializer>(
        fields: &BTreeMap<usize, FieldEntry>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(fields.iter().map(|(k, v)| (k.to_string(), v)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<usize, FieldEntry>, D::Error> {
        BTreeMap::<String, FieldEntry>::deserialize(deserializer)?
            .into_iter()
            .map(|(k, v)| k.parse::<usize>().map(|k| (k, v)).map_err(D::Error::custom))
            .collect()
    }
}
