// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hits → caller-facing results.

use serde_json::Value;

use crate::keys::Key;
use crate::types::{MatchDetail, SearchHit, SearchResult};

/// What to attach to each result.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    pub include_matches: bool,
    pub include_score: bool,
}

/// Project hits onto their documents.
///
/// Matches without any character range are not reported. Keys are reported
/// as the caller wrote them.
pub fn format<'a>(
    hits: Vec<SearchHit>,
    docs: &'a [Value],
    keys: &[Key],
    options: FormatOptions,
) -> Vec<SearchResult<'a>> {
    hits.into_iter()
        .filter_map(|hit| {
            let item = docs.get(hit.idx)?;
            let matches = options.include_matches.then(|| {
                hit.matches
                    .into_iter()
                    .filter(|m| !m.indices.is_empty())
                    .map(|m| MatchDetail {
                        key: m.key.and_then(|k| keys.get(k)).map(|key| key.src.clone()),
                        indices: m.indices,
                        value: m.value,
                        ref_index: m.ref_index,
                    })
                    .collect()
            });
            Some(SearchResult {
                item,
                ref_index: hit.idx,
                matches,
                score: options.include_score.then_some(hit.score),
            })
        })
        .collect()
}
