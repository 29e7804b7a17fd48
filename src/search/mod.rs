// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: matcher selection and the engine that drives it.
//!
//! Every query pattern is compiled into a [`Searcher`]. Which implementation
//! is used is decided by an ordered list of [`SearcherFactory`]s owned by the
//! engine: the first factory whose `condition` accepts the pattern builds the
//! searcher, and plain bitap is the fallback. Nothing is registered globally;
//! callers that want another strategy hand their own list to the builder.

mod engine;
pub mod format;

pub use engine::*;
pub use format::{format, FormatOptions};

use std::fmt;
use std::sync::Arc;

use crate::bitap::BitapSearch;
use crate::error::Result;
use crate::index::FieldEntry;
use crate::options::FuseOptions;
use crate::types::{FieldMatch, MatchResult};

/// A compiled pattern that can be run against texts.
pub trait Searcher: fmt::Debug + Send + Sync {
    fn search_in(&self, text: &str) -> MatchResult;
}

impl Searcher for BitapSearch {
    fn search_in(&self, text: &str) -> MatchResult {
        BitapSearch::search_in(self, text)
    }
}

#[cfg(feature = "extended-search")]
impl Searcher for crate::extended::ExtendedSearch {
    fn search_in(&self, text: &str) -> MatchResult {
        crate::extended::ExtendedSearch::search_in(self, text)
    }
}

/// Strategy for compiling patterns into searchers.
pub trait SearcherFactory: Send + Sync {
    /// Should this factory handle `pattern`?
    fn condition(&self, pattern: &str, options: &FuseOptions) -> bool;

    fn create(&self, pattern: &str, options: &FuseOptions) -> Result<Box<dyn Searcher>>;
}

/// Extended grammar, used when `use_extended_search` is on.
#[cfg(feature = "extended-search")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtendedSearchFactory;

#[cfg(feature = "extended-search")]
impl SearcherFactory for ExtendedSearchFactory {
    fn condition(&self, _pattern: &str, options: &FuseOptions) -> bool {
        options.use_extended_search
    }

    fn create(&self, pattern: &str, options: &FuseOptions) -> Result<Box<dyn Searcher>> {
        Ok(Box::new(crate::extended::ExtendedSearch::new(
            pattern,
            options.match_options(),
        )?))
    }
}

/// Factories every engine starts with.
pub fn default_factories() -> Vec<Arc<dyn SearcherFactory>> {
    #[cfg(feature = "extended-search")]
    {
        vec![Arc::new(ExtendedSearchFactory)]
    }
    #[cfg(not(feature = "extended-search"))]
    {
        Vec::new()
    }
}

/// Compile `pattern` with the first willing factory, else bitap.
pub fn create_searcher(
    pattern: &str,
    options: &FuseOptions,
    factories: &[Arc<dyn SearcherFactory>],
) -> Result<Box<dyn Searcher>> {
    for factory in factories {
        if factory.condition(pattern, options) {
            return factory.create(pattern, options);
        }
    }
    Ok(Box::new(BitapSearch::new(pattern, options.match_options())?))
}

/// Run `searcher` over every text of one indexed field.
pub(crate) fn find_matches(
    key: Option<usize>,
    entry: &FieldEntry,
    searcher: &dyn Searcher,
) -> Vec<FieldMatch> {
    match entry {
        FieldEntry::Single(text) => {
            let result = searcher.search_in(&text.value);
            if !result.is_match {
                return Vec::new();
            }
            vec![FieldMatch {
                key,
                value: text.value.clone(),
                norm: text.norm,
                score: result.score,
                indices: result.indices.unwrap_or_default(),
                ref_index: None,
            }]
        }
        FieldEntry::Multi(subs) => subs
            .iter()
            .filter_map(|sub| {
                let result = searcher.search_in(&sub.value);
                result.is_match.then(|| FieldMatch {
                    key,
                    value: sub.value.clone(),
                    norm: sub.norm,
                    score: result.score,
                    indices: result.indices.unwrap_or_default(),
                    ref_index: Some(sub.ref_index),
                })
            })
            .collect(),
    }
}
