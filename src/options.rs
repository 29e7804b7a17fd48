// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! `FuseOptions` is plain data so it can be loaded from JSON and shared between
//! the CLI and library callers. Behaviour that cannot be data (custom field
//! getters, sort comparators, normalizers) is attached via [`crate::FuseBuilder`].
//!
//! Defaults:
//!
//! | Option               | Default | Meaning                                          |
//! |----------------------|---------|--------------------------------------------------|
//! | `isCaseSensitive`    | false   | Lower-case pattern and text before matching      |
//! | `includeScore`       | false   | Attach the aggregate score to each result        |
//! | `includeMatches`     | false   | Attach matched character ranges                  |
//! | `shouldSort`         | true    | Sort by score, then by position                  |
//! | `location`           | 0       | Where in the text the pattern is expected        |
//! | `threshold`          | 0.6     | 0.0 = perfect match only, 1.0 = anything         |
//! | `distance`           | 100     | How far from `location` a match may stray        |
//! | `findAllMatches`     | false   | Keep scanning after a perfect match              |
//! | `minMatchCharLength` | 1       | Shortest run of matched characters reported      |
//! | `useExtendedSearch`  | false   | Parse the query with the token grammar           |
//! | `ignoreLocation`     | false   | Score on errors only                             |
//! | `ignoreFieldNorm`    | false   | Skip the `1/sqrt(tokens)` field-length weighting |

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::keys::KeySpec;

/// Default `threshold`.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Default `distance`.
pub const DEFAULT_DISTANCE: usize = 100;

/// All recognized engine options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FuseOptions {
    pub is_case_sensitive: bool,
    pub include_score: bool,
    pub include_matches: bool,
    pub should_sort: bool,
    pub keys: Vec<KeySpec>,
    pub location: usize,
    pub threshold: f64,
    pub distance: usize,
    pub find_all_matches: bool,
    pub min_match_char_length: usize,
    pub use_extended_search: bool,
    pub ignore_location: bool,
    pub ignore_field_norm: bool,
}

impl Default for FuseOptions {
    fn default() -> Self {
        Self {
            is_case_sensitive: false,
            include_score: false,
            include_matches: false,
            should_sort: true,
            keys: Vec::new(),
            location: 0,
            threshold: DEFAULT_THRESHOLD,
            distance: DEFAULT_DISTANCE,
            find_all_matches: false,
            min_match_char_length: 1,
            use_extended_search: false,
            ignore_location: false,
            ignore_field_norm: false,
        }
    }
}

impl FuseOptions {
    /// Options with the given keys and everything else at its default.
    pub fn with_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<KeySpec>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Parse options from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// The subset of options consumed by matchers.
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            location: self.location,
            threshold: self.threshold,
            distance: self.distance,
            include_matches: self.include_matches,
            find_all_matches: self.find_all_matches,
            min_match_char_length: self.min_match_char_length,
            is_case_sensitive: self.is_case_sensitive,
            ignore_location: self.ignore_location,
        }
    }
}

/// Options a single matcher needs. Copied into each compiled matcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    pub location: usize,
    pub threshold: f64,
    pub distance: usize,
    pub include_matches: bool,
    pub find_all_matches: bool,
    pub min_match_char_length: usize,
    pub is_case_sensitive: bool,
    pub ignore_location: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        FuseOptions::default().match_options()
    }
}
