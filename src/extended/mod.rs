// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Extended search: a small token grammar over the fuzzy matcher.
//!
//! Tokens separated by spaces are AND-ed, groups separated by `|` are OR-ed:
//!
//! ```text
//! ^core go$ | rb$ | py$
//! ```
//!
//! matches texts starting with `core` and ending with `go`, `rb` or `py`.
//! Groups are tried left to right and the first one whose tokens all match
//! wins; its score is the mean of its token scores. See [`matchers`] for the
//! token forms.

pub mod matchers;
pub mod parse;

pub use matchers::{MatchKind, Matcher};

use crate::error::Result;
use crate::options::MatchOptions;
use crate::types::MatchResult;
use crate::utils::fold_case;

/// A compiled extended query.
#[derive(Debug, Clone)]
pub struct ExtendedSearch {
    groups: Vec<Vec<Matcher>>,
    options: MatchOptions,
}

impl ExtendedSearch {
    pub fn new(pattern: &str, options: MatchOptions) -> Result<Self> {
        let pattern = fold_case(pattern, options.is_case_sensitive);
        let mut groups = Vec::new();

        for tokens in parse::split_groups(&pattern) {
            let mut group = Vec::with_capacity(tokens.len());
            for token in tokens {
                if let Some(matcher) = Matcher::from_token(token, options)? {
                    group.push(matcher);
                }
            }
            groups.push(group);
        }

        tracing::trace!(pattern = %pattern, groups = groups.len(), "extended query compiled");
        Ok(Self { groups, options })
    }

    pub fn groups(&self) -> &[Vec<Matcher>] {
        &self.groups
    }

    pub fn search_in(&self, text: &str) -> MatchResult {
        let text = fold_case(text, self.options.is_case_sensitive);

        for group in &self.groups {
            if let Some(result) = self.search_group(group, &text) {
                return result;
            }
        }

        MatchResult::miss()
    }

    /// `Some` only when every token of a non-empty group matched.
    fn search_group(&self, group: &[Matcher], text: &str) -> Option<MatchResult> {
        if group.is_empty() {
            return None;
        }

        let mut total_score = 0.0;
        let mut all_indices = Vec::new();

        for matcher in group {
            let result = matcher.search(text);
            if !result.is_match {
                return None;
            }
            total_score += result.score;

            if self.options.include_matches {
                let indices = result.indices.unwrap_or_default();
                debug_assert!(matcher.kind().is_multi_match() || indices.len() <= 1);
                all_indices.extend(indices);
            }
        }

        Some(MatchResult {
            is_match: true,
            score: total_score / group.len() as f64,
            indices: self.options.include_matches.then_some(all_indices),
        })
    }
}
