// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole-pattern bitap search: chunking, case folding, exact short-circuit.

use super::matcher::{search, PatternChunk};
use super::MAX_BITS;
use crate::error::Result;
use crate::options::MatchOptions;
use crate::types::MatchResult;
use crate::utils::fold_case;

/// A compiled fuzzy pattern.
///
/// Patterns longer than [`MAX_BITS`] are cut into word-sized chunks. When the
/// length is not a multiple of the word size, the last chunk is the final
/// `MAX_BITS` characters (overlapping its predecessor) so every chunk is full.
#[derive(Debug, Clone)]
pub struct BitapSearch {
    pattern: Vec<char>,
    chunks: Vec<PatternChunk>,
    options: MatchOptions,
}

impl BitapSearch {
    pub fn new(pattern: &str, options: MatchOptions) -> Result<Self> {
        let pattern: Vec<char> = fold_case(pattern, options.is_case_sensitive)
            .chars()
            .collect();
        let len = pattern.len();
        let mut chunks = Vec::new();

        if len > MAX_BITS {
            let remainder = len % MAX_BITS;
            let end = len - remainder;
            for start in (0..end).step_by(MAX_BITS) {
                chunks.push(PatternChunk::new(pattern[start..start + MAX_BITS].to_vec(), start)?);
            }
            if remainder > 0 {
                let start = len - MAX_BITS;
                chunks.push(PatternChunk::new(pattern[start..].to_vec(), start)?);
            }
        } else if len > 0 {
            chunks.push(PatternChunk::new(pattern.clone(), 0)?);
        }

        Ok(Self {
            pattern,
            chunks,
            options,
        })
    }

    pub fn chunks(&self) -> &[PatternChunk] {
        &self.chunks
    }

    pub fn search_in(&self, text: &str) -> MatchResult {
        let text: Vec<char> = fold_case(text, self.options.is_case_sensitive)
            .chars()
            .collect();

        if self.pattern == text {
            return MatchResult {
                is_match: true,
                score: 0.0,
                indices: self
                    .options
                    .include_matches
                    .then(|| full_range(text.len()).into_iter().collect()),
            };
        }

        let mut all_indices = Vec::new();
        let mut total_score = 0.0;
        let mut has_matches = false;

        for chunk in &self.chunks {
            let result = search(
                &text,
                chunk,
                self.options.location.saturating_add(chunk.start_index()),
                &self.options,
            );

            total_score += result.score;
            if result.is_match {
                has_matches = true;
                if let Some(indices) = result.indices {
                    all_indices.extend(indices);
                }
            }
        }

        if !has_matches {
            return MatchResult::miss();
        }

        MatchResult {
            is_match: true,
            score: total_score / self.chunks.len() as f64,
            indices: self.options.include_matches.then_some(all_indices),
        }
    }
}

fn full_range(len: usize) -> Option<(usize, usize)> {
    (len > 0).then(|| (0, len - 1))
}
