// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The bit-parallel search over one pattern chunk.
//!
//! Two phases:
//!
//! 1. **Exact pre-pass.** Every literal occurrence tightens the score threshold
//!    and seeds the match mask. Cheap, and it makes the fuzzy phase prune harder.
//! 2. **Fuzzy pass.** For `e = 0, 1, 2, ...` errors, binary-search how far from
//!    the expected location a match could still beat the best score, then run
//!    the bitap recurrence right-to-left over that window. Stop as soon as one
//!    more error could not possibly improve on what we have.

use std::collections::HashMap;

use super::score::{convert_mask_to_indices, Scorer};
use super::{MAX_BITS, MIN_SCORE};
use crate::error::{FuseError, Result};
use crate::options::MatchOptions;
use crate::types::MatchResult;
use crate::utils::index_of;

/// A pattern slice that fits in one machine word, with its character masks.
///
/// Construction is the length check: holding a `PatternChunk` proves
/// `1 <= len <= MAX_BITS`.
#[derive(Debug, Clone)]
pub struct PatternChunk {
    pattern: Vec<char>,
    alphabet: HashMap<char, u32>,
    start_index: usize,
}

impl PatternChunk {
    pub fn new(pattern: Vec<char>, start_index: usize) -> Result<Self> {
        if pattern.len() > MAX_BITS {
            return Err(FuseError::PatternTooLong(pattern.len()));
        }

        let len = pattern.len();
        let mut alphabet: HashMap<char, u32> = HashMap::with_capacity(len);
        for (i, &c) in pattern.iter().enumerate() {
            *alphabet.entry(c).or_insert(0) |= 1 << (len - i - 1);
        }

        Ok(Self {
            pattern,
            alphabet,
            start_index,
        })
    }

    pub fn pattern(&self) -> &[char] {
        &self.pattern
    }

    /// Offset of this chunk within the full pattern.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    #[inline]
    fn char_mask(&self, c: Option<&char>) -> u32 {
        c.and_then(|c| self.alphabet.get(c)).copied().unwrap_or(0)
    }
}

/// Approximate search for `chunk` in `text` around `location`.
pub fn search(
    text: &[char],
    chunk: &PatternChunk,
    location: usize,
    options: &MatchOptions,
) -> MatchResult {
    let pattern = chunk.pattern();
    let pattern_len = pattern.len();
    if pattern_len == 0 {
        return MatchResult::miss();
    }

    let text_len = text.len();
    let expected_location = location.min(text_len);
    let scorer = Scorer {
        pattern_len,
        expected_location,
        distance: options.distance,
        ignore_location: options.ignore_location,
    };

    // Highest score beyond which we give up
    let mut current_threshold = options.threshold;

    let compute_matches = options.min_match_char_length > 1 || options.include_matches;
    let mut match_mask = if compute_matches {
        vec![false; text_len]
    } else {
        Vec::new()
    };

    let mut from = expected_location;
    while let Some(index) = index_of(text, pattern, from) {
        let score = scorer.score(0, index);
        current_threshold = current_threshold.min(score);
        from = index + pattern_len;

        if compute_matches {
            match_mask[index..index + pattern_len].fill(true);
        }
    }

    let mut best_location: Option<usize> = None;
    let mut last_bit_arr: Vec<u32> = Vec::new();
    let mut final_score = 1.0;
    let mut bin_max = pattern_len + text_len;
    let mask: u32 = 1 << (pattern_len - 1);

    for errors in 0..pattern_len {
        // How far from the expected location can we stray at this error level?
        let mut bin_min = 0;
        let mut bin_mid = bin_max;
        while bin_min < bin_mid {
            let score = scorer.score(errors, expected_location + bin_mid);
            if score <= current_threshold {
                bin_min = bin_mid;
            } else {
                bin_max = bin_mid;
            }
            bin_mid = (bin_max - bin_min) / 2 + bin_min;
        }

        // Next level can only do worse, so this window is its upper bound
        bin_max = bin_mid;

        let mut start = (expected_location as isize - bin_mid as isize + 1).max(1) as usize;
        let finish = if options.find_all_matches {
            text_len
        } else {
            (expected_location + bin_mid).min(text_len) + pattern_len
        };

        let mut bit_arr = vec![0u32; finish + 2];
        bit_arr[finish + 1] = (1u32 << errors) - 1;

        let last = |k: usize| last_bit_arr.get(k).copied().unwrap_or(0);

        let mut j = finish;
        while j >= start {
            let current_location = j - 1;
            let char_match = chunk.char_mask(text.get(current_location));

            if compute_matches && current_location < text_len {
                match_mask[current_location] = char_match != 0;
            }

            // Exact recurrence
            bit_arr[j] = ((bit_arr[j + 1] << 1) | 1) & char_match;

            // One more error: substitution, insertion, deletion
            if errors > 0 {
                bit_arr[j] |= ((last(j + 1) | last(j)) << 1) | 1 | last(j + 1);
            }

            if bit_arr[j] & mask != 0 {
                final_score = scorer.score(errors, current_location);

                if final_score <= current_threshold {
                    current_threshold = final_score;
                    best_location = Some(current_location);

                    // Already passed the expected location, downhill from here
                    if current_location <= expected_location {
                        break;
                    }

                    // Don't stray further left than we are right
                    start = (2 * expected_location as isize - current_location as isize).max(1)
                        as usize;
                }
            }

            j -= 1;
        }

        // No hope for a better match with more errors
        if scorer.score(errors + 1, expected_location) > current_threshold {
            break;
        }

        last_bit_arr = bit_arr;
    }

    let mut result = MatchResult {
        is_match: best_location.is_some(),
        score: f64::max(MIN_SCORE, final_score),
        indices: None,
    };

    if compute_matches {
        let indices = convert_mask_to_indices(&match_mask, options.min_match_char_length);
        if indices.is_empty() {
            result.is_match = false;
        } else if options.include_matches {
            result.indices = Some(indices);
        }
    }

    result
}
