// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate matching with the bitap algorithm.
//!
//! Bitap keeps one bit per pattern character in a machine word: bit `k` set at
//! text position `j` means "the first `k+1` pattern characters can be aligned to
//! end at `j`". Shifting and masking the word per text character advances every
//! alignment at once. Allowing `e` errors just means keeping `e+1` such words.
//!
//! The word is 32 bits, so patterns are matched in 32-character chunks. Chunk
//! construction is the only place the length bound is checked; past that point
//! the core can assume it.
//!
//! Lower scores are better:
//!
//! ```text
//! score = errors / pattern_len + |expected_loc - loc| / distance
//! ```

mod matcher;
mod score;
mod searcher;

pub use matcher::{search, PatternChunk};
pub use score::{compute_score, convert_mask_to_indices, Scorer};
pub use searcher::BitapSearch;

/// Machine word size, and therefore the maximum chunk length.
pub const MAX_BITS: usize = 32;

/// Floor for a found-but-imperfect score, so "found" never reads as exact.
pub const MIN_SCORE: f64 = 0.001;
