// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Aggregate relevance of a hit.
//!
//! Each field match contributes `score ^ (weight * norm)` and the hit's score
//! is the product:
//!
//! ```text
//! total = Π  s_i ^ (w_i · n_i)
//! ```
//!
//! Match scores are normally in `[0, 1]`, so a heavier key or a shorter field
//! (larger norm) pushes the product down faster. Lower is better.
//!
//! An exact match on a weighted key scores `f64::EPSILON` instead of 0 so the
//! other fields still separate hits. Plain-text collections have no keys and
//! keep the literal 0, which zeroes the whole product: exact text matches all
//! tie at 0.

use crate::keys::Key;
use crate::types::{FieldMatch, SearchHit};

/// Score of one hit from its matches.
pub fn aggregate_score(matches: &[FieldMatch], keys: &[Key], ignore_field_norm: bool) -> f64 {
    matches.iter().fold(1.0, |total, m| {
        let weight = m.key.and_then(|k| keys.get(k)).map(|key| key.weight);
        let score = match weight {
            Some(_) if m.score == 0.0 => f64::EPSILON,
            _ => m.score,
        };
        let norm = if ignore_field_norm { 1.0 } else { m.norm };
        total * score.powf(weight.unwrap_or(1.0) * norm)
    })
}

/// Fill in `score` on every hit.
pub fn apply_scores(hits: &mut [SearchHit], keys: &[Key], ignore_field_norm: bool) {
    for hit in hits {
        hit.score = aggregate_score(&hit.matches, keys, ignore_field_norm);
    }
}
