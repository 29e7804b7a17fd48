// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bitap scoring and match-mask collapsing.

use crate::types::MatchRange;

/// Score for a candidate alignment.
///
/// `errors / pattern_len` measures accuracy; `|expected - current| / distance`
/// measures how far the match strayed. With `distance == 0` any stray at all
/// scores a full mismatch.
pub fn compute_score(
    pattern_len: usize,
    errors: usize,
    current_location: usize,
    expected_location: usize,
    distance: usize,
    ignore_location: bool,
) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    if ignore_location {
        return accuracy;
    }

    let proximity = expected_location.abs_diff(current_location);
    if distance == 0 {
        return if proximity == 0 { accuracy } else { 1.0 };
    }

    accuracy + proximity as f64 / distance as f64
}

/// `compute_score` with the per-search constants bound.
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    pub pattern_len: usize,
    pub expected_location: usize,
    pub distance: usize,
    pub ignore_location: bool,
}

impl Scorer {
    #[inline]
    pub fn score(&self, errors: usize, current_location: usize) -> f64 {
        compute_score(
            self.pattern_len,
            errors,
            current_location,
            self.expected_location,
            self.distance,
            self.ignore_location,
        )
    }
}

/// Collapse a per-character match mask into inclusive runs of at least
/// `min_len` characters.
pub fn convert_mask_to_indices(mask: &[bool], min_len: usize) -> Vec<MatchRange> {
    let mut indices = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, &hit) in mask.iter().enumerate() {
        match (hit, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                if i - start >= min_len {
                    indices.push((start, i - 1));
                }
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        if mask.len() - start >= min_len {
            indices.push((start, mask.len() - 1));
        }
    }

    indices
}
