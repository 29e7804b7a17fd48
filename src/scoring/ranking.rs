// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering.
//!
//! Default order: ascending score, then ascending collection position. Scores
//! are compared with `total_cmp`, so the order is total even for NaN.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::types::SearchHit;

/// Custom comparator over scored hits.
pub type SortFn = Arc<dyn Fn(&SearchHit, &SearchHit) -> Ordering + Send + Sync>;

/// Compare two hits for ranking.
pub fn compare_hits(a: &SearchHit, b: &SearchHit) -> Ordering {
    a.score.total_cmp(&b.score).then(a.idx.cmp(&b.idx))
}

/// The comparator engines use unless told otherwise.
pub fn default_sort_fn() -> SortFn {
    Arc::new(compare_hits)
}
