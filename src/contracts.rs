//! Runtime contracts for the engine's invariants.
//!
//! Debug-mode assertions, zero-cost in release builds. They guard the
//! properties the ranking and the index bookkeeping depend on:
//!
//! | Contract                     | Property                                        |
//! |------------------------------|-------------------------------------------------|
//! | `check_weights_normalized`   | key weights sum to 1                            |
//! | `check_positions_contiguous` | `records[i].idx == i` after every mutation      |
//!
//! ```ignore
//! // In debug builds this panics if positions drifted
//! check_positions_contiguous(&index.records);
//! ```

use crate::index::IndexRecord;
use crate::keys::Key;

/// Tolerance for floating point sums.
const WEIGHT_EPSILON: f64 = 1e-9;

/// Key weights must sum to 1 (when there are keys at all).
#[inline]
pub fn check_weights_normalized(keys: &[Key]) {
    if keys.is_empty() {
        return;
    }
    let total: f64 = keys.iter().map(|k| k.weight).sum();
    debug_assert!(
        (total - 1.0).abs() < WEIGHT_EPSILON,
        "key weights sum to {} instead of 1",
        total
    );
}

/// Every record's stored position equals its slot.
#[inline]
pub fn check_positions_contiguous(records: &[IndexRecord]) {
    #[cfg(debug_assertions)]
    for (slot, record) in records.iter().enumerate() {
        debug_assert_eq!(
            record.idx(),
            slot,
            "index record at slot {} claims position {}",
            slot,
            record.idx()
        );
    }
    #[cfg(not(debug_assertions))]
    let _ = records;
}
