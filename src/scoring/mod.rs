// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how hits get their numbers and their order.
//!
//! Lower is better everywhere. A perfect match scores 0, a hit made of poor
//! matches on light keys drifts towards 1.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::{compare_hits, default_sort_fn, SortFn};
