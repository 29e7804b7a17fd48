// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field-length norm: `1 / sqrt(token_count)`.
//!
//! Tokens are runs of non-space characters. The result is rounded to three
//! decimals and cached by token count, since most fields share a handful of
//! lengths.

use std::collections::HashMap;

/// Decimal digits kept in a norm.
const MANTISSA: i32 = 3;

#[derive(Debug, Clone, Default)]
pub struct FieldNorm {
    cache: HashMap<usize, f64>,
}

impl FieldNorm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, value: &str) -> f64 {
        let tokens = value.split(' ').filter(|t| !t.is_empty()).count().max(1);
        *self
            .cache
            .entry(tokens)
            .or_insert_with(|| round_to_mantissa(1.0 / (tokens as f64).sqrt()))
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

fn round_to_mantissa(value: f64) -> f64 {
    let m = 10f64.powi(MANTISSA);
    (value * m).round() / m
}
