// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for index construction, query compilation and search.
//!
//! Every error is raised at the call that detects it. Nothing is retried or
//! recovered internally: a search either returns a complete ranked list or
//! fails before producing any result.

use thiserror::Error;

use crate::bitap::MAX_BITS;

/// Errors produced by the engine.
#[derive(Error, Debug)]
pub enum FuseError {
    /// Object-form key without a `name`.
    #[error("Missing {0} property in key")]
    MissingKeyProperty(&'static str),

    /// Key weight that is zero, negative or not a number.
    #[error("Property 'weight' in key '{0}' must be a positive integer")]
    InvalidKeyWeight(String),

    /// Logical query leaf whose pattern is not a string, or a node that is not an object.
    #[error("Invalid value for key {0}")]
    InvalidQuery(String),

    /// Bitap chunk longer than the machine word.
    #[error("Pattern length exceeds max of {}.", MAX_BITS)]
    PatternTooLong(usize),

    /// Externally supplied index does not fit this engine.
    #[error("Incorrect 'index' type")]
    IncorrectIndexType,

    /// Extended grammar requested but compiled out.
    #[error("Extended search is not available")]
    ExtendedSearchUnavailable,

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FuseError {
    /// True for the malformed-key family (`InvalidKeyError`).
    pub fn is_invalid_key(&self) -> bool {
        matches!(
            self,
            FuseError::MissingKeyProperty(_) | FuseError::InvalidKeyWeight(_)
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FuseError>;
