// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for logical queries.
//!
//! Arbitrary JSON, well-formed or not, is either rejected with an error or
//! evaluated. It never panics.

#![no_main]

use fuzzex::{Fuse, FuseOptions};
use libfuzzer_sys::fuzz_target;
use serde_json::{json, Value};

fuzz_target!(|data: &[u8]| {
    let Ok(query) = serde_json::from_slice::<Value>(data) else {
        return;
    };

    let docs = vec![
        json!({"title": "Old Man's War", "author": {"name": "John Scalzi"}, "tags": ["sci-fi"]}),
        json!({"title": "HTML5", "author": {"name": "Remy Sharp"}, "tags": ["web", "dev"]}),
    ];
    let options = FuseOptions {
        include_matches: true,
        ..FuseOptions::with_keys(["title", "author.name", "tags"])
    };
    let Ok(fuse) = Fuse::new(docs, options) else {
        return;
    };

    let _ = fuse.search(query);
});
