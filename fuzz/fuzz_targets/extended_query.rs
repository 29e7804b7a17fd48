// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the extended token grammar.
//!
//! Quotes, pipes, operators and whitespace in any combination must parse and
//! search without panicking.

#![no_main]

use arbitrary::Arbitrary;
use fuzzex::{Fuse, FuseOptions};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    query: String,
    docs: Vec<String>,
    include_matches: bool,
}

fuzz_target!(|input: QueryInput| {
    if input.query.len() > 200 || input.docs.len() > 16 {
        return;
    }

    let options = FuseOptions {
        use_extended_search: true,
        include_matches: input.include_matches,
        include_score: true,
        ..FuseOptions::default()
    };
    let docs: Vec<Value> = input.docs.into_iter().map(Value::String).collect();
    let Ok(fuse) = Fuse::new(docs, options) else {
        return;
    };

    if let Ok(results) = fuse.search(input.query.as_str()) {
        for pair in results.windows(2) {
            assert!(pair[0].score <= pair[1].score || pair[0].score.is_none());
        }
    }
});
