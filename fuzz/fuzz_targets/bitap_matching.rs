// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bitap matching.
//!
//! Any pattern against any text must return without panicking, report ranges
//! inside the text, and find verbatim occurrences whatever the threshold.

#![no_main]

use arbitrary::Arbitrary;
use fuzzex::bitap::BitapSearch;
use fuzzex::MatchOptions;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    pattern: String,
    text: String,
    location: u8,
    distance: u8,
    /// Threshold in hundredths
    threshold: u8,
    find_all_matches: bool,
    ignore_location: bool,
    min_match_char_length: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    if input.pattern.chars().count() > 80 || input.text.chars().count() > 200 {
        return;
    }

    let options = MatchOptions {
        location: input.location as usize,
        distance: input.distance as usize,
        threshold: (input.threshold.min(100)) as f64 / 100.0,
        include_matches: true,
        find_all_matches: input.find_all_matches,
        min_match_char_length: (input.min_match_char_length % 4).max(1) as usize,
        is_case_sensitive: true,
        ignore_location: input.ignore_location,
    };

    let Ok(searcher) = BitapSearch::new(&input.pattern, options) else {
        return;
    };
    let result = searcher.search_in(&input.text);

    let len = input.text.chars().count();
    for (start, end) in result.indices.unwrap_or_default() {
        assert!(start <= end && end < len, "range ({}, {}) outside text of {}", start, end, len);
    }

    if input.ignore_location
        && options.min_match_char_length == 1
        && !input.pattern.is_empty()
        && input.pattern.chars().count() <= 32
        && input.text.contains(&input.pattern)
    {
        assert!(searcher.search_in(&input.text).is_match, "verbatim occurrence missed");
    }
});
