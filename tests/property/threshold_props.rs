//! Tightening the match threshold only filters.
//!
//! With `ignore_location` a chunk's score is `errors / len` for the fewest
//! errors that align, whatever the threshold. A lower threshold keeps exactly
//! the matches whose score still fits under it, and reports the same score.

use fuzzex::bitap::BitapSearch;
use fuzzex::MatchOptions;
use proptest::prelude::*;

fn matcher(pattern: &str, threshold: f64) -> BitapSearch {
    let options = MatchOptions {
        threshold,
        ignore_location: true,
        ..MatchOptions::default()
    };
    BitapSearch::new(pattern, options).unwrap()
}

proptest! {
    #[test]
    fn prop_lower_threshold_keeps_only_fitting_scores(
        pattern in "[abc]{1,8}",
        text in "[abc ]{0,30}",
        a in 0.01f64..0.99,
        b in 0.01f64..0.99,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let loose = matcher(&pattern, high).search_in(&text);
        let strict = matcher(&pattern, low).search_in(&text);

        prop_assert_eq!(strict.is_match, loose.is_match && loose.score <= low);
        if strict.is_match {
            prop_assert_eq!(strict.score, loose.score);
        }
    }

    #[test]
    fn prop_strict_match_implies_loose_match(
        pattern in "[abc]{1,8}",
        text in "[abc ]{0,30}",
        low in 0.0f64..0.5,
    ) {
        if matcher(&pattern, low).search_in(&text).is_match {
            prop_assert!(matcher(&pattern, low + 0.4).search_in(&text).is_match);
        }
    }
}
