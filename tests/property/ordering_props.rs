//! Result ordering and limits.

use super::strategies::*;
use fuzzex::{Fuse, SearchOptions};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_results_sorted_by_score_then_position(docs in keyed_docs(), query in query()) {
        let fuse = Fuse::new(docs, keyed()).unwrap();
        let results = fuse.search(query.as_str()).unwrap();

        for pair in results.windows(2) {
            let (a, b) = (pair[0].score.unwrap(), pair[1].score.unwrap());
            prop_assert!(a < b || (a == b && pair[0].ref_index < pair[1].ref_index));
        }
    }

    #[test]
    fn prop_limit_is_a_prefix(docs in text_docs(), query in query(), limit in 0usize..5) {
        let fuse = Fuse::new(docs, scored()).unwrap();
        let all = fuse.search(query.as_str()).unwrap();
        let limited = fuse.search_with(query.as_str(), SearchOptions::limit(limit)).unwrap();

        prop_assert_eq!(limited.len(), all.len().min(limit));
        prop_assert_eq!(&all[..limited.len()], &limited[..]);
    }

    #[test]
    fn prop_matches_point_inside_values(docs in keyed_docs(), query in query()) {
        let fuse = Fuse::new(docs, keyed()).unwrap();
        for result in fuse.search(query.as_str()).unwrap() {
            for detail in result.matches.unwrap_or_default() {
                let len = detail.value.chars().count();
                for (start, end) in detail.indices {
                    prop_assert!(start <= end && end < len);
                }
            }
        }
    }
}
