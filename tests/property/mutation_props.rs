//! Incremental updates agree with rebuilding from scratch, and an add undone
//! by `remove_at` leaves no trace.

use super::strategies::*;
use fuzzex::{Fuse, OwnedSearchResult};
use proptest::prelude::*;
use serde_json::Value;

fn owned(fuse: &Fuse, query: &str) -> Vec<OwnedSearchResult> {
    fuse.search(query)
        .unwrap()
        .into_iter()
        .map(|r| r.into_owned())
        .collect()
}

proptest! {
    #[test]
    fn prop_remove_at_equals_rebuild(
        docs in keyed_docs(),
        pick in any::<prop::sample::Index>(),
        query in query(),
    ) {
        let at = pick.index(docs.len());

        let mut incremental = Fuse::new(docs.clone(), keyed()).unwrap();
        incremental.remove_at(at);

        let mut remaining = docs;
        remaining.remove(at);
        let rebuilt = Fuse::new(remaining, keyed()).unwrap();

        assert_same_results(&owned(&incremental, &query), &owned(&rebuilt, &query))?;
    }

    #[test]
    fn prop_add_equals_rebuild(docs in text_docs(), extra in sentence(), query in query()) {
        let mut incremental = Fuse::new(docs.clone(), scored()).unwrap();
        incremental.add(Value::String(extra.clone()));

        let mut all = docs;
        all.push(Value::String(extra));
        let rebuilt = Fuse::new(all, scored()).unwrap();

        assert_same_results(&owned(&incremental, &query), &owned(&rebuilt, &query))?;
    }

    #[test]
    fn prop_add_then_remove_at_restores_results(
        docs in keyed_docs(),
        extra in keyed_doc(),
        query in query(),
    ) {
        let mut fuse = Fuse::new(docs.clone(), keyed()).unwrap();
        let before = owned(&fuse, &query);

        fuse.add(extra.clone());
        let at = fuse.len() - 1;
        prop_assert_eq!(fuse.remove_at(at), Some(extra));

        prop_assert_eq!(fuse.docs(), &docs[..]);
        for (slot, record) in fuse.index().records().iter().enumerate() {
            prop_assert_eq!(record.idx(), slot);
        }
        let after = owned(&fuse, &query);
        let refs = |results: &[OwnedSearchResult]| results.iter().map(|r| r.ref_index).collect::<Vec<_>>();
        prop_assert_eq!(refs(&after), refs(&before));
        assert_same_results(&after, &before)?;
    }
}
