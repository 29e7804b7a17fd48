//! A snapshot restores an index that searches exactly like the original.

use super::strategies::*;
use fuzzex::{FieldGetter, Fuse, FuseIndex, OwnedSearchResult};
use proptest::prelude::*;

fn owned(fuse: &Fuse, query: &str) -> Vec<OwnedSearchResult> {
    fuse.search(query)
        .unwrap()
        .into_iter()
        .map(|r| r.into_owned())
        .collect()
}

proptest! {
    #[test]
    fn prop_binary_snapshot_preserves_results(docs in text_docs(), query in query()) {
        let original = Fuse::new(docs.clone(), scored()).unwrap();
        let bytes = original.index().to_bytes().unwrap();

        let restored_index = FuseIndex::from_bytes(&bytes, FieldGetter::default()).unwrap();
        let restored = Fuse::with_index(docs, scored(), restored_index).unwrap();

        assert_same_results(&owned(&original, &query), &owned(&restored, &query))?;
    }

    #[test]
    fn prop_json_snapshot_preserves_keyed_results(docs in keyed_docs(), query in query()) {
        let original = Fuse::new(docs.clone(), keyed()).unwrap();
        let json = original.index().to_json().unwrap();

        let restored_index = FuseIndex::from_json(&json, FieldGetter::default()).unwrap();
        let restored = Fuse::with_index(docs, keyed(), restored_index).unwrap();

        assert_same_results(&owned(&original, &query), &owned(&restored, &query))?;
    }

    #[test]
    fn prop_corrupted_snapshot_is_rejected(docs in text_docs(), flip in any::<prop::sample::Index>()) {
        let fuse = Fuse::new(docs, scored()).unwrap();
        let mut bytes = fuse.index().to_bytes().unwrap();
        let at = flip.index(bytes.len());
        bytes[at] ^= 0x5a;

        prop_assert!(FuseIndex::from_bytes(&bytes, FieldGetter::default()).is_err());
    }
}
