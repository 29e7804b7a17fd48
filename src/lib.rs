//! Approximate (fuzzy) search over in-memory collections.
//!
//! Hand the engine plain strings or JSON records with weighted, possibly nested
//! fields, and a query. It ranks records by how well they match, tolerating
//! typos, partial matches and matches away from where they were expected.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   keys.rs   │────▶│   index/     │────▶│   search/    │
//! │ (KeyStore)  │     │ (FuseIndex,  │     │ (Fuse, route,│
//! │ extract.rs  │     │  snapshot)   │     │  format)     │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!        ┌───────────────────┬────────────────────┤
//!        ▼                   ▼                    ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   bitap/    │◀────│  extended/   │     │  logical.rs  │
//! │ (fuzzy core)│     │ (=x ^x x$ |) │     │ ($and / $or) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!                                                 ▼
//!                                          ┌──────────────┐
//!                                          │  scoring/    │
//!                                          │ (Π s^(w·n))  │
//!                                          └──────────────┘
//! ```
//!
//! | Module      | Role                                                   |
//! |-------------|--------------------------------------------------------|
//! | `keys`      | Weighted key descriptors, weights normalized to sum 1  |
//! | `extract`   | Dotted-path field getter that forks on arrays          |
//! | `bitap`     | Bit-parallel approximate matcher, 32-char chunks       |
//! | `index`     | Per-record flattened values and field-length norms     |
//! | `extended`  | Token grammar: exact, include, prefix, suffix, inverse |
//! | `logical`   | Tree queries bound to per-key searchers                |
//! | `scoring`   | Aggregate score and default ordering                   |
//! | `search`    | The engine, matcher factories and result formatting    |
//! | `documents` | Two-pass title search for host document stores         |
//!
//! # Usage
//!
//! ```
//! use fuzzex::{Fuse, FuseOptions, KeySpec};
//! use serde_json::json;
//!
//! let docs = vec![
//!     json!({"title": "Quarterly Report", "tags": ["finance"]}),
//!     json!({"title": "Annual Summary", "tags": ["finance", "year"]}),
//! ];
//! let options = FuseOptions {
//!     include_score: true,
//!     ..FuseOptions::with_keys([KeySpec::weighted("title", 2.0), KeySpec::weighted("tags", 1.0)])
//! };
//! let fuse = Fuse::new(docs, options).unwrap();
//!
//! let results = fuse.search("report").unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].ref_index, 0);
//! ```

// Module declarations
pub mod bitap;
pub mod contracts;
pub mod documents;
mod error;
#[cfg(feature = "extended-search")]
pub mod extended;
pub mod extract;
pub mod index;
pub mod keys;
pub mod logical;
mod options;
pub mod scoring;
mod search;
#[doc(hidden)]
pub mod testing;
mod types;
pub mod utils;

// Re-exports for public API
pub use documents::{search_titles, transliterate_han, DocumentSearchOptions, TitledItem};
pub use error::{FuseError, Result};
pub use extract::{FieldGetter, FieldValue, GetFn, NormalizeFn};
pub use index::{create_index, parse_index, FuseIndex, IndexSnapshot};
pub use keys::{Key, KeyName, KeySpec, KeyStore};
pub use logical::Expression;
pub use options::{FuseOptions, MatchOptions, DEFAULT_DISTANCE, DEFAULT_THRESHOLD};
pub use search::{
    create_searcher, default_factories, Fuse, FuseBuilder, Query, SearchOptions, Searcher,
    SearcherFactory,
};
#[cfg(feature = "extended-search")]
pub use search::ExtendedSearchFactory;
pub use types::{
    FieldMatch, MatchDetail, MatchRange, MatchResult, OwnedSearchResult, SearchHit, SearchResult,
};
pub use utils::{contains_han, fold_diacritics};
