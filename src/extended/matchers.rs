// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token matchers of the extended grammar.
//!
//! | Token       | Kind           | Matches texts that              |
//! |-------------|----------------|---------------------------------|
//! | `jscript`   | fuzzy          | fuzzy match `jscript`           |
//! | `=scheme`   | exact          | are `scheme`                    |
//! | `'python`   | include        | include `python`                |
//! | `!ruby`     | inverse exact  | do not include `ruby`           |
//! | `^java`     | prefix         | start with `java`               |
//! | `!^erlang`  | inverse prefix | do not start with `erlang`      |
//! | `.js$`      | suffix         | end with `.js`                  |
//! | `!.go$`     | inverse suffix | do not end with `.go`           |
//!
//! Every form also has a quoted variant (`="a b"`, `'"a b"`, `"a b"$`, ...)
//! whose pattern may contain spaces. Quoted forms are always tried first.

use crate::bitap::BitapSearch;
use crate::error::Result;
use crate::options::MatchOptions;
use crate::types::{MatchRange, MatchResult};
use crate::utils::index_of;

/// Matcher kinds, in recognition priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Include,
    Prefix,
    InversePrefix,
    InverseSuffix,
    Suffix,
    InverseExact,
    Fuzzy,
}

impl MatchKind {
    /// Priority order. Earlier kinds win ambiguous tokens.
    pub const ALL: [MatchKind; 8] = [
        MatchKind::Exact,
        MatchKind::Include,
        MatchKind::Prefix,
        MatchKind::InversePrefix,
        MatchKind::InverseSuffix,
        MatchKind::Suffix,
        MatchKind::InverseExact,
        MatchKind::Fuzzy,
    ];

    /// Pattern of a quoted token, e.g. `="a b"` → `a b`.
    pub fn quoted<'a>(&self, token: &'a str) -> Option<&'a str> {
        let (open, close) = match self {
            MatchKind::Exact => ("=\"", "\""),
            MatchKind::Include => ("'\"", "\""),
            MatchKind::Prefix => ("^\"", "\""),
            MatchKind::InversePrefix => ("!^\"", "\""),
            MatchKind::InverseSuffix => ("!\"", "\"$"),
            MatchKind::Suffix => ("\"", "\"$"),
            MatchKind::InverseExact => ("!\"", "\""),
            MatchKind::Fuzzy => ("\"", "\""),
        };
        capture(token, open, close)
    }

    /// Pattern of a bare token, e.g. `^core` → `core`.
    pub fn bare<'a>(&self, token: &'a str) -> Option<&'a str> {
        let (open, close) = match self {
            MatchKind::Exact => ("=", ""),
            MatchKind::Include => ("'", ""),
            MatchKind::Prefix => ("^", ""),
            MatchKind::InversePrefix => ("!^", ""),
            MatchKind::InverseSuffix => ("!", "$"),
            MatchKind::Suffix => ("", "$"),
            MatchKind::InverseExact => ("!", ""),
            MatchKind::Fuzzy => ("", ""),
        };
        capture(token, open, close)
    }

    /// Kinds whose result may carry several ranges.
    pub fn is_multi_match(&self) -> bool {
        matches!(self, MatchKind::Fuzzy | MatchKind::Include)
    }
}

/// Strip `open`/`close`, keeping a non-empty single-line middle.
fn capture<'a>(token: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let inner = token.strip_prefix(open)?.strip_suffix(close)?;
    let single_line = !inner.contains(['\n', '\r', '\u{2028}', '\u{2029}']);
    (!inner.is_empty() && single_line).then_some(inner)
}

/// One compiled token.
#[derive(Debug, Clone)]
pub enum Matcher {
    Exact(Vec<char>),
    Include(Vec<char>),
    Prefix(Vec<char>),
    InversePrefix(Vec<char>),
    InverseSuffix(Vec<char>),
    Suffix(Vec<char>),
    InverseExact(Vec<char>),
    Fuzzy(BitapSearch),
}

impl Matcher {
    pub fn new(kind: MatchKind, pattern: &str, options: MatchOptions) -> Result<Self> {
        let chars = || pattern.chars().collect::<Vec<char>>();
        Ok(match kind {
            MatchKind::Exact => Matcher::Exact(chars()),
            MatchKind::Include => Matcher::Include(chars()),
            MatchKind::Prefix => Matcher::Prefix(chars()),
            MatchKind::InversePrefix => Matcher::InversePrefix(chars()),
            MatchKind::InverseSuffix => Matcher::InverseSuffix(chars()),
            MatchKind::Suffix => Matcher::Suffix(chars()),
            MatchKind::InverseExact => Matcher::InverseExact(chars()),
            MatchKind::Fuzzy => Matcher::Fuzzy(BitapSearch::new(pattern, options)?),
        })
    }

    /// Compile the first kind, in priority order, that recognizes `token`.
    /// Quoted forms are tried across all kinds before any bare form.
    pub fn from_token(token: &str, options: MatchOptions) -> Result<Option<Self>> {
        let recognized = MatchKind::ALL
            .iter()
            .find_map(|kind| kind.quoted(token).map(|p| (*kind, p)))
            .or_else(|| {
                MatchKind::ALL
                    .iter()
                    .find_map(|kind| kind.bare(token).map(|p| (*kind, p)))
            });

        match recognized {
            Some((kind, pattern)) => Ok(Some(Matcher::new(kind, pattern, options)?)),
            None => Ok(None),
        }
    }

    pub fn kind(&self) -> MatchKind {
        match self {
            Matcher::Exact(_) => MatchKind::Exact,
            Matcher::Include(_) => MatchKind::Include,
            Matcher::Prefix(_) => MatchKind::Prefix,
            Matcher::InversePrefix(_) => MatchKind::InversePrefix,
            Matcher::InverseSuffix(_) => MatchKind::InverseSuffix,
            Matcher::Suffix(_) => MatchKind::Suffix,
            Matcher::InverseExact(_) => MatchKind::InverseExact,
            Matcher::Fuzzy(_) => MatchKind::Fuzzy,
        }
    }

    /// Run against an already case-folded text. Ranges are always reported.
    pub fn search(&self, text: &str) -> MatchResult {
        let text: Vec<char> = text.chars().collect();
        let whole = span(0, text.len());

        match self {
            Matcher::Exact(p) => verdict(text == *p, span(0, p.len())),
            Matcher::Prefix(p) => verdict(text.starts_with(p), span(0, p.len())),
            Matcher::InversePrefix(p) => verdict(!text.starts_with(p), whole),
            Matcher::Suffix(p) => verdict(
                text.ends_with(p),
                span(text.len().saturating_sub(p.len()), p.len()),
            ),
            Matcher::InverseSuffix(p) => verdict(!text.ends_with(p), whole),
            Matcher::InverseExact(p) => verdict(index_of(&text, p, 0).is_none(), whole),
            Matcher::Include(p) => {
                let mut indices = Vec::new();
                let mut from = 0;
                while let Some(index) = index_of(&text, p, from) {
                    from = index + p.len();
                    indices.push((index, from - 1));
                }
                verdict(!indices.is_empty(), indices)
            }
            Matcher::Fuzzy(bitap) => {
                let text: String = text.into_iter().collect();
                bitap.search_in(&text)
            }
        }
    }
}

/// `len` characters starting at `start`, as inclusive ranges.
fn span(start: usize, len: usize) -> Vec<MatchRange> {
    if len == 0 {
        Vec::new()
    } else {
        vec![(start, start + len - 1)]
    }
}

fn verdict(is_match: bool, indices: Vec<MatchRange>) -> MatchResult {
    MatchResult {
        is_match,
        score: if is_match { 0.0 } else { 1.0 },
        indices: Some(indices),
    }
}
