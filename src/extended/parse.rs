// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query string → groups of tokens.
//!
//! `"^core go$ | rb$ | py$ xy$"` → `[["^core", "go$"], ["rb$"], ["py$", "xy$"]]`

/// OR separator between token groups.
pub const OR_TOKEN: char = '|';

/// Split a query into OR-groups of AND-ed tokens.
pub fn split_groups(query: &str) -> Vec<Vec<&str>> {
    query
        .split(OR_TOKEN)
        .map(|group| split_tokens(group.trim()))
        .collect()
}

/// Split on runs of spaces that are followed by an even number of double
/// quotes, so quoted spans stay together.
///
/// With balanced quotes that is "spaces outside quotes". An unbalanced quote
/// glues everything from the start of the group up to it.
pub fn split_tokens(group: &str) -> Vec<&str> {
    let mut quotes_after = group.matches('"').count();
    let mut tokens = Vec::new();
    let mut token_start = 0;
    let mut run_start: Option<usize> = None;

    for (pos, c) in group.char_indices() {
        match c {
            ' ' if quotes_after % 2 == 0 => {
                if run_start.is_none() {
                    run_start = Some(pos);
                }
                continue;
            }
            '"' => quotes_after -= 1,
            _ => {}
        }
        if let Some(start) = run_start.take() {
            tokens.push(&group[token_start..start]);
            token_start = pos;
        }
    }

    match run_start {
        Some(start) => tokens.push(&group[token_start..start]),
        None => tokens.push(&group[token_start..]),
    }

    tokens.retain(|t| !t.trim().is_empty());
    tokens
}
