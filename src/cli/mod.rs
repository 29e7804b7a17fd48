// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fuzzex command-line interface.
//!
//! Three subcommands: `search` to query a JSON collection, `index` to build a
//! snapshot that later searches can reuse, and `inspect` to examine a snapshot
//! file. Search results go to stdout as JSON unless `--pretty` is given.

pub mod display;

use clap::{Args, Parser, Subcommand};
use fuzzex::{FuseOptions, KeySpec};

#[derive(Parser)]
#[command(
    name = "fuzzex",
    about = "Approximate search over JSON collections",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a JSON array of strings or objects
    Search(SearchArgs),

    /// Build an index snapshot for a JSON collection
    Index {
        /// JSON file holding the collection (an array)
        #[arg(short, long)]
        input: String,

        /// Output snapshot file
        #[arg(short, long)]
        output: String,

        /// Keys to index, `name` or `name:weight`
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<String>,

        /// JSON options file; only its keys are used
        #[arg(short, long)]
        config: Option<String>,

        /// Fold accents and case before indexing
        #[arg(long)]
        fold_diacritics: bool,
    },

    /// Inspect a snapshot file
    Inspect {
        /// Path to the snapshot
        file: String,
    },
}

/// Arguments of `fuzzex search`.
#[derive(Args)]
pub struct SearchArgs {
    /// JSON file holding the collection (an array)
    #[arg(short, long)]
    pub input: String,

    /// Search query (a JSON expression with --logical)
    pub query: String,

    /// Keys to search, `name` or `name:weight`, dotted for nested fields
    #[arg(short, long, value_delimiter = ',')]
    pub keys: Vec<String>,

    /// JSON options file (camelCase, as accepted by the library)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Reuse a snapshot written by `fuzzex index`
    #[arg(long)]
    pub index: Option<String>,

    /// Parse the query with the extended token grammar
    #[arg(long)]
    pub extended: bool,

    /// Treat the query as a `$and` / `$or` expression
    #[arg(long)]
    pub logical: bool,

    /// Override the match threshold (0.0 = exact, 1.0 = anything)
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Maximum number of results to return
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Fold accents and case in the query and in keyed fields (plain-string
    /// collections are searched as written)
    #[arg(long)]
    pub fold_diacritics: bool,

    /// Include matched character ranges
    #[arg(long)]
    pub matches: bool,

    /// Include scores
    #[arg(long)]
    pub score: bool,

    /// Human-readable table instead of JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Parse `title` or `title:2.5` into a key.
///
/// A suffix that is not a number stays part of the name, so `a:b` is a key
/// called `a:b`.
pub fn parse_key_arg(arg: &str) -> KeySpec {
    match arg.rsplit_once(':') {
        Some((name, weight)) if !name.is_empty() => match weight.parse::<f64>() {
            Ok(weight) => KeySpec::weighted(name, weight),
            Err(_) => KeySpec::from(arg),
        },
        _ => KeySpec::from(arg),
    }
}

/// Start from the config file (or defaults) and layer flags on top.
pub fn resolve_options(config: Option<&str>, keys: &[String]) -> fuzzex::Result<FuseOptions> {
    let mut options = match config {
        Some(path) => FuseOptions::from_json_file(path)?,
        None => FuseOptions::default(),
    };
    if !keys.is_empty() {
        options.keys = keys.iter().map(|k| parse_key_arg(k)).collect();
    }
    Ok(options)
}
