// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::sync::Arc;

use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use fuzzex::index::snapshot;
use fuzzex::{
    create_index, fold_diacritics, FieldGetter, Fuse, FuseIndex, NormalizeFn, Query,
    SearchOptions, SearchResult,
};

mod cli;
use cli::display::*;
use cli::{resolve_options, Cli, Commands, SearchArgs};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search(args) => run_search(args),
        Commands::Index {
            input,
            output,
            keys,
            config,
            fold_diacritics,
        } => run_index(&input, &output, &keys, config.as_deref(), fold_diacritics),
        Commands::Inspect { file } => run_inspect(&file),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean JSON. `RUST_LOG` overrides the default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fuzzex=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_collection(path: &str) -> fuzzex::Result<Vec<Value>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn folding() -> NormalizeFn {
    Arc::new(|text: &str| fold_diacritics(text))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

fn run_search(args: SearchArgs) -> fuzzex::Result<()> {
    let docs = load_collection(&args.input)?;
    // Plain-string collections are indexed verbatim, so only keyed ones fold
    let fold = args.fold_diacritics && docs.first().is_some_and(|doc| !doc.is_string());

    let mut options = resolve_options(args.config.as_deref(), &args.keys)?;
    if let Some(threshold) = args.threshold {
        options.threshold = threshold;
    }
    options.use_extended_search |= args.extended;
    options.include_matches |= args.matches || args.pretty;
    options.include_score |= args.score || args.pretty;

    let mut builder = Fuse::builder(options);
    if fold {
        builder = builder.normalize(folding());
    }
    if let Some(path) = &args.index {
        let bytes = fs::read(path)?;
        builder = builder.index(FuseIndex::from_bytes(&bytes, FieldGetter::default())?);
    }
    let fuse = builder.build(docs)?;

    let query = if args.logical {
        Query::Logical(serde_json::from_str(&args.query)?)
    } else if fold {
        Query::Text(fold_diacritics(&args.query))
    } else {
        Query::Text(args.query.clone())
    };

    let search_options = SearchOptions { limit: args.limit };
    let results = fuse.search_with(query, search_options)?;

    if args.pretty {
        print_results(&args.query, &results);
    } else {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }
    Ok(())
}

fn print_results(query: &str, results: &[SearchResult<'_>]) {
    section_top(&format!("{} results for \"{}\"", results.len(), truncate(query, 40)));
    for result in results {
        let item = match result.item {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        row(&format!(
            " {} {} {}",
            pad_right(&themed(GRAY, &[], &format!("#{}", result.ref_index)), 6),
            score_value(result.score.unwrap_or(0.0)),
            truncate(&item, BOX_WIDTH - 18)
        ));
        for detail in result.matches.iter().flatten() {
            let key = detail
                .key
                .as_ref()
                .map(|k| k.to_string())
                .unwrap_or_default();
            row(&format!(
                "        {} {}",
                pad_right(&themed(CYAN, &[], &key), 14),
                truncate_highlighted(&detail.value, &detail.indices, BOX_WIDTH - 24)
            ));
        }
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// INDEX
// ═══════════════════════════════════════════════════════════════════════════

fn run_index(
    input: &str,
    output: &str,
    keys: &[String],
    config: Option<&str>,
    fold: bool,
) -> fuzzex::Result<()> {
    let docs = load_collection(input)?;
    let options = resolve_options(config, keys)?;

    let getter = if fold {
        FieldGetter::default().normalized(folding())
    } else {
        FieldGetter::default()
    };
    let index = create_index(&options.keys, &docs, getter)?;
    let bytes = index.to_bytes()?;
    fs::write(output, &bytes)?;

    eprintln!(
        "✓ {} records, {} keys → {} ({})",
        index.size(),
        index.keys().len(),
        output,
        format_size(bytes.len())
    );
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn run_inspect(path: &str) -> fuzzex::Result<()> {
    let bytes = fs::read(path)?;
    let info = snapshot::inspect(&bytes)?;

    section_top("SNAPSHOT");
    row(&format!(" File:     {}", path));
    row(&format!(" Size:     {}", format_size(bytes.len())));
    row(&format!(" Version:  {}", info.version));
    row(&format!(" Payload:  {}", format_size(info.payload_len)));
    let checksum = if info.checksum_ok {
        themed(GREEN, &[], "ok")
    } else {
        themed(RED, &[BOLD], "MISMATCH")
    };
    row(&format!(" CRC32:    {:08x} {}", info.crc32, checksum));

    if !info.checksum_ok {
        section_bot();
        return Err(fuzzex::FuseError::IncorrectIndexType);
    }

    let decoded = snapshot::decode(&bytes)?;
    let text_records = decoded.records.iter().filter(|r| r.is_text()).count();
    row(&format!(
        " Records:  {} ({} text, {} keyed)",
        decoded.records.len(),
        text_records,
        decoded.records.len() - text_records
    ));
    row("");
    for key in &decoded.keys {
        row(&format!(
            " {} {:.3}",
            pad_right(&themed(CYAN, &[], &key.id), 40),
            key.weight
        ));
    }
    section_bot();
    Ok(())
}
