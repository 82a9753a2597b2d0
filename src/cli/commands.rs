//! Command implementations for the spelltrie CLI.

use std::io::{self, BufRead};
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::{debug, info};
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::*;

/// Execute a CLI command.
pub fn execute_command(args: SpellArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Suggest(suggest_args) => suggest_words(suggest_args, &config, &args),
        Command::Dump(dump_args) => dump_dictionary(dump_args, &config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &config, &args),
        Command::Compare(compare_args) => compare_dictionaries(compare_args, &config, &args),
    }
}

/// Load the corrector configuration, falling back to defaults.
fn load_config(args: &SpellArgs) -> anyhow::Result<CorrectorConfig> {
    match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            CorrectorConfig::from_file(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))
        }
        None => Ok(CorrectorConfig::default()),
    }
}

/// Build a corrector from a dictionary file.
fn open_corrector(
    path: &Path,
    config: &CorrectorConfig,
) -> anyhow::Result<(SpellCorrector, LoadReport)> {
    let corrector =
        SpellCorrector::with_config(config.clone()).context("invalid corrector configuration")?;
    let report = corrector
        .use_dictionary(path)
        .with_context(|| format!("failed to load dictionary {}", path.display()))?;

    info!(
        "Loaded {} words from {}",
        corrector.stats().word_count,
        path.display()
    );

    Ok((corrector, report))
}

/// Suggest corrections for the given words, or for words read from stdin.
fn suggest_words(
    args: &SuggestArgs,
    config: &CorrectorConfig,
    cli_args: &SpellArgs,
) -> anyhow::Result<()> {
    let (corrector, _) = open_corrector(&args.dictionary, config)?;

    if args.words.is_empty() {
        return suggest_interactive(&corrector, cli_args);
    }

    let start_time = Instant::now();
    let results: Vec<SuggestionReport> = if args.parallel {
        args.words
            .par_iter()
            .map(|word| build_report(word, corrector.suggest_detailed(word)))
            .collect()
    } else {
        args.words
            .iter()
            .map(|word| build_report(word, corrector.suggest_detailed(word)))
            .collect()
    };

    output_result(
        "Suggestions",
        &SuggestionResults {
            results,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}

/// Answer one word at a time from stdin until end of input.
fn suggest_interactive(corrector: &SpellCorrector, cli_args: &SpellArgs) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let answered = suggest_stream(corrector, stdin.lock(), |report| {
        output_result("Suggestion", report, cli_args)?;
        Ok(())
    })?;

    debug!("Answered {answered} words from stdin");
    Ok(())
}

/// Suggest a correction for every whitespace separated word of `reader`,
/// handing each report to `emit` as soon as it is ready.
///
/// Returns the number of words answered.
pub fn suggest_stream<R, F>(
    corrector: &SpellCorrector,
    reader: R,
    mut emit: F,
) -> anyhow::Result<usize>
where
    R: BufRead,
    F: FnMut(&SuggestionReport) -> anyhow::Result<()>,
{
    let mut answered = 0;

    for line in reader.lines() {
        let line = line.context("failed to read input")?;
        for word in line.split_whitespace() {
            emit(&build_report(word, corrector.suggest_detailed(word)))?;
            answered += 1;
        }
    }

    Ok(answered)
}

/// Turn an engine answer into a printable report.
pub fn build_report(query: &str, result: Result<Option<Suggestion>>) -> SuggestionReport {
    match result {
        Ok(Some(suggestion)) => SuggestionReport {
            query: query.to_string(),
            frequency: Some(suggestion.frequency),
            distance: Some(suggestion.distance),
            suggestion: Some(suggestion.word),
            error: None,
        },
        Ok(None) => SuggestionReport {
            query: query.to_string(),
            suggestion: None,
            frequency: None,
            distance: None,
            error: None,
        },
        Err(e) => SuggestionReport {
            query: query.to_string(),
            suggestion: None,
            frequency: None,
            distance: None,
            error: Some(e.to_string()),
        },
    }
}

/// Print every dictionary word in lexicographic order.
fn dump_dictionary(
    args: &DumpArgs,
    config: &CorrectorConfig,
    cli_args: &SpellArgs,
) -> anyhow::Result<()> {
    let (corrector, _) = open_corrector(&args.dictionary, config)?;
    let tree = corrector.into_tree();

    let words = if args.frequencies {
        tree.entries()
            .into_iter()
            .map(|(word, frequency)| WordEntry {
                word,
                frequency: Some(frequency),
            })
            .collect()
    } else {
        tree.words()
            .into_iter()
            .map(|word| WordEntry {
                word,
                frequency: None,
            })
            .collect()
    };

    output_result("Dictionary words", &DumpResult { words }, cli_args)?;
    Ok(())
}

/// Show dictionary statistics.
fn show_stats(
    args: &StatsArgs,
    config: &CorrectorConfig,
    cli_args: &SpellArgs,
) -> anyhow::Result<()> {
    let start_time = Instant::now();
    let (corrector, report) = open_corrector(&args.dictionary, config)?;
    let duration = start_time.elapsed();
    let stats = corrector.stats();

    output_result(
        "Dictionary statistics",
        &DictionaryStats {
            path: args.dictionary.to_string_lossy().to_string(),
            word_count: stats.word_count,
            node_count: stats.node_count,
            tokens: report.tokens,
            inserted: report.inserted,
            skipped: report.skipped,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}

/// Compare two dictionaries structurally.
fn compare_dictionaries(
    args: &CompareArgs,
    config: &CorrectorConfig,
    cli_args: &SpellArgs,
) -> anyhow::Result<()> {
    let (left, _) = open_corrector(&args.left, config)?;
    let (right, _) = open_corrector(&args.right, config)?;
    let left = left.into_tree();
    let right = right.into_tree();

    output_result(
        "Dictionary comparison",
        &ComparisonResult {
            left: args.left.to_string_lossy().to_string(),
            right: args.right.to_string_lossy().to_string(),
            equal: left == right,
            left_hash: left.structural_hash(),
            right_hash: right.structural_hash(),
            left_words: left.word_count(),
            right_words: right.word_count(),
        },
        cli_args,
    )?;

    Ok(())
}
