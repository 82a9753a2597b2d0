//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpellArgs};
use crate::error::Result;

/// Result of checking a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionReport {
    pub query: String,
    pub suggestion: Option<String>,
    pub frequency: Option<u32>,
    pub distance: Option<usize>,
    pub error: Option<String>,
}

impl fmt::Display for SuggestionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            return write!(f, "{}: error: {}", self.query, error);
        }

        match (&self.suggestion, self.distance, self.frequency) {
            (Some(_), Some(0), _) => write!(f, "{}: correct", self.query),
            (Some(word), Some(distance), Some(frequency)) => write!(
                f,
                "{} -> {} (distance {}, frequency {})",
                self.query, word, distance, frequency
            ),
            (Some(word), _, _) => write!(f, "{} -> {}", self.query, word),
            (None, _, _) => write!(f, "{}: no suggestion", self.query),
        }
    }
}

/// Result structure for a batch of checked words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResults {
    pub results: Vec<SuggestionReport>,
    pub duration_ms: u64,
}

impl fmt::Display for SuggestionResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.results {
            writeln!(f, "{report}")?;
        }
        Ok(())
    }
}

/// A dictionary word with an optional frequency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,
}

/// Result structure for dictionary dumps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpResult {
    pub words: Vec<WordEntry>,
}

impl fmt::Display for DumpResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.words {
            match entry.frequency {
                Some(frequency) => writeln!(f, "{}\t{}", entry.word, frequency)?,
                None => writeln!(f, "{}", entry.word)?,
            }
        }
        Ok(())
    }
}

/// Dictionary statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub word_count: usize,
    pub node_count: usize,
    pub tokens: usize,
    pub inserted: usize,
    pub skipped: usize,
    pub duration_ms: u64,
}

impl fmt::Display for DictionaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dictionary: {}", self.path)?;
        writeln!(f, "  Distinct words: {}", self.word_count)?;
        writeln!(f, "  Tree nodes:     {}", self.node_count)?;
        writeln!(f, "  Tokens read:    {}", self.tokens)?;
        writeln!(f, "  Inserted:       {}", self.inserted)?;
        writeln!(f, "  Skipped:        {}", self.skipped)?;
        writeln!(f, "  Load time:      {} ms", self.duration_ms)
    }
}

/// Result of comparing two dictionaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub left: String,
    pub right: String,
    pub equal: bool,
    pub left_hash: u64,
    pub right_hash: u64,
    pub left_words: usize,
    pub right_words: usize,
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.equal { "equal" } else { "different" };
        writeln!(f, "Dictionaries are {verdict}")?;
        writeln!(
            f,
            "  {}: {} words, hash {:016x}",
            self.left, self.left_words, self.left_hash
        )?;
        writeln!(
            f,
            "  {}: {} words, hash {:016x}",
            self.right, self.right_words, self.right_hash
        )
    }
}

/// Render a result in the given format.
pub fn render_result<T>(result: &T, format: OutputFormat, pretty: bool) -> Result<String>
where
    T: Serialize + fmt::Display,
{
    let rendered = match format {
        OutputFormat::Human => result.to_string(),
        OutputFormat::Json if pretty => serde_json::to_string_pretty(result)?,
        OutputFormat::Json => serde_json::to_string(result)?,
    };
    Ok(rendered)
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &SpellArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    if args.output_format == OutputFormat::Human && args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let rendered = render_result(result, args.output_format, args.pretty)?;
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }

    Ok(())
}
