//! Command line argument parsing for the spelltrie CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// spelltrie - dictionary-backed spelling suggestions
#[derive(Parser, Debug, Clone)]
#[command(name = "spelltrie")]
#[command(about = "Suggest spelling corrections from a word list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Corrector configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SPELLTRIE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest corrections for words (reads stdin when no words are given)
    Suggest(SuggestArgs),

    /// Print every dictionary word in lexicographic order
    Dump(DumpArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),

    /// Compare two dictionaries structurally
    Compare(CompareArgs),
}

/// Arguments for suggesting corrections
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Dictionary file (whitespace separated words)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Words to check
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Process the words on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for dumping a dictionary
#[derive(Parser, Debug, Clone)]
pub struct DumpArgs {
    /// Dictionary file (whitespace separated words)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Include word frequencies
    #[arg(long)]
    pub frequencies: bool,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Dictionary file (whitespace separated words)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Arguments for comparing dictionaries
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// First dictionary file
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// Second dictionary file
    #[arg(value_name = "RIGHT")]
    pub right: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_suggest_command() {
        let args = SpellArgs::try_parse_from([
            "spelltrie",
            "suggest",
            "/path/to/words.txt",
            "helo",
            "wrld",
            "--parallel",
        ])
        .unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.dictionary, PathBuf::from("/path/to/words.txt"));
            assert_eq!(suggest_args.words, vec!["helo", "wrld"]);
            assert!(suggest_args.parallel);
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_suggest_without_words() {
        let args = SpellArgs::try_parse_from(["spelltrie", "suggest", "words.txt"]).unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            assert!(suggest_args.words.is_empty());
            assert!(!suggest_args.parallel);
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_dump_command() {
        let args =
            SpellArgs::try_parse_from(["spelltrie", "dump", "words.txt", "--frequencies"])
                .unwrap();

        if let Command::Dump(dump_args) = args.command {
            assert_eq!(dump_args.dictionary, PathBuf::from("words.txt"));
            assert!(dump_args.frequencies);
        } else {
            panic!("Expected Dump command");
        }
    }

    #[test]
    fn test_compare_command() {
        let args = SpellArgs::try_parse_from(["spelltrie", "compare", "a.txt", "b.txt"]).unwrap();

        if let Command::Compare(compare_args) = args.command {
            assert_eq!(compare_args.left, PathBuf::from("a.txt"));
            assert_eq!(compare_args.right, PathBuf::from("b.txt"));
        } else {
            panic!("Expected Compare command");
        }
    }

    #[test]
    fn test_global_options() {
        let args = SpellArgs::try_parse_from([
            "spelltrie",
            "-vv",
            "--format",
            "json",
            "--pretty",
            "--config",
            "spell.json",
            "stats",
            "words.txt",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        assert_eq!(args.config, Some(PathBuf::from("spell.json")));
    }

    #[test]
    fn test_verbosity_levels() {
        let args = SpellArgs::try_parse_from(["spelltrie", "stats", "words.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = SpellArgs::try_parse_from(["spelltrie", "-q", "-vvv", "stats", "words.txt"])
            .unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
