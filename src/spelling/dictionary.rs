//! Dictionary loading for spelling correction.
//!
//! A dictionary source is plain text holding one or more whitespace
//! separated words per line. Every occurrence of a word is inserted, so a
//! word's frequency is the number of times it appears in the source.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};
use crate::spelling::config::InvalidWordPolicy;
use crate::spelling::trie::PrefixTree;

/// Summary of a dictionary load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Number of whitespace separated tokens read.
    pub tokens: usize,
    /// Number of tokens inserted into the tree.
    pub inserted: usize,
    /// Number of tokens skipped because they were not valid words.
    pub skipped: usize,
}

/// Reads word lists into a [`PrefixTree`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionaryLoader {
    policy: InvalidWordPolicy,
}

impl DictionaryLoader {
    /// Create a loader that rejects invalid words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with the given handling of invalid words.
    pub fn with_policy(policy: InvalidWordPolicy) -> Self {
        DictionaryLoader { policy }
    }

    /// How invalid words are handled.
    pub fn policy(&self) -> InvalidWordPolicy {
        self.policy
    }

    /// Load a dictionary file into the tree.
    ///
    /// Fails with [`SpellError::SourceUnavailable`] if the file cannot be
    /// opened or its first block cannot be read (a directory, for example).
    /// Read errors later in the file surface as [`SpellError::Io`].
    pub fn load_path<P: AsRef<Path>>(&self, path: P, tree: &mut PrefixTree) -> Result<LoadReport> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SpellError::source_unavailable(path, e))?;

        let mut reader = BufReader::new(file);
        reader
            .fill_buf()
            .map_err(|e| SpellError::source_unavailable(path, e))?;

        debug!("Loading dictionary from {}", path.display());
        self.load_reader(reader, tree)
    }

    /// Load every word from a buffered reader into the tree.
    pub fn load_reader<R: BufRead>(&self, reader: R, tree: &mut PrefixTree) -> Result<LoadReport> {
        let mut report = LoadReport::default();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            for token in line.split_whitespace() {
                self.insert_token(token, line_num + 1, tree, &mut report)?;
            }
        }

        debug!(
            "Loaded {} tokens ({} inserted, {} skipped); tree has {} words in {} nodes",
            report.tokens,
            report.inserted,
            report.skipped,
            tree.word_count(),
            tree.node_count()
        );

        Ok(report)
    }

    /// Load every word of an in-memory text into the tree.
    pub fn load_str(&self, text: &str, tree: &mut PrefixTree) -> Result<LoadReport> {
        self.load_reader(text.as_bytes(), tree)
    }

    fn insert_token(
        &self,
        token: &str,
        line: usize,
        tree: &mut PrefixTree,
        report: &mut LoadReport,
    ) -> Result<()> {
        report.tokens += 1;

        match tree.insert(token) {
            Ok(()) => {
                report.inserted += 1;
                Ok(())
            }
            Err(e) if e.is_invalid_input() && self.policy == InvalidWordPolicy::Skip => {
                warn!("Skipping {token:?} on line {line}: {e}");
                report.skipped += 1;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

/// Build a tree from a dictionary file using the default loader.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<PrefixTree> {
    let mut tree = PrefixTree::new();
    DictionaryLoader::new().load_path(path, &mut tree)?;
    Ok(tree)
}
