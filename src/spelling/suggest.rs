//! Spelling suggestion generation.
//!
//! Candidates are produced by the four single-character edits (deletion,
//! transposition, substitution and insertion). Known candidates one edit
//! away always win over candidates two edits away; within a distance the
//! most frequent word is chosen, ties going to the lexicographically
//! smallest word.

use std::collections::BTreeSet;

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};
use crate::spelling::trie::{PrefixTree, normalize_word};

/// Largest edit distance the engine searches.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// The best correction found for a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Frequency of the suggested word in the dictionary.
    pub frequency: u32,
    /// Edit distance from the query (0 when the query is already known).
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, frequency: u32, distance: usize) -> Self {
        Suggestion {
            word,
            frequency,
            distance,
        }
    }

    /// Whether the query was already a known word.
    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }
}

/// Configuration for spelling suggestion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Maximum edit distance to consider (1 or 2).
    pub max_distance: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_distance: MAX_EDIT_DISTANCE,
        }
    }
}

impl SuggestionConfig {
    /// Check that the configured distance is supported.
    pub fn validate(&self) -> Result<()> {
        if (1..=MAX_EDIT_DISTANCE).contains(&self.max_distance) {
            Ok(())
        } else {
            Err(SpellError::invalid_config(format!(
                "max_distance must be between 1 and {MAX_EDIT_DISTANCE}, got {}",
                self.max_distance
            )))
        }
    }
}

/// Words one deletion away, removing position `i` for each `i` in `0..len`.
pub fn deletions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len())
        .map(|i| {
            chars[..i]
                .iter()
                .chain(chars[i + 1..].iter())
                .collect::<String>()
        })
        .collect()
}

/// Words with positions `i` and `i + 1` swapped, for each `i` in `0..len - 1`.
pub fn transpositions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len().saturating_sub(1))
        .map(|i| {
            let mut new_word = chars.clone();
            new_word.swap(i, i + 1);
            new_word.into_iter().collect()
        })
        .collect()
}

/// Words with one position replaced by a different letter.
pub fn substitutions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut edits = Vec::with_capacity(chars.len() * 25);

    for i in 0..chars.len() {
        for ch in 'a'..='z' {
            if ch != chars[i] {
                let mut new_word = chars.clone();
                new_word[i] = ch;
                edits.push(new_word.into_iter().collect());
            }
        }
    }

    edits
}

/// Words with one letter inserted at each of the `len + 1` positions.
pub fn insertions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut edits = Vec::with_capacity((chars.len() + 1) * 26);

    for i in 0..=chars.len() {
        for ch in 'a'..='z' {
            let mut new_word = chars.clone();
            new_word.insert(i, ch);
            edits.push(new_word.into_iter().collect());
        }
    }

    edits
}

/// Append every single-edit variant of `word` to `edits`.
///
/// Duplicates across the four generators are kept.
pub fn generate_edits(word: &str, edits: &mut Vec<String>) {
    edits.extend(deletions(word));
    edits.extend(transpositions(word));
    edits.extend(substitutions(word));
    edits.extend(insertions(word));
}

/// The raw edit-distance-1 candidate list of a word.
pub fn edits1(word: &str) -> Vec<String> {
    let mut edits = Vec::new();
    generate_edits(word, &mut edits);
    edits
}

/// Main spelling suggestion engine.
///
/// The engine borrows a built tree and never mutates it, so one tree can
/// back any number of engines across threads.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionEngine<'a> {
    tree: &'a PrefixTree,
    config: SuggestionConfig,
}

impl<'a> SuggestionEngine<'a> {
    /// Create a new suggestion engine over the given tree.
    pub fn new(tree: &'a PrefixTree) -> Self {
        SuggestionEngine {
            tree,
            config: SuggestionConfig::default(),
        }
    }

    /// Create a new suggestion engine with custom configuration.
    ///
    /// Fails with [`SpellError::InvalidConfig`] unless `max_distance` is 1
    /// or 2.
    pub fn with_config(tree: &'a PrefixTree, config: SuggestionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_checked_config(tree, config))
    }

    /// Build an engine from a configuration that was validated by the caller.
    pub(crate) fn with_checked_config(tree: &'a PrefixTree, config: SuggestionConfig) -> Self {
        debug_assert!(config.validate().is_ok());
        SuggestionEngine { tree, config }
    }

    /// The tree backing this engine.
    pub fn tree(&self) -> &'a PrefixTree {
        self.tree
    }

    /// Current configuration.
    pub fn config(&self) -> SuggestionConfig {
        self.config
    }

    /// Check if a word exists in the dictionary.
    pub fn is_correct(&self, word: &str) -> bool {
        self.tree.contains(word)
    }

    /// Best correction for a word, or the word itself if it is known.
    ///
    /// Returns `Ok(None)` for the empty string and when nothing is found
    /// within the configured distance. Words containing characters outside
    /// `a`-`z` after lowercasing are rejected.
    pub fn suggest(&self, word: &str) -> Result<Option<String>> {
        Ok(self.suggest_detailed(word)?.map(|suggestion| suggestion.word))
    }

    /// Like [`suggest`](Self::suggest), also reporting frequency and distance.
    pub fn suggest_detailed(&self, word: &str) -> Result<Option<Suggestion>> {
        let word = normalize_word(word)?;
        if word.is_empty() {
            return Ok(None);
        }

        if let Some(node) = self.tree.lookup(&word) {
            trace!("{word:?} is a known word");
            return Ok(Some(Suggestion::new(word, node.frequency(), 0)));
        }

        let first_edits = edits1(&word);
        let known: BTreeSet<String> = first_edits
            .iter()
            .filter(|candidate| self.tree.contains(candidate))
            .cloned()
            .collect();
        trace!(
            "{word:?}: {} distance-1 candidates, {} known",
            first_edits.len(),
            known.len()
        );

        if let Some(best) = self.best_candidate(known, 1) {
            debug!("{word:?} -> {:?} at distance 1", best.word);
            return Ok(Some(best));
        }

        if self.config.max_distance < 2 {
            return Ok(None);
        }

        let mut known = BTreeSet::new();
        let mut second_edits = Vec::new();
        let mut generated = 0usize;
        for candidate in &first_edits {
            second_edits.clear();
            generate_edits(candidate, &mut second_edits);
            generated += second_edits.len();
            known.extend(
                second_edits
                    .drain(..)
                    .filter(|candidate| self.tree.contains(candidate)),
            );
        }
        trace!(
            "{word:?}: {generated} distance-2 candidates, {} known",
            known.len()
        );

        let best = self.best_candidate(known, 2);
        match &best {
            Some(best) => debug!("{word:?} -> {:?} at distance 2", best.word),
            None => debug!("{word:?}: no suggestion"),
        }
        Ok(best)
    }

    /// Suggest corrections for many independent words in parallel.
    ///
    /// Results are returned in input order.
    pub fn suggest_batch<S>(&self, words: &[S]) -> Vec<Result<Option<String>>>
    where
        S: AsRef<str> + Sync,
    {
        words
            .par_iter()
            .map(|word| self.suggest(word.as_ref()))
            .collect()
    }

    /// Pick the most frequent candidate; the first one in order wins ties.
    fn best_candidate(&self, candidates: BTreeSet<String>, distance: usize) -> Option<Suggestion> {
        let mut best: Option<Suggestion> = None;

        for candidate in candidates {
            let Some(frequency) = self.tree.frequency(&candidate) else {
                continue;
            };
            if best.as_ref().is_none_or(|b| frequency > b.frequency) {
                best = Some(Suggestion::new(candidate, frequency, distance));
            }
        }

        best
    }
}
