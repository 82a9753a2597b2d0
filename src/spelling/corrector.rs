//! Main spelling corrector that ties the dictionary and suggestion engine
//! together.
//!
//! [`SpellCorrector`] guards its tree with a read-write lock: loading a
//! dictionary takes the write lock, while any number of threads may query
//! suggestions concurrently under the read lock.

use std::path::Path;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::config::CorrectorConfig;
use crate::spelling::dictionary::{DictionaryLoader, LoadReport};
use crate::spelling::suggest::{Suggestion, SuggestionEngine};
use crate::spelling::trie::PrefixTree;

/// Statistics about the spelling corrector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectorStats {
    /// Number of distinct words in the dictionary.
    pub word_count: usize,
    /// Number of nodes in the prefix tree, including the root.
    pub node_count: usize,
}

/// Dictionary-backed spelling corrector.
#[derive(Debug)]
pub struct SpellCorrector {
    tree: RwLock<PrefixTree>,
    config: CorrectorConfig,
}

impl SpellCorrector {
    /// Create a new spelling corrector with an empty dictionary.
    pub fn new() -> Self {
        SpellCorrector {
            tree: RwLock::new(PrefixTree::new()),
            config: CorrectorConfig::default(),
        }
    }

    /// Create a new spelling corrector with custom configuration.
    ///
    /// Fails with [`SpellError::InvalidConfig`](crate::error::SpellError::InvalidConfig)
    /// if the configuration does not validate.
    pub fn with_config(config: CorrectorConfig) -> Result<Self> {
        Self::with_tree(PrefixTree::new(), config)
    }

    /// Create a new spelling corrector around an already built tree.
    pub fn with_tree(tree: PrefixTree, config: CorrectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(SpellCorrector {
            tree: RwLock::new(tree),
            config,
        })
    }

    /// Current configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Add every word of a dictionary file.
    pub fn use_dictionary<P: AsRef<Path>>(&self, path: P) -> Result<LoadReport> {
        let loader = DictionaryLoader::with_policy(self.config.invalid_words);
        let mut tree = self.tree.write();
        loader.load_path(path, &mut tree)
    }

    /// Add every word of an in-memory text.
    pub fn use_text(&self, text: &str) -> Result<LoadReport> {
        let loader = DictionaryLoader::with_policy(self.config.invalid_words);
        let mut tree = self.tree.write();
        loader.load_str(text, &mut tree)
    }

    /// Add a single word to the dictionary.
    pub fn add_word(&self, word: &str) -> Result<()> {
        self.tree.write().insert(word)
    }

    /// Check if a word is correctly spelled.
    pub fn is_correct(&self, word: &str) -> bool {
        self.tree.read().contains(word)
    }

    /// The word itself if known, otherwise the best correction, if any.
    pub fn suggest_similar_word(&self, word: &str) -> Result<Option<String>> {
        let tree = self.tree.read();
        self.engine(&tree).suggest(word)
    }

    /// Best correction with its frequency and edit distance.
    pub fn suggest_detailed(&self, word: &str) -> Result<Option<Suggestion>> {
        let tree = self.tree.read();
        self.engine(&tree).suggest_detailed(word)
    }

    /// Suggest corrections for many independent words in parallel.
    pub fn suggest_batch<S>(&self, words: &[S]) -> Vec<Result<Option<String>>>
    where
        S: AsRef<str> + Sync,
    {
        let tree = self.tree.read();
        self.engine(&tree).suggest_batch(words)
    }

    /// Get statistics about the corrector.
    pub fn stats(&self) -> CorrectorStats {
        let tree = self.tree.read();
        CorrectorStats {
            word_count: tree.word_count(),
            node_count: tree.node_count(),
        }
    }

    /// All known words, one per line, in lexicographic order.
    pub fn dump(&self) -> String {
        self.tree.read().traverse()
    }

    /// A copy of the current dictionary.
    pub fn snapshot(&self) -> PrefixTree {
        self.tree.read().clone()
    }

    /// Take the dictionary out of the corrector.
    pub fn into_tree(self) -> PrefixTree {
        self.tree.into_inner()
    }

    fn engine<'a>(&self, tree: &'a PrefixTree) -> SuggestionEngine<'a> {
        SuggestionEngine::with_checked_config(tree, self.config.suggestion_config())
    }
}

impl Default for SpellCorrector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpellError;
    use crate::spelling::config::InvalidWordPolicy;
    use std::io::Write;
    use std::sync::Arc;
    use std::thread;
    use tempfile::NamedTempFile;

    #[test]
    fn test_corrector_creation() {
        let corrector = SpellCorrector::new();
        let stats = corrector.stats();
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.node_count, 1);
        assert_eq!(corrector.suggest_similar_word("anything").unwrap(), None);
    }

    #[test]
    fn test_use_dictionary() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "cat cat cat car car car car car").unwrap();
        temp_file.flush().unwrap();

        let corrector = SpellCorrector::new();
        let report = corrector.use_dictionary(temp_file.path()).unwrap();
        assert_eq!(report.inserted, 8);

        assert!(corrector.is_correct("cat"));
        assert_eq!(
            corrector.suggest_similar_word("cit").unwrap(),
            Some("cat".to_string())
        );
        assert_eq!(
            corrector.suggest_similar_word("cax").unwrap(),
            Some("car".to_string())
        );
    }

    #[test]
    fn test_missing_dictionary() {
        let corrector = SpellCorrector::new();
        let result = corrector.use_dictionary("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(SpellError::SourceUnavailable { .. })));
    }

    #[test]
    fn test_skip_policy_from_config() {
        let config = CorrectorConfig {
            invalid_words: InvalidWordPolicy::Skip,
            ..Default::default()
        };
        let corrector = SpellCorrector::with_config(config).unwrap();
        let report = corrector.use_text("one two's three").unwrap();

        assert_eq!(report.skipped, 1);
        assert_eq!(corrector.dump(), "one\nthree\n");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        for max_distance in [0, 3] {
            let config = CorrectorConfig {
                max_distance,
                ..Default::default()
            };
            assert!(matches!(
                SpellCorrector::with_config(config.clone()),
                Err(SpellError::InvalidConfig(_))
            ));
            assert!(matches!(
                SpellCorrector::with_tree(PrefixTree::new(), config),
                Err(SpellError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_with_tree_distance_one() {
        let tree = PrefixTree::from_words(["hello"]).unwrap();
        let config = CorrectorConfig {
            max_distance: 1,
            ..Default::default()
        };
        let corrector = SpellCorrector::with_tree(tree, config).unwrap();

        assert_eq!(corrector.suggest_similar_word("hxllx").unwrap(), None);
        assert_eq!(
            corrector.suggest_similar_word("hxllo").unwrap(),
            Some("hello".to_string())
        );
    }

    #[test]
    fn test_add_word_and_stats() {
        let corrector = SpellCorrector::new();
        corrector.add_word("tea").unwrap();
        corrector.add_word("ten").unwrap();
        corrector.add_word("tea").unwrap();

        let stats = corrector.stats();
        assert_eq!(stats.word_count, 2);
        // root, t, e, a, n
        assert_eq!(stats.node_count, 5);

        let detailed = corrector.suggest_detailed("tez").unwrap().unwrap();
        assert_eq!(detailed.word, "tea");
        assert_eq!(detailed.frequency, 2);
    }

    #[test]
    fn test_snapshot_equality() {
        let left = SpellCorrector::new();
        left.use_text("b a c").unwrap();
        let right = SpellCorrector::new();
        right.use_text("c b a").unwrap();

        assert_eq!(left.snapshot(), right.snapshot());
        assert_eq!(left.into_tree(), right.into_tree());
    }

    #[test]
    fn test_concurrent_queries() {
        let corrector = Arc::new(SpellCorrector::new());
        corrector.use_text("hello hello world").unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let corrector = Arc::clone(&corrector);
                thread::spawn(move || corrector.suggest_similar_word("wrld").unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some("world".to_string()));
        }
    }

    #[test]
    fn test_suggest_batch() {
        let corrector = SpellCorrector::new();
        corrector.use_text("apple banana cherry").unwrap();

        let results = corrector.suggest_batch(&["aple", "banan", "chery"]);
        let words: Vec<_> = results.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(
            words,
            vec![
                Some("apple".to_string()),
                Some("banana".to_string()),
                Some("cherry".to_string())
            ]
        );
    }
}
