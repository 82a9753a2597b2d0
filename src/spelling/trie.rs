//! Frequency-weighted prefix tree used as the spelling dictionary.
//!
//! Words are stored one letter per level below an empty root. Each terminal
//! node counts how many times its word was inserted, which the suggestion
//! engine uses to rank candidates.
//!
//! Only lowercase Latin letters can be stored. ASCII letters are lowercased
//! and any other character is rejected with [`SpellError::InvalidCharacter`]
//! before the tree is touched. Insertion and lookup share this rule, so a
//! word is found by exactly the strings that could have stored it.

use std::fmt;
use std::hash::{Hash, Hasher};

use ahash::AHasher;

use crate::error::{Result, SpellError};
use crate::spelling::node::{PrefixNode, index_letter, letter_index};

/// Lowercase a word and check that it only contains `a`-`z`.
///
/// Only ASCII letters are case folded. Characters whose Unicode lowercase
/// form happens to be ASCII (such as the Kelvin sign) are rejected.
pub fn normalize_word(word: &str) -> Result<String> {
    let normalized = word.to_ascii_lowercase();

    let invalid = normalized
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_lowercase());

    if let Some((position, character)) = invalid {
        return Err(SpellError::invalid_character(
            normalized, character, position,
        ));
    }

    Ok(normalized)
}

/// A prefix tree of lowercase words with insertion counts.
#[derive(Debug, Clone)]
pub struct PrefixTree {
    root: PrefixNode,
    word_count: usize,
    node_count: usize,
}

impl PrefixTree {
    /// Create an empty tree holding only the root node.
    pub fn new() -> Self {
        PrefixTree {
            root: PrefixNode::new(),
            word_count: 0,
            node_count: 1,
        }
    }

    /// Build a tree by inserting every word in order.
    ///
    /// Stops at the first word that fails validation.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = PrefixTree::new();
        for word in words {
            tree.insert(word.as_ref())?;
        }
        Ok(tree)
    }

    /// Insert a word, creating any missing nodes along its path.
    ///
    /// The word is lowercased first. Words that are empty or contain a
    /// character outside `a`-`z` are rejected and leave the tree unchanged.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        let normalized = normalize_word(word)?;
        if normalized.is_empty() {
            return Err(SpellError::EmptyWord);
        }

        let mut current = &mut self.root;
        for byte in normalized.bytes() {
            // Validated above, every byte is in a-z.
            let index = (byte - b'a') as usize;
            let slot = &mut current.children_mut()[index];
            if slot.is_none() {
                self.node_count += 1;
            }
            current = &mut **slot.get_or_insert_with(|| Box::new(PrefixNode::new()));
        }

        if current.frequency() == 0 {
            self.word_count += 1;
        }
        current.increment_frequency();

        Ok(())
    }

    /// Find the node of a stored word.
    ///
    /// Returns `None` when the path is missing, when the string is only a
    /// prefix of stored words, or when it contains characters that can never
    /// be stored.
    pub fn lookup(&self, word: &str) -> Option<&PrefixNode> {
        let mut current = &self.root;
        for byte in word.bytes() {
            let index = letter_index(byte.to_ascii_lowercase())?;
            current = current.child(index)?;
        }

        if current.is_terminal() {
            Some(current)
        } else {
            None
        }
    }

    /// Frequency of a stored word.
    pub fn frequency(&self, word: &str) -> Option<u32> {
        self.lookup(word).map(PrefixNode::frequency)
    }

    /// Whether the word is stored in the tree.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Number of distinct stored words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of allocated nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Whether no word has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// The root node, representing the empty prefix.
    pub fn root(&self) -> &PrefixNode {
        &self.root
    }

    /// Render all stored words, one per line, in lexicographic order.
    pub fn traverse(&self) -> String {
        let mut output = String::new();
        self.walk(|word, _| {
            output.push_str(word);
            output.push('\n');
        });
        output
    }

    /// All stored words in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        self.walk(|word, _| words.push(word.to_string()));
        words
    }

    /// All stored words with their frequencies, in lexicographic order.
    pub fn entries(&self) -> Vec<(String, u32)> {
        let mut entries = Vec::with_capacity(self.word_count);
        self.walk(|word, frequency| entries.push((word.to_string(), frequency)));
        entries
    }

    /// Content hash consistent with structural equality.
    pub fn structural_hash(&self) -> u64 {
        let mut hasher = AHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Pre-order depth-first walk, letters visited a to z.
    fn walk<F: FnMut(&str, u32)>(&self, mut visit: F) {
        let mut buffer = String::new();
        Self::walk_node(&self.root, &mut buffer, &mut visit);
    }

    fn walk_node<F: FnMut(&str, u32)>(node: &PrefixNode, buffer: &mut String, visit: &mut F) {
        if node.is_terminal() {
            visit(buffer.as_str(), node.frequency());
        }

        for (index, child) in node.children().iter().enumerate() {
            if let Some(child) = child {
                buffer.push(index_letter(index));
                Self::walk_node(child, buffer, visit);
                buffer.pop();
            }
        }
    }

    fn hash_node<H: Hasher>(node: &PrefixNode, state: &mut H) {
        node.frequency().hash(state);
        node.child_mask().hash(state);
        for child in node.children().iter().flatten() {
            Self::hash_node(child, state);
        }
    }
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PrefixTree {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl Eq for PrefixTree {}

impl Hash for PrefixTree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word_count.hash(state);
        self.node_count.hash(state);
        Self::hash_node(&self.root, state);
    }
}

impl fmt::Display for PrefixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.traverse())
    }
}
