//! Spelling correction built on a frequency-weighted prefix tree.
//!
//! A [`PrefixTree`] is filled from a word list, then a [`SuggestionEngine`]
//! answers "is this word known, and if not, what did you mean?" by searching
//! single and double character edits of the query.

pub mod config;
pub mod corrector;
pub mod dictionary;
pub mod node;
pub mod suggest;
pub mod trie;

// Re-export commonly used types
pub use config::*;
pub use corrector::*;
pub use dictionary::*;
pub use node::*;
pub use suggest::*;
pub use trie::*;
