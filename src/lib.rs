//! # spelltrie
//!
//! A dictionary-backed spelling corrector built on a frequency-weighted
//! prefix tree.
//!
//! ## Features
//!
//! - Lowercase Latin word storage with per-word insertion counts
//! - Exact lookup and lexicographic traversal
//! - Structural equality and hashing of dictionaries
//! - Single best correction within two edits, ranked by frequency
//!
//! ```
//! use spelltrie::spelling::{PrefixTree, SuggestionEngine};
//!
//! let tree = PrefixTree::from_words(["hello", "hello", "hallo"]).unwrap();
//! let engine = SuggestionEngine::new(&tree);
//!
//! assert_eq!(engine.suggest("hbllo").unwrap(), Some("hello".to_string()));
//! assert_eq!(engine.suggest("").unwrap(), None);
//! ```

pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{Result, SpellError};
    pub use crate::spelling::{
        CorrectorConfig, PrefixNode, PrefixTree, SpellCorrector, Suggestion, SuggestionEngine,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
